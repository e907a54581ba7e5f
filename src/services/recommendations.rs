use std::sync::Arc;

use crate::{
    db::RecommendationStore,
    error::{AppError, AppResult},
    models::{NewRecommendation, Recommendation, ScoreDirection, ScoreFilter},
    services::random::RandomSource,
};

/// A recommendation is removed once a downvote leaves its score below this
pub const REMOVAL_THRESHOLD: i32 = -5;

/// Scores above this count as popular for random selection
pub const POPULAR_SCORE: i32 = 10;

/// Chance that random selection draws from the popular pool first
pub const POPULAR_PROBABILITY: f64 = 0.7;

/// Scoring and selection rules for recommendations
///
/// Holds no state of its own: every operation re-reads what it needs from
/// the store, so one instance can be shared across all requests.
#[derive(Clone)]
pub struct RecommendationService {
    store: Arc<dyn RecommendationStore>,
    random: Arc<dyn RandomSource>,
}

impl RecommendationService {
    pub fn new(store: Arc<dyn RecommendationStore>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    /// Creates a recommendation with a zero score
    ///
    /// The name check and the create are separate store calls. Two racing
    /// inserts can both pass the check; the store's own uniqueness constraint
    /// then rejects the loser with the same conflict.
    pub async fn insert(&self, input: NewRecommendation) -> AppResult<Recommendation> {
        if self.store.find_by_name(&input.name).await?.is_some() {
            tracing::info!(name = %input.name, "Rejected duplicate recommendation name");
            return Err(AppError::duplicate_name());
        }

        let created = self.store.create(input).await?;
        tracing::info!(id = created.id, name = %created.name, "Recommendation created");

        Ok(created)
    }

    pub async fn upvote(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id).await?;

        let updated = self.store.update_score(id, ScoreDirection::Increment).await?;
        tracing::debug!(id, score = updated.score, "Recommendation upvoted");

        Ok(())
    }

    /// Lowers the score by one, removing the recommendation if it falls
    /// below [`REMOVAL_THRESHOLD`]
    pub async fn downvote(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id).await?;

        // Decide on the score returned by the decrement, never a re-read
        let updated = self.store.update_score(id, ScoreDirection::Decrement).await?;
        tracing::debug!(id, score = updated.score, "Recommendation downvoted");

        if updated.score < REMOVAL_THRESHOLD {
            self.store.remove(id).await?;
            tracing::info!(id, score = updated.score, "Recommendation removed after downvote");
        }

        Ok(())
    }

    /// All recommendations, newest first
    pub async fn get(&self) -> AppResult<Vec<Recommendation>> {
        self.store.find_all(None).await
    }

    /// The `limit` newest recommendations
    pub async fn get_recent(&self, limit: usize) -> AppResult<Vec<Recommendation>> {
        self.store.find_most_recent(limit).await
    }

    /// The `amount` highest-scoring recommendations
    pub async fn get_top(&self, amount: usize) -> AppResult<Vec<Recommendation>> {
        self.store.get_top_by_score(amount).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Recommendation> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| AppError::recommendation_not_found(id))
    }

    /// Picks a recommendation at random, favouring popular ones
    ///
    /// With probability [`POPULAR_PROBABILITY`] the pool is restricted to
    /// scores above [`POPULAR_SCORE`], otherwise to the rest. An empty pool
    /// falls back once to the opposite one.
    pub async fn get_random(&self) -> AppResult<Recommendation> {
        let filter = self.pick_filter();

        let mut pool = self.store.find_all(Some(filter)).await?;
        if pool.is_empty() {
            tracing::debug!(?filter, "Random pool empty, trying opposite filter");
            pool = self.store.find_all(Some(filter.opposite())).await?;
        }

        if pool.is_empty() {
            return Err(AppError::NotFound("No recommendations available".to_string()));
        }

        let index = self.pick_index(pool.len());
        Ok(pool.swap_remove(index))
    }

    /// Removes every recommendation
    pub async fn reset(&self) -> AppResult<()> {
        self.store.truncate().await?;
        tracing::warn!("All recommendations removed");
        Ok(())
    }

    fn pick_filter(&self) -> ScoreFilter {
        if self.random.uniform() < POPULAR_PROBABILITY {
            ScoreFilter::greater_than(POPULAR_SCORE)
        } else {
            ScoreFilter::less_or_equal(POPULAR_SCORE)
        }
    }

    fn pick_index(&self, len: usize) -> usize {
        let index = (self.random.uniform() * len as f64).floor() as usize;
        index.min(len - 1)
    }
}
