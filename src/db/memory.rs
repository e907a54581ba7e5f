use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::RecommendationStore;
use crate::{
    error::{AppError, AppResult},
    models::{NewRecommendation, Recommendation, ScoreDirection, ScoreFilter},
};

/// Recommendation store kept in process memory
///
/// Every write happens under one lock, so the name check in `create` and
/// the counter update in `update_score` are atomic.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<InMemoryStoreInner>>,
}

struct InMemoryStoreInner {
    next_id: i32,
    records: BTreeMap<i32, Recommendation>,
}

impl Default for InMemoryStoreInner {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RecommendationStore for InMemoryStore {
    async fn create(&self, data: NewRecommendation) -> AppResult<Recommendation> {
        let mut inner = self.inner.write().await;

        if inner.records.values().any(|r| r.name == data.name) {
            return Err(AppError::duplicate_name());
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let recommendation = Recommendation {
            id,
            name: data.name,
            youtube_link: data.youtube_link,
            score: 0,
        };
        inner.records.insert(id, recommendation.clone());

        Ok(recommendation)
    }

    async fn find(&self, id: i32) -> AppResult<Option<Recommendation>> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Recommendation>> {
        let inner = self.inner.read().await;
        Ok(inner.records.values().find(|r| r.name == name).cloned())
    }

    async fn find_all(&self, filter: Option<ScoreFilter>) -> AppResult<Vec<Recommendation>> {
        let inner = self.inner.read().await;
        let records = inner
            .records
            .values()
            .rev()
            .filter(|r| filter.map_or(true, |f| f.matches(r.score)))
            .cloned()
            .collect();
        Ok(records)
    }

    async fn find_most_recent(&self, limit: usize) -> AppResult<Vec<Recommendation>> {
        let inner = self.inner.read().await;
        Ok(inner.records.values().rev().take(limit).cloned().collect())
    }

    async fn get_top_by_score(&self, amount: usize) -> AppResult<Vec<Recommendation>> {
        let inner = self.inner.read().await;
        let mut records: Vec<Recommendation> = inner.records.values().cloned().collect();
        records.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        records.truncate(amount);
        Ok(records)
    }

    async fn update_score(
        &self,
        id: i32,
        direction: ScoreDirection,
    ) -> AppResult<Recommendation> {
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .get_mut(&id)
            .ok_or_else(|| AppError::recommendation_not_found(id))?;

        record.score += direction.delta();
        Ok(record.clone())
    }

    async fn remove(&self, id: i32) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.records.remove(&id);
        Ok(())
    }

    async fn truncate(&self) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        *inner = InMemoryStoreInner::default();
        Ok(())
    }
}
