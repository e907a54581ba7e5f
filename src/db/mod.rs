pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::{create_pool, PgRecommendationStore};

use crate::{
    error::AppResult,
    models::{NewRecommendation, Recommendation, ScoreDirection, ScoreFilter},
};

/// Persistence for recommendation records
///
/// Implementations own all recommendation state. Listings come back newest
/// first (descending id) unless stated otherwise, and never fail on an empty
/// store. Name uniqueness must be enforced natively and reported as
/// `AppError::Conflict`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Creates a record with a zero score
    async fn create(&self, data: NewRecommendation) -> AppResult<Recommendation>;

    async fn find(&self, id: i32) -> AppResult<Option<Recommendation>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Recommendation>>;

    /// Lists every record, optionally restricted by score
    async fn find_all(&self, filter: Option<ScoreFilter>) -> AppResult<Vec<Recommendation>>;

    /// Lists at most `limit` of the newest records
    async fn find_most_recent(&self, limit: usize) -> AppResult<Vec<Recommendation>>;

    /// Lists at most `amount` records by descending score, ties by ascending id
    async fn get_top_by_score(&self, amount: usize) -> AppResult<Vec<Recommendation>>;

    /// Atomically moves the score one step and returns the updated record
    ///
    /// Fails with `AppError::NotFound` when the record no longer exists.
    async fn update_score(&self, id: i32, direction: ScoreDirection)
        -> AppResult<Recommendation>;

    /// Deletes the record; a missing id is not an error
    async fn remove(&self, id: i32) -> AppResult<()>;

    /// Deletes every record and restarts id assignment
    async fn truncate(&self) -> AppResult<()>;
}
