use sqlx::{postgres::PgPoolOptions, PgPool};

use super::RecommendationStore;
use crate::{
    error::{AppError, AppResult},
    models::{NewRecommendation, Recommendation, ScoreDirection, ScoreFilter},
};

const COLUMNS: &str = "id, name, youtube_link, score";

/// Connects to PostgreSQL, holding at most `max_connections` open at once
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Recommendation store backed by PostgreSQL
///
/// Expects this table to exist:
///
/// ```sql
/// CREATE TABLE recommendations (
///     id SERIAL PRIMARY KEY,
///     name TEXT NOT NULL UNIQUE,
///     youtube_link TEXT NOT NULL,
///     score INTEGER NOT NULL DEFAULT 0
/// );
/// ```
#[derive(Clone)]
pub struct PgRecommendationStore {
    pool: PgPool,
}

impl PgRecommendationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a `UNIQUE(name)` violation to the same conflict the engine reports
fn map_create_error(error: sqlx::Error) -> AppError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            tracing::warn!(error = %db_error, "Recommendation name collided at insert");
            AppError::duplicate_name()
        }
        _ => AppError::Database(error),
    }
}

fn find_all_query(filter: Option<ScoreFilter>) -> String {
    match filter {
        Some(filter) => format!(
            "SELECT {} FROM recommendations WHERE score {} $1 ORDER BY id DESC",
            COLUMNS,
            filter.comparison.sql_operator()
        ),
        None => format!("SELECT {} FROM recommendations ORDER BY id DESC", COLUMNS),
    }
}

fn to_limit(amount: usize) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

#[async_trait::async_trait]
impl RecommendationStore for PgRecommendationStore {
    async fn create(&self, data: NewRecommendation) -> AppResult<Recommendation> {
        let query = format!(
            "INSERT INTO recommendations (name, youtube_link) VALUES ($1, $2) RETURNING {}",
            COLUMNS
        );

        let created = sqlx::query_as::<_, Recommendation>(&query)
            .bind(&data.name)
            .bind(&data.youtube_link)
            .fetch_one(&self.pool)
            .await
            .map_err(map_create_error)?;

        tracing::debug!(id = created.id, "Inserted recommendation row");

        Ok(created)
    }

    async fn find(&self, id: i32) -> AppResult<Option<Recommendation>> {
        let query = format!("SELECT {} FROM recommendations WHERE id = $1", COLUMNS);

        let found = sqlx::query_as::<_, Recommendation>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Recommendation>> {
        let query = format!("SELECT {} FROM recommendations WHERE name = $1", COLUMNS);

        let found = sqlx::query_as::<_, Recommendation>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found)
    }

    async fn find_all(&self, filter: Option<ScoreFilter>) -> AppResult<Vec<Recommendation>> {
        let query = find_all_query(filter);
        let mut statement = sqlx::query_as::<_, Recommendation>(&query);
        if let Some(filter) = filter {
            statement = statement.bind(filter.score);
        }

        let rows = statement.fetch_all(&self.pool).await?;

        Ok(rows)
    }

    async fn find_most_recent(&self, limit: usize) -> AppResult<Vec<Recommendation>> {
        let query = format!(
            "SELECT {} FROM recommendations ORDER BY id DESC LIMIT $1",
            COLUMNS
        );

        let rows = sqlx::query_as::<_, Recommendation>(&query)
            .bind(to_limit(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn get_top_by_score(&self, amount: usize) -> AppResult<Vec<Recommendation>> {
        let query = format!(
            "SELECT {} FROM recommendations ORDER BY score DESC, id ASC LIMIT $1",
            COLUMNS
        );

        let rows = sqlx::query_as::<_, Recommendation>(&query)
            .bind(to_limit(amount))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn update_score(
        &self,
        id: i32,
        direction: ScoreDirection,
    ) -> AppResult<Recommendation> {
        // Single statement so concurrent votes never lose an update
        let query = format!(
            "UPDATE recommendations SET score = score + $2 WHERE id = $1 RETURNING {}",
            COLUMNS
        );

        sqlx::query_as::<_, Recommendation>(&query)
            .bind(id)
            .bind(direction.delta())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::recommendation_not_found(id))
    }

    async fn remove(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM recommendations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn truncate(&self) -> AppResult<()> {
        sqlx::query("TRUNCATE TABLE recommendations RESTART IDENTITY")
            .execute(&self.pool)
            .await?;

        tracing::info!("Truncated recommendations table");

        Ok(())
    }
}
