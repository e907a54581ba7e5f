use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{NewRecommendation, Recommendation},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Create a recommendation
pub async fn create_recommendation(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(input): Json<NewRecommendation>,
) -> AppResult<(StatusCode, Json<Recommendation>)> {
    input.validate()?;

    tracing::info!(request_id = %request_id, name = %input.name, "Creating recommendation");

    let created = state.recommendations.insert(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Newest recommendations, bounded by the configured limit
pub async fn list_recent(State(state): State<AppState>) -> AppResult<Json<Vec<Recommendation>>> {
    let recommendations = state.recommendations.get_recent(state.recent_limit).await?;
    Ok(Json(recommendations))
}

pub async fn get_random(State(state): State<AppState>) -> AppResult<Json<Recommendation>> {
    let recommendation = state.recommendations.get_random().await?;
    Ok(Json(recommendation))
}

pub async fn get_top(
    State(state): State<AppState>,
    Path(amount): Path<usize>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let recommendations = state.recommendations.get_top(amount).await?;
    Ok(Json(recommendations))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Recommendation>> {
    let recommendation = state.recommendations.get_by_id(id).await?;
    Ok(Json(recommendation))
}

pub async fn upvote(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    tracing::info!(request_id = %request_id, id, "Upvote");

    state.recommendations.upvote(id).await?;
    Ok(StatusCode::OK)
}

pub async fn downvote(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    tracing::info!(request_id = %request_id, id, "Downvote");

    state.recommendations.downvote(id).await?;
    Ok(StatusCode::OK)
}

/// Wipe all recommendations (test environments only)
pub async fn reset(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<StatusCode> {
    tracing::warn!(request_id = %request_id, "Resetting recommendations");

    state.recommendations.reset().await?;
    Ok(StatusCode::OK)
}
