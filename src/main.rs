use std::sync::Arc;

use recommendation_api::{
    api::{create_router, AppState},
    config::{Config, StoreBackend},
    db::{create_pool, InMemoryStore, PgRecommendationStore, RecommendationStore},
    services::{RecommendationService, StdRandom},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let store: Arc<dyn RecommendationStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = create_pool(&config.database_url, config.max_connections).await?;
            tracing::info!("Connected to PostgreSQL");
            Arc::new(PgRecommendationStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Arc::new(InMemoryStore::new())
        }
    };

    let service = RecommendationService::new(store, Arc::new(StdRandom::from_entropy()));
    let state = AppState::new(service, &config);

    // Create the router with all routes
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, test_routes = config.enable_test_routes, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
