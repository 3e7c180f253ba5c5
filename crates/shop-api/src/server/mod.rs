//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use shop_common::{AppConfig, AppError, JwtService};
use shop_core::traits::BrandRepository;
use shop_core::SnowflakeGenerator;
use shop_db::{create_pool, run_migrations, PgBrandRepository};
use shop_service::{ServiceContextBuilder, UploadStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(&config.storage),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    router.merge(health_routes()).with_state(state)
}

/// Connect to PostgreSQL and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = shop_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    build_app_state(config, Arc::new(PgBrandRepository::new(pool)))
}

/// Create AppState around an existing brand repository
pub fn build_app_state(
    config: AppConfig,
    brand_repo: Arc<dyn BrandRepository>,
) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));
    let upload_store = Arc::new(UploadStore::from_config(&config.storage));

    let service_context = ServiceContextBuilder::new()
        .brand_repo(brand_repo)
        .upload_store(upload_store)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;

    state
        .upload_store()
        .ensure_dir()
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    let app = create_app(state);

    run_server(app, addr).await
}
