//! Route definitions
//!
//! Seller routes are mounted under /api/v1; stored logos are served as static files.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use shop_common::StorageConfig;
use tower_http::services::ServeDir;

use crate::handlers::{brands, health};
use crate::state::AppState;

/// Allowance on top of the logo size for the text parts and multipart framing
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router(storage: &StorageConfig) -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes(body_limit(storage)))
        .merge(upload_routes(storage))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Request body limit for brand registration
pub fn body_limit(storage: &StorageConfig) -> usize {
    usize::try_from(storage.max_file_size_bytes())
        .unwrap_or(usize::MAX)
        .saturating_add(FORM_OVERHEAD_BYTES)
}

/// API v1 routes
fn api_v1_routes(body_limit: usize) -> Router<AppState> {
    Router::new().merge(seller_brand_routes(body_limit))
}

/// Seller brand routes
fn seller_brand_routes(body_limit: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/seller/brands",
            post(brands::create_brand).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/seller/brands", get(brands::list_seller_brands))
        .route(
            "/seller/brands/verified",
            get(brands::list_verified_seller_brands),
        )
}

/// Static files for uploaded logos
fn upload_routes(storage: &StorageConfig) -> Router<AppState> {
    let prefix = storage.public_prefix.trim_matches('/');
    if prefix.is_empty() {
        tracing::warn!("UPLOAD_PUBLIC_PREFIX is empty; uploaded logos are not served");
        return Router::new();
    }

    Router::new().nest_service(&format!("/{prefix}"), ServeDir::new(&storage.upload_dir))
}
