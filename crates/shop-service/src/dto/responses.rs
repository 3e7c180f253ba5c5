//! Response DTOs for API endpoints
//!
//! Brand fields use camelCase keys. Snowflake IDs are serialized as strings
//! for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shop_core::entities::{BrandOrigin, BrandStatus};

// ============================================================================
// Brand Responses
// ============================================================================

/// Brand as returned to sellers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_by: BrandOrigin,
    pub creator_id: String,
    pub logo: String,
    pub seo_tags: SeoTagsResponse,
    pub is_active: bool,
    pub status: BrandStatus,
    pub official: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoTagsResponse {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Body of a successful brand registration
#[derive(Debug, Clone, Serialize)]
pub struct BrandCreatedResponse {
    pub message: String,
    pub brand: BrandResponse,
}

impl BrandCreatedResponse {
    pub const MESSAGE: &'static str = "Brand uploaded successfully";

    pub fn new(brand: BrandResponse) -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
            brand,
        }
    }
}

/// Body of a seller brand listing
#[derive(Debug, Clone, Serialize)]
pub struct BrandListResponse {
    pub message: String,
    pub brands: Vec<BrandResponse>,
}

impl BrandListResponse {
    pub const SELLER_FOUND: &'static str = "Seller brands retrieved successfully";
    pub const SELLER_EMPTY: &'static str = "No brands found created by this seller.";
    pub const VERIFIED_FOUND: &'static str = "Verified seller brands retrieved successfully";
    pub const VERIFIED_EMPTY: &'static str = "No verified brands found created by this seller.";

    /// Listing of every brand a seller created
    pub fn seller(brands: Vec<BrandResponse>) -> Self {
        Self::with_messages(brands, Self::SELLER_FOUND, Self::SELLER_EMPTY)
    }

    /// Listing of a seller's verified brands
    pub fn verified(brands: Vec<BrandResponse>) -> Self {
        Self::with_messages(brands, Self::VERIFIED_FOUND, Self::VERIFIED_EMPTY)
    }

    fn with_messages(brands: Vec<BrandResponse>, found: &str, empty: &str) -> Self {
        let message = if brands.is_empty() { empty } else { found };
        Self {
            message: message.to_string(),
            brands,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, storage_healthy: bool) -> Self {
        let all_healthy = database_healthy && storage_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: health_label(database_healthy),
                storage: health_label(storage_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

fn health_label(healthy: bool) -> String {
    if healthy { "healthy" } else { "unhealthy" }.to_string()
}
