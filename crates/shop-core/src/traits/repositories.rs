//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Brand, BrandOrigin, BrandStatus};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Filter for listing brands that belong to one creator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandQuery {
    pub creator_id: Snowflake,
    pub created_by: BrandOrigin,
    /// Only include brands in this status when set
    pub status: Option<BrandStatus>,
}

impl BrandQuery {
    /// Every brand a seller created
    pub fn seller(creator_id: Snowflake) -> Self {
        Self {
            creator_id,
            created_by: BrandOrigin::Seller,
            status: None,
        }
    }

    /// Only the verified brands a seller created
    pub fn seller_verified(creator_id: Snowflake) -> Self {
        Self {
            status: Some(BrandStatus::Verified),
            ..Self::seller(creator_id)
        }
    }

    /// Check whether a brand satisfies this filter
    pub fn matches(&self, brand: &Brand) -> bool {
        brand.creator_id == self.creator_id
            && brand.created_by == self.created_by
            && self.status.is_none_or(|status| brand.status == status)
    }
}

// ============================================================================
// Brand Repository
// ============================================================================

#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Find brand by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Brand>>;

    /// Check if a slug is already taken
    async fn exists_by_slug(&self, slug: &str) -> RepoResult<bool>;

    /// Insert a brand unless its slug is taken.
    ///
    /// The check and the write are a single atomic step; a taken slug yields
    /// `DomainError::BrandSlugExists` and leaves the store unchanged.
    async fn insert_if_absent(&self, brand: &Brand) -> RepoResult<()>;

    /// List brands matching a query, newest first
    async fn find_by_query(&self, query: BrandQuery) -> RepoResult<Vec<Brand>>;

    /// Verify the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
