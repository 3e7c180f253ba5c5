//! In-memory implementation of BrandRepository
//!
//! Backs local runs without PostgreSQL and the API test suites. Slugs are the
//! map keys, so the shard lock taken by `entry` makes insert-if-absent atomic.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::instrument;

use shop_core::entities::Brand;
use shop_core::error::DomainError;
use shop_core::traits::{BrandQuery, BrandRepository, RepoResult};

use super::error::slug_exists;

/// Brand store held in process memory
#[derive(Clone, Default)]
pub struct MemoryBrandRepository {
    brands: Arc<DashMap<String, Brand>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryBrandRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored brands
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Make every operation fail with a database error until switched back
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "brand store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for MemoryBrandRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBrandRepository")
            .field("brands", &self.brands.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BrandRepository for MemoryBrandRepository {
    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Brand>> {
        self.check_available()?;
        Ok(self.brands.get(slug).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn exists_by_slug(&self, slug: &str) -> RepoResult<bool> {
        self.check_available()?;
        Ok(self.brands.contains_key(slug))
    }

    #[instrument(skip(self, brand), fields(slug = %brand.slug))]
    async fn insert_if_absent(&self, brand: &Brand) -> RepoResult<()> {
        self.check_available()?;
        match self.brands.entry(brand.slug.clone()) {
            Entry::Occupied(_) => Err(slug_exists(&brand.slug)),
            Entry::Vacant(vacant) => {
                vacant.insert(brand.clone());
                Ok(())
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_by_query(&self, query: BrandQuery) -> RepoResult<Vec<Brand>> {
        self.check_available()?;
        let mut brands: Vec<Brand> = self
            .brands
            .iter()
            .filter(|entry| query.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        brands.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(brands)
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check_available()
    }
}
