//! Service context - dependency container for services
//!
//! Holds the brand repository, the logo store, and the shared id and token services.

use std::sync::Arc;

use shop_common::auth::JwtService;
use shop_core::traits::BrandRepository;
use shop_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};
use super::upload::UploadStore;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    brand_repo: Arc<dyn BrandRepository>,
    upload_store: Arc<UploadStore>,
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn new(
        brand_repo: Arc<dyn BrandRepository>,
        upload_store: Arc<UploadStore>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            brand_repo,
            upload_store,
            jwt_service,
            snowflake_generator,
        }
    }

    /// Get the brand repository
    pub fn brand_repo(&self) -> &dyn BrandRepository {
        self.brand_repo.as_ref()
    }

    /// Get the store for uploaded logos
    pub fn upload_store(&self) -> &UploadStore {
        self.upload_store.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("brand_repo", &"dyn BrandRepository")
            .field("upload_store", &self.upload_store)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom dependencies
#[derive(Default)]
pub struct ServiceContextBuilder {
    brand_repo: Option<Arc<dyn BrandRepository>>,
    upload_store: Option<Arc<UploadStore>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand_repo(mut self, repo: Arc<dyn BrandRepository>) -> Self {
        self.brand_repo = Some(repo);
        self
    }

    pub fn upload_store(mut self, store: Arc<UploadStore>) -> Self {
        self.upload_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.brand_repo
                .ok_or_else(|| ServiceError::validation("brand_repo is required"))?,
            self.upload_store
                .ok_or_else(|| ServiceError::validation("upload_store is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
