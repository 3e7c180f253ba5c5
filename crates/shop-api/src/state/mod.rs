//! Shared handler state

use std::sync::Arc;

use shop_common::{AppConfig, JwtService};
use shop_service::{ServiceContext, UploadStore};

/// Cloned into every handler; both halves are behind `Arc`
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.services.jwt_service()
    }

    /// Where received logos are written
    pub fn upload_store(&self) -> &UploadStore {
        self.services.upload_store()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("env", &self.config.app.env)
            .field("upload_dir", &self.upload_store().dir())
            .finish_non_exhaustive()
    }
}
