//! Business logic services
//!
//! Brand registration and listing, plus the disk store for uploaded logos.

pub mod brand;
pub mod context;
pub mod error;
pub mod upload;

pub use brand::BrandService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use upload::{StoredUpload, UploadStore, ALLOWED_CONTENT_TYPES};
