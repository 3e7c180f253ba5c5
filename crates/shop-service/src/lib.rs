//! # shop-service
//!
//! Application layer containing brand use cases, logo storage, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    BrandCreatedResponse, BrandListResponse, BrandResponse, CreateBrandRequest, HealthChecks,
    HealthResponse, ReadinessResponse, SeoTagsInput, SeoTagsResponse,
};
pub use services::{
    BrandService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StoredUpload, UploadStore,
};
