//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - The brand registration form
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateBrandRequest, SeoTagsInput};

pub use responses::{
    BrandCreatedResponse, BrandListResponse, BrandResponse, HealthChecks, HealthResponse,
    ReadinessResponse, SeoTagsResponse,
};
