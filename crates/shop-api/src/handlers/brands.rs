//! Seller brand handlers
//!
//! Endpoints for registering brands and listing a seller's brands.

use axum::{extract::State, Json};
use shop_service::{BrandCreatedResponse, BrandListResponse, BrandService};

use crate::extractors::{AuthUser, LogoUpload};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a brand with its logo
///
/// POST /seller/brands (multipart/form-data)
pub async fn create_brand(
    State(state): State<AppState>,
    auth: AuthUser,
    LogoUpload { form, logo }: LogoUpload,
) -> ApiResult<Created<Json<BrandCreatedResponse>>> {
    let service = BrandService::new(state.service_context());
    let response = service.create_brand(auth.user_id, form, logo).await?;
    Ok(Created(Json(response)))
}

/// List every brand the seller created
///
/// GET /seller/brands
pub async fn list_seller_brands(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<BrandListResponse>> {
    let service = BrandService::new(state.service_context());
    let response = service.list_seller_brands(auth.user_id).await?;
    Ok(Json(response))
}

/// List the seller's verified brands
///
/// GET /seller/brands/verified
pub async fn list_verified_seller_brands(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<BrandListResponse>> {
    let service = BrandService::new(state.service_context());
    let response = service.list_verified_seller_brands(auth.user_id).await?;
    Ok(Json(response))
}
