//! Brand service
//!
//! Handles seller brand registration and the seller's brand listings.

use shop_core::entities::Brand;
use shop_core::traits::BrandQuery;
use shop_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{BrandCreatedResponse, BrandListResponse, BrandResponse, CreateBrandRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::upload::StoredUpload;

/// Brand service
pub struct BrandService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BrandService<'a> {
    /// Create a new BrandService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a brand for a seller.
    ///
    /// The logo has already been written by the upload step. When registration
    /// fails after that, the stored file is deleted again.
    #[instrument(skip(self, request, upload), fields(slug = %request.slug))]
    pub async fn create_brand(
        &self,
        seller_id: Snowflake,
        request: CreateBrandRequest,
        upload: Option<StoredUpload>,
    ) -> ServiceResult<BrandCreatedResponse> {
        let upload = upload.ok_or(DomainError::MissingUpload)?;

        match self.register(seller_id, request, &upload).await {
            Ok(brand) => {
                info!(brand_id = %brand.id, seller_id = %seller_id, "Brand registered");
                Ok(BrandCreatedResponse::new(BrandResponse::from(&brand)))
            }
            Err(e) => {
                self.discard_upload(&upload).await;
                Err(e)
            }
        }
    }

    async fn register(
        &self,
        seller_id: Snowflake,
        request: CreateBrandRequest,
        upload: &StoredUpload,
    ) -> ServiceResult<Brand> {
        let repo = self.ctx.brand_repo();
        if repo.exists_by_slug(&request.slug).await? {
            return Err(DomainError::BrandSlugExists(request.slug).into());
        }

        let brand = Brand::from_seller(
            self.ctx.generate_id(),
            seller_id,
            request.into_draft(upload.public_path.clone()),
        );

        // A concurrent registration can still take the slug here
        repo.insert_if_absent(&brand).await?;

        Ok(brand)
    }

    async fn discard_upload(&self, upload: &StoredUpload) {
        if let Err(e) = self.ctx.upload_store().remove(upload).await {
            warn!(file = %upload.filename, error = %e, "Failed to remove orphaned logo");
        }
    }

    /// List every brand the seller created, newest first
    #[instrument(skip(self))]
    pub async fn list_seller_brands(&self, seller_id: Snowflake) -> ServiceResult<BrandListResponse> {
        let brands = self.find(BrandQuery::seller(seller_id)).await?;
        Ok(BrandListResponse::seller(brands))
    }

    /// List the seller's verified brands, newest first
    #[instrument(skip(self))]
    pub async fn list_verified_seller_brands(
        &self,
        seller_id: Snowflake,
    ) -> ServiceResult<BrandListResponse> {
        let brands = self.find(BrandQuery::seller_verified(seller_id)).await?;
        Ok(BrandListResponse::verified(brands))
    }

    async fn find(&self, query: BrandQuery) -> ServiceResult<Vec<BrandResponse>> {
        let brands = self.ctx.brand_repo().find_by_query(query).await?;
        Ok(brands.iter().map(BrandResponse::from).collect())
    }
}
