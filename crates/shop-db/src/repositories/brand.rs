//! PostgreSQL implementation of BrandRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use shop_core::entities::Brand;
use shop_core::traits::{BrandQuery, BrandRepository, RepoResult};

use crate::mappers::BrandInsert;
use crate::models::BrandModel;

use super::error::{map_db_error, map_unique_violation, slug_exists};

const BRAND_COLUMNS: &str = "id, name, slug, description, created_by, creator_id, logo, \
     seo_title, seo_description, seo_keywords, is_active, status, official, created_at, updated_at";

/// PostgreSQL implementation of BrandRepository
#[derive(Clone)]
pub struct PgBrandRepository {
    pool: PgPool,
}

impl PgBrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandRepository for PgBrandRepository {
    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Brand>> {
        let result = sqlx::query_as::<_, BrandModel>(&format!(
            "SELECT {BRAND_COLUMNS} FROM brands WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Brand::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn exists_by_slug(&self, slug: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM brands WHERE slug = $1)
            ",
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, brand), fields(slug = %brand.slug))]
    async fn insert_if_absent(&self, brand: &Brand) -> RepoResult<()> {
        let row = BrandInsert::new(brand);

        let result = sqlx::query(
            r"
            INSERT INTO brands (
                id, name, slug, description, created_by, creator_id, logo,
                seo_title, seo_description, seo_keywords, is_active, status, official,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(row.id)
        .bind(row.name)
        .bind(row.slug)
        .bind(row.description)
        .bind(row.created_by)
        .bind(row.creator_id)
        .bind(row.logo)
        .bind(row.seo_title)
        .bind(row.seo_description)
        .bind(row.seo_keywords)
        .bind(row.is_active)
        .bind(row.status)
        .bind(row.official)
        .bind(brand.created_at)
        .bind(brand.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || slug_exists(&brand.slug)))?;

        if result.rows_affected() == 0 {
            return Err(slug_exists(&brand.slug));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_query(&self, query: BrandQuery) -> RepoResult<Vec<Brand>> {
        let results = sqlx::query_as::<_, BrandModel>(&format!(
            "SELECT {BRAND_COLUMNS} FROM brands \
             WHERE creator_id = $1 AND created_by = $2 AND ($3::TEXT IS NULL OR status = $3) \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(query.creator_id.into_inner())
        .bind(query.created_by.as_str())
        .bind(query.status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Brand::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
