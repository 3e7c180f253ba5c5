//! Entity to DTO mappers

use shop_core::entities::{Brand, SeoTags};

use super::responses::{BrandResponse, SeoTagsResponse};

impl From<&SeoTags> for SeoTagsResponse {
    fn from(tags: &SeoTags) -> Self {
        Self {
            title: tags.title.clone(),
            description: tags.description.clone(),
            keywords: tags.keywords.clone(),
        }
    }
}

impl From<&Brand> for BrandResponse {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id.to_string(),
            name: brand.name.clone(),
            slug: brand.slug.clone(),
            description: brand.description.clone(),
            created_by: brand.created_by,
            creator_id: brand.creator_id.to_string(),
            logo: brand.logo.clone(),
            seo_tags: SeoTagsResponse::from(&brand.seo_tags),
            is_active: brand.is_active,
            status: brand.status,
            official: brand.official,
            created_at: brand.created_at,
            updated_at: brand.updated_at,
        }
    }
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self::from(&brand)
    }
}
