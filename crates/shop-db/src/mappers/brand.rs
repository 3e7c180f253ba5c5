//! Brand entity <-> model mapper

use shop_core::entities::{Brand, SeoTags};
use shop_core::error::DomainError;
use shop_core::value_objects::Snowflake;

use crate::models::BrandModel;

/// Convert BrandModel to Brand entity
///
/// Fails when a text column holds an origin or status the domain does not know.
impl TryFrom<BrandModel> for Brand {
    type Error = DomainError;

    fn try_from(model: BrandModel) -> Result<Self, Self::Error> {
        Ok(Brand {
            id: Snowflake::new(model.id),
            name: model.name,
            slug: model.slug,
            description: model.description,
            created_by: model.created_by.parse()?,
            creator_id: Snowflake::new(model.creator_id),
            logo: model.logo,
            seo_tags: SeoTags {
                title: model.seo_title,
                description: model.seo_description,
                keywords: model.seo_keywords,
            },
            is_active: model.is_active,
            status: model.status.parse()?,
            official: model.official,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Borrowed column values for inserting a brand
pub struct BrandInsert<'a> {
    pub id: i64,
    pub name: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub created_by: &'static str,
    pub creator_id: i64,
    pub logo: &'a str,
    pub seo_title: &'a str,
    pub seo_description: &'a str,
    pub seo_keywords: &'a [String],
    pub is_active: bool,
    pub status: &'static str,
    pub official: bool,
}

impl<'a> BrandInsert<'a> {
    pub fn new(brand: &'a Brand) -> Self {
        Self {
            id: brand.id.into_inner(),
            name: &brand.name,
            slug: &brand.slug,
            description: &brand.description,
            created_by: brand.created_by.as_str(),
            creator_id: brand.creator_id.into_inner(),
            logo: &brand.logo,
            seo_title: &brand.seo_tags.title,
            seo_description: &brand.seo_tags.description,
            seo_keywords: &brand.seo_tags.keywords,
            is_active: brand.is_active,
            status: brand.status.as_str(),
            official: brand.official,
        }
    }
}
