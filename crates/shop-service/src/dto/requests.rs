//! Request DTOs for API endpoints
//!
//! Brand registration arrives as multipart form fields; the API layer feeds
//! each text part into [`CreateBrandRequest::set_form_field`].

use serde::Deserialize;
use shop_core::entities::{BrandDraft, SeoTags};

/// Brand registration form.
///
/// Fields are taken as sent, with no length limits. Absent fields stay
/// empty strings; empty keywords become `[""]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBrandRequest {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub seo_tags: SeoTagsInput,
}

/// Nested `seoTags` form group
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeoTagsInput {
    pub title: String,
    pub description: String,
    /// Comma-separated keywords
    pub keywords: String,
}

impl CreateBrandRequest {
    /// Assign a multipart text field by name.
    ///
    /// Accepts `seoTags[title]` and `seoTags.title` for the nested group.
    /// Returns `false` for names the form does not know, which are ignored.
    pub fn set_form_field(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "name" => &mut self.name,
            "slug" => &mut self.slug,
            "description" => &mut self.description,
            "seoTags[title]" | "seoTags.title" => &mut self.seo_tags.title,
            "seoTags[description]" | "seoTags.description" => &mut self.seo_tags.description,
            "seoTags[keywords]" | "seoTags.keywords" => &mut self.seo_tags.keywords,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Turn the form into a brand draft pointing at a stored logo
    pub fn into_draft(self, logo: String) -> BrandDraft {
        BrandDraft {
            name: self.name,
            slug: self.slug,
            description: self.description,
            logo,
            seo_tags: SeoTags::from_input(
                self.seo_tags.title,
                self.seo_tags.description,
                &self.seo_tags.keywords,
            ),
        }
    }
}
