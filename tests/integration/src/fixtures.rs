//! Test fixtures and data generators
//!
//! Provides reusable brand forms, logo payloads and response shapes.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use shop_core::{Brand, BrandDraft, SeoTags, Snowflake};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Logo file attached to a brand form
#[derive(Debug, Clone)]
pub struct LogoFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    pub fn new(file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        }
    }

    pub fn png() -> Self {
        Self::new("logo.png", "image/png", b"\x89PNG\r\n\x1a\nfake")
    }

    pub fn jpeg() -> Self {
        Self::new("logo.jpg", "image/jpeg", b"\xff\xd8\xff\xe0fake")
    }

    pub fn webp() -> Self {
        Self::new("logo.webp", "image/webp", b"RIFF\0\0\0\0WEBPfake")
    }
}

/// Brand registration form
#[derive(Debug, Clone)]
pub struct BrandForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
    pub keywords: String,
    pub logo: Option<LogoFile>,
}

impl BrandForm {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Brand {suffix}"),
            slug: format!("brand-{suffix}"),
            description: "Integration test brand".to_string(),
            seo_title: format!("Brand {suffix} official"),
            seo_description: "Everything from Brand".to_string(),
            keywords: "shoes,sport".to_string(),
            logo: Some(LogoFile::png()),
        }
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = slug.to_string();
        self
    }

    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = keywords.to_string();
        self
    }

    pub fn with_logo(mut self, logo: Option<LogoFile>) -> Self {
        self.logo = logo;
        self
    }

    /// Encode as a multipart form the way a browser would send it
    pub fn into_form(self) -> anyhow::Result<Form> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("slug", self.slug)
            .text("description", self.description)
            .text("seoTags[title]", self.seo_title)
            .text("seoTags[description]", self.seo_description)
            .text("seoTags[keywords]", self.keywords);

        if let Some(logo) = self.logo {
            let part = Part::bytes(logo.bytes)
                .file_name(logo.file_name)
                .mime_str(&logo.content_type)?;
            form = form.part("logo", part);
        }

        Ok(form)
    }
}

/// Brand as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandBody {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_by: String,
    pub creator_id: String,
    pub logo: String,
    pub seo_tags: SeoTagsBody,
    pub is_active: bool,
    pub status: String,
    pub official: bool,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct SeoTagsBody {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Body of a successful creation
#[derive(Debug, Deserialize)]
pub struct CreatedBody {
    pub message: String,
    pub brand: BrandBody,
}

/// Body of a brand listing
#[derive(Debug, Deserialize)]
pub struct ListBody {
    pub message: String,
    pub brands: Vec<BrandBody>,
}

/// Body of an error response
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: Option<String>,
}

/// Brand created by a seller and already verified
pub fn verified_brand(id: i64, seller_id: i64, slug: &str) -> Brand {
    let mut brand = Brand::from_seller(
        Snowflake::new(id),
        Snowflake::new(seller_id),
        BrandDraft {
            name: format!("Verified {slug}"),
            slug: slug.to_string(),
            description: String::new(),
            logo: format!("/uploads/sellerBrand/{id}_logo.png"),
            seo_tags: SeoTags::from_input(String::new(), String::new(), ""),
        },
    );
    brand.verify();
    brand
}
