//! Brand entity - a seller-registered brand awaiting or holding verification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Who registered the brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandOrigin {
    Seller,
    Admin,
}

impl BrandOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seller => "seller",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for BrandOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandOrigin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seller" => Ok(Self::Seller),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::ValidationError(format!(
                "unknown brand origin: {other}"
            ))),
        }
    }
}

/// Brand lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl BrandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BrandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::ValidationError(format!(
                "unknown brand status: {other}"
            ))),
        }
    }
}

/// Search-engine metadata attached to a brand
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeoTags {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl SeoTags {
    /// Build SEO tags from raw form input, splitting keywords on commas
    pub fn from_input(title: String, description: String, keywords: &str) -> Self {
        Self {
            title,
            description,
            keywords: parse_keywords(keywords),
        }
    }
}

/// Split a comma-separated keyword string.
///
/// Tokens are kept verbatim: no trimming, and empty tokens survive, so `""`
/// yields `[""]` and `"a,,b"` yields `["a", "", "b"]`.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input.split(',').map(String::from).collect()
}

/// Fields supplied by a seller when registering a brand
#[derive(Debug, Clone, Default)]
pub struct BrandDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub logo: String,
    pub seo_tags: SeoTags,
}

/// Brand entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub id: Snowflake,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_by: BrandOrigin,
    pub creator_id: Snowflake,
    pub logo: String,
    pub seo_tags: SeoTags,
    pub is_active: bool,
    pub status: BrandStatus,
    pub official: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    /// Create a brand submitted by a seller.
    ///
    /// Seller brands start `pending`, active, and marked official.
    pub fn from_seller(id: Snowflake, creator_id: Snowflake, draft: BrandDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            slug: draft.slug,
            description: draft.description,
            created_by: BrandOrigin::Seller,
            creator_id,
            logo: draft.logo,
            seo_tags: draft.seo_tags,
            is_active: true,
            status: BrandStatus::Pending,
            official: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user created this brand
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.creator_id == user_id
    }

    #[inline]
    pub fn is_verified(&self) -> bool {
        self.status == BrandStatus::Verified
    }

    /// Mark the brand as approved by an administrator
    pub fn verify(&mut self) {
        self.status = BrandStatus::Verified;
        self.updated_at = Utc::now();
    }

    /// Mark the brand as refused by an administrator
    pub fn reject(&mut self) {
        self.status = BrandStatus::Rejected;
        self.updated_at = Utc::now();
    }
}
