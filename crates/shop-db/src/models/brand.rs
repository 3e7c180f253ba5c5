//! Brand database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for brands table
#[derive(Debug, Clone, FromRow)]
pub struct BrandModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_by: String,
    pub creator_id: i64,
    pub logo: String,
    pub seo_title: String,
    pub seo_description: String,
    pub seo_keywords: Vec<String>,
    pub is_active: bool,
    pub status: String,
    pub official: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
