//! Endpoint registry
//!
//! Every URL the client requests is built here from one base URL.

use std::env;

/// Environment variable holding the API base URL
pub const API_URL_VAR: &str = "SHOPZONE_API_URL";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Endpoint registry rooted at the API base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Api {
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `SHOPZONE_API_URL`, falling back to a local server
    pub fn from_env() -> Self {
        Self::new(env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Brands registered by the signed-in seller
    pub fn seller_brands(&self) -> String {
        self.endpoint("/api/v1/seller/brands")
    }

    /// Verified brands registered by the signed-in seller
    pub fn seller_verified_brands(&self) -> String {
        self.endpoint("/api/v1/seller/brands/verified")
    }

    /// Products of every seller across brand types; append `/<subType>`
    pub fn all_sellers_all_brand_types_products(&self) -> String {
        self.endpoint("/api/v1/products/sellers/brand-types")
    }

    /// Products of one sub-type across every seller and brand type
    pub fn sub_type_products(&self, sub_type: &str) -> String {
        format!("{}/{sub_type}", self.all_sellers_all_brand_types_products())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for Api {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
