//! Domain entities - core business objects

mod brand;

pub use brand::{parse_keywords, Brand, BrandDraft, BrandOrigin, BrandStatus, SeoTags};
