//! Database models - SQLx-compatible structs for PostgreSQL tables

mod brand;

pub use brand::BrandModel;
