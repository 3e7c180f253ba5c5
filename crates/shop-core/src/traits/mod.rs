//! Repository traits (ports)

mod repositories;

pub use repositories::{BrandQuery, BrandRepository, RepoResult};
