//! # shop-db
//!
//! Database layer implementing the brand repository trait.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> model mappers
//! - `PgBrandRepository` for PostgreSQL and `MemoryBrandRepository` for tests
//!   and local runs without a database
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_db::{create_pool, run_migrations, DatabaseConfig, PgBrandRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let brand_repo = PgBrandRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{MemoryBrandRepository, PgBrandRepository};
