//! Repository implementations
//!
//! Implementations of the repository traits defined in shop-core.

mod brand;
mod error;
mod memory;

pub use brand::PgBrandRepository;
pub use memory::MemoryBrandRepository;
