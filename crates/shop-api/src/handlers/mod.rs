//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod brands;
pub mod health;
