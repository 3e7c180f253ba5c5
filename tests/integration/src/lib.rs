//! Integration test utilities for the ShopZone brands service
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and the catalog client.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
