//! Axum extractors for request handling
//!
//! Custom extractors for authentication and logo uploads.

mod auth;
mod upload;

pub use auth::AuthUser;
pub use upload::{LogoUpload, LOGO_FIELD};
