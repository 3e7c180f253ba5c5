//! Seller authentication
//!
//! Brand routes act on behalf of the seller named by the bearer token.
//! The extractor runs before the multipart body is read, so rejected
//! requests never write a logo to disk.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use shop_common::JwtService;
use shop_core::Snowflake;
use tracing::warn;

use crate::response::ApiError;
use crate::state::AppState;

/// Seller resolved from the access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Snowflake,
}

impl AuthUser {
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }

    /// Resolve a raw bearer token to a seller
    pub fn from_token(jwt: &JwtService, token: &str) -> Result<Self, ApiError> {
        let claims = jwt.validate_access_token(token).map_err(|e| {
            warn!(error = %e, "Rejected access token");
            ApiError::InvalidToken
        })?;

        claims.user_id().map(Self::new).map_err(|e| {
            warn!(error = %e, "Access token subject is not a user id");
            ApiError::InvalidToken
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        Self::from_token(AppState::from_ref(state).jwt_service(), bearer.token())
    }
}
