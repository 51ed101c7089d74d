//! Admin token extractor.
//!
//! Reads the raw `Authorization` header value -- no `Bearer ` scheme is
//! stripped -- and delegates to the auth gate's prefix check. Extracting
//! this from a handler gates the route behind the admin token.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use feedbackd_core::auth;

use crate::http::error::AppError;

/// Authorized-admin request marker. Extracting this validates the token.
pub struct AdminToken;

impl<S> FromRequestParts<S> for AdminToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Non-UTF-8 header values count as missing.
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        auth::authorize(token)?;
        Ok(AdminToken)
    }
}
