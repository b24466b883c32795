//! Bearer Token Extractor
//!
//! The authentication gate for protected endpoints. Extracts and verifies
//! the `Authorization: Bearer <token>` header, making the authenticated
//! identity available to the handler. Pure gate: never touches the database.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};
use kernel::id::UserId;
use platform::token::TokenService;

use crate::error::AuthError;

/// Identity attached to a request that passed the gate
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
}

/// Extractor that requires a valid bearer token
///
/// Rejections follow the gate contract:
/// - missing header → 401 "Authorization header is required."
/// - not `Bearer <token>` → 400 "Malformed authorization header."
/// - verification failure → 400 "Invalid token."
///
/// ```rust,ignore
/// async fn create_article(Auth(user): Auth, ...) -> ... {
///     // user.id is the authenticated owner
/// }
/// ```
#[derive(Debug)]
pub struct Auth(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Auth
where
    Arc<TokenService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let tokens = Arc::<TokenService>::from_ref(state);
        let claims = tokens.verify(token).map_err(|_| AuthError::InvalidToken)?;

        Ok(Auth(AuthenticatedUser {
            id: UserId::from(claims.id),
            username: claims.username,
        }))
    }
}

/// Pull the raw token out of the `Authorization` header
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?;

    let value = header.to_str().map_err(|_| AuthError::MalformedAuthHeader)?;

    value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedAuthHeader)
}
