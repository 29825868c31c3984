//! Authentication middleware
//!
//! Gate applied to protected routes. Extracts the bearer token from the
//! `token` request header, verifies it against the pre-computed keys in
//! AppState, and hands the embedded identity to the handler.
//!
//! A missing or blank header is rejected with 401; a token that fails
//! verification, or whose claims carry no usable account ID, is rejected
//! with 403. Single pass, no retries, no cross-request state.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::FromRef, http::request::Parts};
use uuid::Uuid;

/// Header carrying the bearer token on protected routes.
pub const TOKEN_HEADER: &str = "token";

/// Authenticated identity extracted from a verified token
///
/// Request-scoped: derived from the token's claims and dropped when the
/// request completes.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub account_id: Uuid,
    pub email: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Token is required".to_string()))?;

        let claims = app_state
            .tokens()
            .verify(token)
            .map_err(|_| ApiError::Forbidden("Invalid token".to_string()))?;

        let account_id = claims
            .account_id()
            .map_err(|_| ApiError::Forbidden("Invalid token".to_string()))?;

        Ok(AuthUser {
            account_id,
            email: claims.email,
        })
    }
}
