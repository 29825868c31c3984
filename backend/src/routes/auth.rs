//! Authentication routes
//!
//! Registration and login. Both are public; login's product is the
//! bearer token clients present in the `token` header on protected
//! routes.

use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use blog_shared::types::{AccountResponse, LoginRequest, RegisterRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new account
///
/// POST /auth/register
///
/// Returns the created account's public fields; the password hash stays
/// server-side.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AccountResponse>> {
    let account =
        AuthService::register(state.db(), state.hasher(), &req.email, &req.password).await?;
    Ok(Json(account))
}

/// Login with email and password
///
/// POST /auth/login
///
/// Returns the signed token as a bare JSON string.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<String>> {
    let token = AuthService::login(
        state.db(),
        state.hasher(),
        state.tokens(),
        &req.email,
        &req.password,
    )
    .await?;
    Ok(Json(token))
}
