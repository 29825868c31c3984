//! User CRUD routes
//!
//! Reads require a token (the lists expose every account's email);
//! create/update/delete keep the original surface's public access.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use blog_shared::types::{CreateUserRequest, UpdateUserRequest, UserResponse, UserWithRelations};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/:email",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// POST /users - create a plain user
async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::create(state.db(), &req.email, &req.name).await?;
    Ok(Json(user))
}

/// GET /users - list users with bios and posts (requires token)
async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<UserWithRelations>>> {
    let users = UserService::list_with_relations(state.db()).await?;
    Ok(Json(users))
}

/// GET /users/:email - fetch one user with bio and posts (requires token)
async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<UserWithRelations>> {
    let user = UserService::get_by_email(state.db(), &email).await?;
    Ok(Json(user))
}

/// PUT /users/:email - rename a user
async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::update(state.db(), &email, &req.name).await?;
    Ok(Json(user))
}

/// DELETE /users/:email - delete a user
async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::delete(state.db(), &email).await?;
    Ok(Json(user))
}
