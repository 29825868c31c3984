//! Post routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::PostService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use blog_shared::types::{CreatePostRequest, PostResponse, PostWithRelations};

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new().route("/post", post(create_post).get(list_posts))
}

/// POST /post - create a post for the authenticated account (requires token)
async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let created = PostService::create(state.db(), auth.account_id, &req.title).await?;
    Ok(Json(created))
}

/// GET /post - list posts with author name and categories
async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<PostWithRelations>>> {
    let posts = PostService::list_with_relations(state.db()).await?;
    Ok(Json(posts))
}
