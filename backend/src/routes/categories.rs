//! Category and category-post routes

use crate::error::ApiResult;
use crate::services::CategoryService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use blog_shared::types::{
    CategoryPostResponse, CategoryResponse, CategoryWithPosts, CreateCategoryPostRequest,
    CreateCategoryRequest,
};

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/category", post(create_category).get(list_categories))
        .route("/category-post", post(create_category_post))
}

/// POST /category - create a category
async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let category = CategoryService::create(state.db(), &req.name).await?;
    Ok(Json(category))
}

/// GET /category - list categories with their posts
async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryWithPosts>>> {
    let categories = CategoryService::list_with_posts(state.db()).await?;
    Ok(Json(categories))
}

/// POST /category-post - attach a post to a category
async fn create_category_post(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryPostRequest>,
) -> ApiResult<Json<CategoryPostResponse>> {
    let link = CategoryService::attach_post(state.db(), req.category_id, req.post_id).await?;
    Ok(Json(link))
}
