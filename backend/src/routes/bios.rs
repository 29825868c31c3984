//! Bio routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::BioService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use blog_shared::types::{BioResponse, CreateBioRequest};

/// Create bio routes
pub fn bio_routes() -> Router<AppState> {
    Router::new().route("/bio", post(create_bio))
}

/// POST /bio - create a bio for the authenticated account (requires token)
///
/// The owner is the authenticated identity, never a client-supplied ID.
async fn create_bio(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBioRequest>,
) -> ApiResult<Json<BioResponse>> {
    let bio = BioService::create(state.db(), auth.account_id, req).await?;
    Ok(Json(bio))
}
