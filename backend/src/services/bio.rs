//! Bio service

use crate::error::{self, ApiError};
use crate::repositories::{BioRepository, CreateBio};
use blog_shared::types::{BioResponse, CreateBioRequest};
use blog_shared::validation::require_non_blank;
use sqlx::PgPool;
use uuid::Uuid;

/// Bio service
pub struct BioService;

impl BioService {
    /// Create a bio owned by the authenticated account.
    pub async fn create(
        pool: &PgPool,
        account_id: Uuid,
        req: CreateBioRequest,
    ) -> Result<BioResponse, ApiError> {
        require_non_blank(&req.name, "Name is required").map_err(ApiError::Validation)?;

        let bio = BioRepository::create(
            pool,
            CreateBio {
                name: req.name,
                about: req.about,
                address: req.address,
                user_id: account_id,
            },
        )
        .await
        .map_err(|e| error::from_sqlx(e, "Bio already exists"))?;

        Ok(BioResponse {
            id: bio.id,
            name: bio.name,
            about: bio.about,
            address: bio.address,
            user_id: bio.user_id,
        })
    }
}
