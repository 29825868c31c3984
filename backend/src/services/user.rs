//! User service for the plain-user CRUD surface
//!
//! List and single-user reads include the related bio and posts, so the
//! service stitches the relations from separate queries rather than one
//! wide join.

use crate::error::{self, ApiError};
use crate::repositories::{BioRepository, PostRepository, UserRecord, UserRepository};
use blog_shared::types::{BioResponse, PostResponse, UserResponse, UserWithRelations};
use blog_shared::validation::require_non_blank;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// User service for CRUD operations
pub struct UserService;

impl UserService {
    /// Create a plain user (no credentials).
    pub async fn create(pool: &PgPool, email: &str, name: &str) -> Result<UserResponse, ApiError> {
        require_non_blank(email, "Email is required").map_err(ApiError::Validation)?;
        require_non_blank(name, "Name cannot be empty").map_err(ApiError::Validation)?;

        let user = UserRepository::create_with_name(pool, email.trim(), name)
            .await
            .map_err(|e| error::from_sqlx(e, "Email already registered"))?;

        Ok(public_view(user))
    }

    /// List all users with their bio and posts.
    pub async fn list_with_relations(pool: &PgPool) -> Result<Vec<UserWithRelations>, ApiError> {
        let users = UserRepository::list(pool).await?;
        let bios = BioRepository::list(pool).await?;
        let posts = PostRepository::list(pool).await?;

        let mut bios_by_user: HashMap<Uuid, BioResponse> = bios
            .into_iter()
            .map(|b| {
                (
                    b.user_id,
                    BioResponse {
                        id: b.id,
                        name: b.name,
                        about: b.about,
                        address: b.address,
                        user_id: b.user_id,
                    },
                )
            })
            .collect();

        let mut posts_by_user: HashMap<Uuid, Vec<PostResponse>> = HashMap::new();
        for p in posts {
            posts_by_user.entry(p.user_id).or_default().push(PostResponse {
                id: p.id,
                title: p.title,
                user_id: p.user_id,
                created_at: p.created_at,
            });
        }

        Ok(users
            .into_iter()
            .map(|u| UserWithRelations {
                bio: bios_by_user.remove(&u.id),
                posts: posts_by_user.remove(&u.id).unwrap_or_default(),
                id: u.id,
                email: u.email,
                name: u.name,
                created_at: u.created_at,
            })
            .collect())
    }

    /// Fetch one user by email, with bio and posts.
    pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<UserWithRelations, ApiError> {
        require_non_blank(email, "Email is required").map_err(ApiError::Validation)?;

        let user = UserRepository::find_by_email(pool, email.trim())
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let bio = BioRepository::find_by_user(pool, user.id).await?;
        let posts = PostRepository::list_by_user(pool, user.id).await?;

        Ok(UserWithRelations {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
            bio: bio.map(|b| BioResponse {
                id: b.id,
                name: b.name,
                about: b.about,
                address: b.address,
                user_id: b.user_id,
            }),
            posts: posts
                .into_iter()
                .map(|p| PostResponse {
                    id: p.id,
                    title: p.title,
                    user_id: p.user_id,
                    created_at: p.created_at,
                })
                .collect(),
        })
    }

    /// Rename a user identified by email.
    pub async fn update(pool: &PgPool, email: &str, name: &str) -> Result<UserResponse, ApiError> {
        require_non_blank(email, "Email is required").map_err(ApiError::Validation)?;
        require_non_blank(name, "Name cannot be empty").map_err(ApiError::Validation)?;

        let user = UserRepository::update_name(pool, email.trim(), name)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(public_view(user))
    }

    /// Delete a user identified by email, returning the deleted record.
    pub async fn delete(pool: &PgPool, email: &str) -> Result<UserResponse, ApiError> {
        require_non_blank(email, "Email is required").map_err(ApiError::Validation)?;

        let user = UserRepository::delete_by_email(pool, email.trim())
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(public_view(user))
    }
}

/// Strip the credential field before anything leaves the service.
fn public_view(user: UserRecord) -> UserResponse {
    UserResponse {
        id: user.id,
        email: user.email,
        name: user.name,
        created_at: user.created_at,
    }
}
