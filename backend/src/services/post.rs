//! Post service
//!
//! The public post listing includes each post's author name and attached
//! categories, stitched from the association table.

use crate::error::{self, ApiError};
use crate::repositories::{CategoryRepository, PostRepository};
use blog_shared::types::{CategoryResponse, PostResponse, PostWithRelations};
use blog_shared::validation::require_non_blank;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// Post service
pub struct PostService;

impl PostService {
    /// Create a post owned by the authenticated account.
    pub async fn create(
        pool: &PgPool,
        account_id: Uuid,
        title: &str,
    ) -> Result<PostResponse, ApiError> {
        require_non_blank(title, "Title is required").map_err(ApiError::Validation)?;

        let post = PostRepository::create(pool, title, account_id)
            .await
            .map_err(|e| error::from_sqlx(e, "Post already exists"))?;

        Ok(PostResponse {
            id: post.id,
            title: post.title,
            user_id: post.user_id,
            created_at: post.created_at,
        })
    }

    /// List all posts with author name and categories.
    pub async fn list_with_relations(pool: &PgPool) -> Result<Vec<PostWithRelations>, ApiError> {
        let posts = PostRepository::list_with_author(pool).await?;
        let post_categories = CategoryRepository::list_post_categories(pool).await?;

        let mut categories_by_post: HashMap<Uuid, Vec<CategoryResponse>> = HashMap::new();
        for c in post_categories {
            categories_by_post
                .entry(c.post_id)
                .or_default()
                .push(CategoryResponse {
                    id: c.id,
                    name: c.name,
                });
        }

        Ok(posts
            .into_iter()
            .map(|p| PostWithRelations {
                categories: categories_by_post.remove(&p.id).unwrap_or_default(),
                id: p.id,
                title: p.title,
                user_id: p.user_id,
                author_name: p.author_name,
                created_at: p.created_at,
            })
            .collect())
    }
}
