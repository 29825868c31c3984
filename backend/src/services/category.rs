//! Category service

use crate::error::{self, ApiError};
use crate::repositories::CategoryRepository;
use blog_shared::types::{
    CategoryPostResponse, CategoryResponse, CategoryWithPosts, PostResponse,
};
use blog_shared::validation::require_non_blank;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// Category service
pub struct CategoryService;

impl CategoryService {
    /// Create a category.
    pub async fn create(pool: &PgPool, name: &str) -> Result<CategoryResponse, ApiError> {
        require_non_blank(name, "Name is required").map_err(ApiError::Validation)?;

        let category = CategoryRepository::create(pool, name)
            .await
            .map_err(|e| error::from_sqlx(e, "Category already exists"))?;

        Ok(CategoryResponse {
            id: category.id,
            name: category.name,
        })
    }

    /// List all categories with their posts.
    pub async fn list_with_posts(pool: &PgPool) -> Result<Vec<CategoryWithPosts>, ApiError> {
        let categories = CategoryRepository::list(pool).await?;
        let categorized = CategoryRepository::list_categorized_posts(pool).await?;

        let mut posts_by_category: HashMap<Uuid, Vec<PostResponse>> = HashMap::new();
        for p in categorized {
            posts_by_category
                .entry(p.category_id)
                .or_default()
                .push(PostResponse {
                    id: p.id,
                    title: p.title,
                    user_id: p.user_id,
                    created_at: p.created_at,
                });
        }

        Ok(categories
            .into_iter()
            .map(|c| CategoryWithPosts {
                posts: posts_by_category.remove(&c.id).unwrap_or_default(),
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    /// Attach a post to a category.
    pub async fn attach_post(
        pool: &PgPool,
        category_id: Uuid,
        post_id: Uuid,
    ) -> Result<CategoryPostResponse, ApiError> {
        let link = CategoryRepository::attach_post(pool, category_id, post_id)
            .await
            .map_err(|e| error::from_sqlx(e, "Post is already in this category"))?;

        Ok(CategoryPostResponse {
            category_id: link.category_id,
            post_id: link.post_id,
        })
    }
}
