//! Category and category-post repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Category record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Category-post association record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryPostRecord {
    pub category_id: Uuid,
    pub post_id: Uuid,
}

/// Post row joined through the association, keyed by category
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategorizedPostRecord {
    pub category_id: Uuid,
    pub id: Uuid,
    pub title: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Category row joined through the association, keyed by post
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostCategoryRecord {
    pub post_id: Uuid,
    pub id: Uuid,
    pub name: String,
}

/// Category repository for database operations
pub struct CategoryRepository;

impl CategoryRepository {
    /// Create a category
    pub async fn create(pool: &PgPool, name: &str) -> Result<CategoryRecord, sqlx::Error> {
        sqlx::query_as::<_, CategoryRecord>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// List all categories
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        sqlx::query_as::<_, CategoryRecord>(
            r#"
            SELECT id, name, created_at
            FROM categories
            ORDER BY created_at
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Attach a post to a category.
    ///
    /// Missing category or post surfaces as a foreign-key violation for
    /// the caller to map; re-attaching surfaces as a unique violation.
    pub async fn attach_post(
        pool: &PgPool,
        category_id: Uuid,
        post_id: Uuid,
    ) -> Result<CategoryPostRecord, sqlx::Error> {
        sqlx::query_as::<_, CategoryPostRecord>(
            r#"
            INSERT INTO category_posts (category_id, post_id)
            VALUES ($1, $2)
            RETURNING category_id, post_id
            "#,
        )
        .bind(category_id)
        .bind(post_id)
        .fetch_one(pool)
        .await
    }

    /// List every post attached to any category
    pub async fn list_categorized_posts(
        pool: &PgPool,
    ) -> Result<Vec<CategorizedPostRecord>, sqlx::Error> {
        sqlx::query_as::<_, CategorizedPostRecord>(
            r#"
            SELECT cp.category_id, p.id, p.title, p.user_id, p.created_at
            FROM category_posts cp
            JOIN posts p ON p.id = cp.post_id
            ORDER BY p.created_at
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// List every category attached to any post
    pub async fn list_post_categories(
        pool: &PgPool,
    ) -> Result<Vec<PostCategoryRecord>, sqlx::Error> {
        sqlx::query_as::<_, PostCategoryRecord>(
            r#"
            SELECT cp.post_id, c.id, c.name
            FROM category_posts cp
            JOIN categories c ON c.id = cp.category_id
            ORDER BY c.name
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
