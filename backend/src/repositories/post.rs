//! Post repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Post record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Post joined with its author's name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostWithAuthorRecord {
    pub id: Uuid,
    pub title: String,
    pub user_id: Uuid,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Post repository for database operations
pub struct PostRepository;

impl PostRepository {
    /// Create a post owned by the given user
    pub async fn create(
        pool: &PgPool,
        title: &str,
        user_id: Uuid,
    ) -> Result<PostRecord, sqlx::Error> {
        sqlx::query_as::<_, PostRecord>(
            r#"
            INSERT INTO posts (title, user_id)
            VALUES ($1, $2)
            RETURNING id, title, user_id, created_at
            "#,
        )
        .bind(title)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// List all posts
    pub async fn list(pool: &PgPool) -> Result<Vec<PostRecord>, sqlx::Error> {
        sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, user_id, created_at
            FROM posts
            ORDER BY created_at
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// List posts owned by a user
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<PostRecord>, sqlx::Error> {
        sqlx::query_as::<_, PostRecord>(
            r#"
            SELECT id, title, user_id, created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// List all posts with their author's name
    pub async fn list_with_author(pool: &PgPool) -> Result<Vec<PostWithAuthorRecord>, sqlx::Error> {
        sqlx::query_as::<_, PostWithAuthorRecord>(
            r#"
            SELECT p.id, p.title, p.user_id, u.name AS author_name, p.created_at
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.created_at
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
