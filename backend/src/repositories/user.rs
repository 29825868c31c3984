//! User repository for database operations
//!
//! One `users` table backs both credentialed accounts (registered via
//! /auth) and plain users created through the CRUD surface; the store's
//! unique index on email is the sole arbiter for duplicates, including
//! under concurrent inserts.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a credentialed account.
    ///
    /// No duplicate pre-check: a unique violation surfaces as a database
    /// error for the caller to map.
    pub async fn create_with_password(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, name, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }

    /// Create a plain user (no credentials).
    pub async fn create_with_name(
        pool: &PgPool,
        email: &str,
        name: &str,
    ) -> Result<UserRecord, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, name)
            VALUES ($1, $2)
            RETURNING id, email, name, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Find user by email
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all users
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, password_hash, created_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Rename the user with the given email.
    ///
    /// Returns `None` when no such user exists.
    pub async fn update_name(
        pool: &PgPool,
        email: &str,
        name: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users SET name = $2
            WHERE email = $1
            RETURNING id, email, name, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// Delete the user with the given email, returning the deleted row.
    pub async fn delete_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            DELETE FROM users
            WHERE email = $1
            RETURNING id, email, name, password_hash, created_at
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }
}
