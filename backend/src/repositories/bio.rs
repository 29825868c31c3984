//! Bio repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Bio record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BioRecord {
    pub id: Uuid,
    pub name: String,
    pub about: Option<String>,
    pub address: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a bio
#[derive(Debug, Clone)]
pub struct CreateBio {
    pub name: String,
    pub about: Option<String>,
    pub address: Option<String>,
    pub user_id: Uuid,
}

/// Bio repository for database operations
pub struct BioRepository;

impl BioRepository {
    /// Create a bio for a user
    pub async fn create(pool: &PgPool, input: CreateBio) -> Result<BioRecord, sqlx::Error> {
        sqlx::query_as::<_, BioRecord>(
            r#"
            INSERT INTO bios (name, about, address, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, about, address, user_id, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.about)
        .bind(&input.address)
        .bind(input.user_id)
        .fetch_one(pool)
        .await
    }

    /// Find a user's bio
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<BioRecord>, sqlx::Error> {
        sqlx::query_as::<_, BioRecord>(
            r#"
            SELECT id, name, about, address, user_id, created_at
            FROM bios
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// List all bios
    pub async fn list(pool: &PgPool) -> Result<Vec<BioRecord>, sqlx::Error> {
        sqlx::query_as::<_, BioRecord>(
            r#"
            SELECT id, name, about, address, user_id, created_at
            FROM bios
            ORDER BY created_at
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
