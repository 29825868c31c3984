//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
///
/// All error statuses carry this flat shape: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public account view returned by registration.
///
/// Deliberately excludes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a plain user (no credentials)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

/// Request to rename a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

/// User response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User with related bio and posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithRelations {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub bio: Option<BioResponse>,
    pub posts: Vec<PostResponse>,
}

/// Request to create a bio for the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBioRequest {
    pub name: String,
    pub about: Option<String>,
    pub address: Option<String>,
}

/// Bio response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioResponse {
    pub id: Uuid,
    pub name: String,
    pub about: Option<String>,
    pub address: Option<String>,
    pub user_id: Uuid,
}

/// Request to create a post for the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
}

/// Post response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Post with author name and attached categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithRelations {
    pub id: Uuid,
    pub title: String,
    pub user_id: Uuid,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub categories: Vec<CategoryResponse>,
}

/// Request to create a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Category response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

/// Category with its posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithPosts {
    pub id: Uuid,
    pub name: String,
    pub posts: Vec<PostResponse>,
}

/// Request to attach a post to a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryPostRequest {
    pub category_id: Uuid,
    pub post_id: Uuid,
}

/// Category-post association response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPostResponse {
    pub category_id: Uuid,
    pub post_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_response_has_no_password_field() {
        let account = AccountResponse {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn error_response_is_flat() {
        let err = ErrorResponse {
            error: "Token is required".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"error":"Token is required"}"#);
    }
}
