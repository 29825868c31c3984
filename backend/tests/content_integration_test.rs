//! Integration tests for the user/bio/post/category CRUD surface

mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn register_and_login(app: &common::TestApp) -> String {
    let credentials = json!({
        "email": format!("author_{}@example.com", uuid::Uuid::new_v4()),
        "password": "secret1"
    });

    let (status, _) = app.post("/auth/register", &credentials.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = app.post("/auth/login", &credentials.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    serde_json::from_str(&response).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_fetch_user() {
    let app = common::TestApp::new().await;
    let token = register_and_login(&app).await;

    let email = format!("plain_{}@example.com", uuid::Uuid::new_v4());
    let body = json!({ "email": email, "name": "Plain User" });

    let (status, response) = app.post("/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let user: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(user["name"], "Plain User");

    let (status, response) = app.get_authed(&format!("/users/{}", email), &token).await;
    assert_eq!(status, StatusCode::OK);
    let user: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(user["email"], email);
    assert!(user["posts"].as_array().unwrap().is_empty());
    assert!(user["bio"].is_null());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_requires_name() {
    let app = common::TestApp::new().await;

    let body = json!({ "email": "nameless@example.com", "name": "  " });
    let (status, response) = app.post("/users", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Name cannot be empty");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_and_delete_user() {
    let app = common::TestApp::new().await;

    let email = format!("mutable_{}@example.com", uuid::Uuid::new_v4());
    let body = json!({ "email": email, "name": "Before" });
    let (status, _) = app.post("/users", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let rename = json!({ "name": "After" });
    let (status, response) = app
        .put(&format!("/users/{}", email), &rename.to_string())
        .await;
    assert_eq!(status, StatusCode::OK);
    let user: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(user["name"], "After");

    let (status, _) = app.delete(&format!("/users/{}", email)).await;
    assert_eq!(status, StatusCode::OK);

    // Gone means 404 on the next update
    let (status, _) = app
        .put(&format!("/users/{}", email), &rename.to_string())
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bio_belongs_to_authenticated_account() {
    let app = common::TestApp::new().await;
    let token = register_and_login(&app).await;

    let body = json!({ "name": "Author", "about": "writes things" });
    let (status, response) = app.post_authed("/bio", &body.to_string(), &token).await;

    assert_eq!(status, StatusCode::OK);
    let bio: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(bio["name"], "Author");
    assert!(!bio["user_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_second_bio_for_same_account_conflicts() {
    let app = common::TestApp::new().await;
    let token = register_and_login(&app).await;

    let body = json!({ "name": "First" });
    let (status, first) = app.post_authed("/bio", &body.to_string(), &token).await;
    assert_eq!(status, StatusCode::OK);
    let first: serde_json::Value = serde_json::from_str(&first).unwrap();

    let body = json!({ "name": "Second" });
    let (status, response) = app.post_authed("/bio", &body.to_string(), &token).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Bio already exists");

    // Listing users still shows the original bio, exactly one per account
    let (status, response) = app.get_authed("/users", &token).await;
    assert_eq!(status, StatusCode::OK);
    let users: serde_json::Value = serde_json::from_str(&response).unwrap();
    let owner = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["bio"]["id"] == first["id"])
        .expect("account with bio missing from listing");
    assert_eq!(owner["bio"]["name"], "First");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_bio_requires_token() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Author" });
    let (status, _) = app.post("/bio", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_post_listing_includes_author_and_categories() {
    let app = common::TestApp::new().await;
    let token = register_and_login(&app).await;

    let post = json!({ "title": "tagged post" });
    let (status, response) = app.post_authed("/post", &post.to_string(), &token).await;
    assert_eq!(status, StatusCode::OK);
    let post: serde_json::Value = serde_json::from_str(&response).unwrap();
    let post_id = post["id"].as_str().unwrap().to_string();

    let category = json!({ "name": "rust" });
    let (status, response) = app.post("/category", &category.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let category: serde_json::Value = serde_json::from_str(&response).unwrap();
    let category_id = category["id"].as_str().unwrap().to_string();

    let link = json!({ "category_id": category_id, "post_id": post_id });
    let (status, _) = app.post("/category-post", &link.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = app.get("/post").await;
    assert_eq!(status, StatusCode::OK);
    let posts: serde_json::Value = serde_json::from_str(&response).unwrap();
    let listed = posts
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == post_id.as_str())
        .expect("created post missing from listing");
    assert_eq!(listed["categories"][0]["name"], "rust");

    let (status, response) = app.get("/category").await;
    assert_eq!(status, StatusCode::OK);
    let categories: serde_json::Value = serde_json::from_str(&response).unwrap();
    let listed = categories
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == category_id.as_str())
        .expect("created category missing from listing");
    assert_eq!(listed["posts"][0]["id"], post_id.as_str());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_category_post_with_unknown_ids_is_bad_request() {
    let app = common::TestApp::new().await;

    let link = json!({
        "category_id": uuid::Uuid::new_v4(),
        "post_id": uuid::Uuid::new_v4()
    });
    let (status, _) = app.post("/category-post", &link.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_post_requires_title() {
    let app = common::TestApp::new().await;
    let token = register_and_login(&app).await;

    let body = json!({ "title": "" });
    let (status, response) = app.post_authed("/post", &body.to_string(), &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Title is required");
}
