//! Integration tests for registration, login and user management.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_register_accepted() {
    let app = helpers::TestApp::new().await;

    let response = app.register("ana", "ana@example.com", "secret1").await;

    assert_eq!(response.status, StatusCode::ACCEPTED);
    let user = response.first();
    assert_eq!(user["email"], "ana@example.com");
    assert_eq!(user["role"], "user");
    assert!(user.get("passwd").is_none());
}

#[tokio::test]
async fn test_register_validation_and_duplicates() {
    let app = helpers::TestApp::new().await;

    let short = app.register("ana", "ana@example.com", "123").await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);

    let bad_email = app.register("ana", "not-an-email", "secret1").await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    app.register("ana", "ana@example.com", "secret1").await;
    let duplicate = app.register("ana2", "ana@example.com", "secret2").await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;

    let token = app
        .login_new_user("ana", "ana@example.com", "secret1")
        .await;

    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.register("ana", "ana@example.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(serde_json::json!({ "email": "ana@example.com", "passwd": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_and_missing_passwd() {
    let app = helpers::TestApp::new().await;
    app.register("ana", "ana@example.com", "secret1").await;

    let unknown = app
        .request(
            "POST",
            "/users/login",
            Some(serde_json::json!({ "email": "nobody@example.com", "passwd": "secret1" })),
            None,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);

    let wrong_field = app
        .request(
            "POST",
            "/users/login",
            Some(serde_json::json!({ "email": "ana@example.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(wrong_field.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_routes_require_token() {
    let app = helpers::TestApp::new().await;

    let missing = app.request("GET", "/users", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app.request("GET", "/users", None, Some("garbage")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_management_with_token() {
    let app = helpers::TestApp::new().await;
    let token = app
        .login_new_user("ana", "ana@example.com", "secret1")
        .await;
    app.register("luis", "luis@example.com", "secret2").await;

    let list = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::CREATED);
    assert_eq!(list.results().len(), 2);

    let admins = app
        .request("GET", "/users?role=admin", None, Some(&token))
        .await;
    assert!(admins.results().is_empty());

    let bad_role = app
        .request("GET", "/users?role=root", None, Some(&token))
        .await;
    assert_eq!(bad_role.status, StatusCode::BAD_REQUEST);

    let luis_id = list.results()[1]["id"].as_str().unwrap().to_string();
    let path = format!("/users/{luis_id}");

    let edited = app
        .request(
            "PATCH",
            &path,
            Some(serde_json::json!({ "username": "luisito", "passwd": "ignored" })),
            Some(&token),
        )
        .await;
    assert_eq!(edited.status, StatusCode::CREATED);
    assert_eq!(edited.first()["username"], "luisito");

    // Password is unchanged by the generic edit.
    let relogin = app
        .request(
            "POST",
            "/users/login",
            Some(serde_json::json!({ "email": "luis@example.com", "passwd": "secret2" })),
            None,
        )
        .await;
    assert_eq!(relogin.status, StatusCode::CREATED);

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::CREATED);

    let gone = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_admin_cannot_change_role() {
    let app = helpers::TestApp::new().await;
    let token = app
        .login_new_user("ana", "ana@example.com", "secret1")
        .await;

    let list = app.request("GET", "/users", None, Some(&token)).await;
    let ana_id = list.first()["id"].as_str().unwrap().to_string();
    let path = format!("/users/{ana_id}");

    let escalated = app
        .request(
            "PATCH",
            &path,
            Some(serde_json::json!({ "role": "admin" })),
            Some(&token),
        )
        .await;
    assert_eq!(escalated.status, StatusCode::UNAUTHORIZED);
    assert_eq!(escalated.body["message"], "Not allowed");

    let fetched = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(fetched.first()["role"], "user");
}
