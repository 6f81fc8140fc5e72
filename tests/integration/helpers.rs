//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use foods_core::config::AppConfig;

/// Test application backed by in-memory repositories
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with empty collections
    pub async fn new() -> Self {
        let config = AppConfig::default();
        let cors = config.server.cors.clone();
        let state = foods_api::build_state(config)
            .await
            .expect("Failed to build state");

        Self {
            router: foods_api::build_app(state, &cors),
        }
    }

    /// Create a food and return its ID
    pub async fn create_food(&self, name: &str, region: &str) -> String {
        let response = self
            .request(
                "POST",
                "/foods",
                Some(serde_json::json!({ "name": name, "region": region })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.first()["id"]
            .as_str()
            .expect("No id in create response")
            .to_string()
    }

    /// Register a user through the API
    pub async fn register(&self, username: &str, email: &str, passwd: &str) -> TestResponse {
        self.request(
            "POST",
            "/users/register",
            Some(serde_json::json!({
                "username": username,
                "email": email,
                "passwd": passwd,
            })),
            None,
        )
        .await
    }

    /// Register then login, returning the bearer token
    pub async fn login_new_user(&self, username: &str, email: &str, passwd: &str) -> String {
        let registered = self.register(username, email, passwd).await;
        assert_eq!(registered.status, StatusCode::ACCEPTED);

        let response = self
            .request(
                "POST",
                "/users/login",
                Some(serde_json::json!({ "email": email, "passwd": passwd })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Login failed: {:?}",
            response.body
        );
        response.first()["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `results` array of a success body
    pub fn results(&self) -> &Vec<Value> {
        self.body["results"]
            .as_array()
            .expect("Body has no results array")
    }

    /// First element of `results`
    pub fn first(&self) -> &Value {
        &self.results()[0]
    }
}
