//! Integration tests for the food catalog endpoints.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = helpers::TestApp::new().await;
    let id = app.create_food("ceviche", "peru").await;

    let response = app.request("GET", &format!("/foods/{id}"), None, None).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.results().len(), 1);
    assert_eq!(response.first()["name"], "ceviche");
    assert_eq!(response.first()["region"], "peru");
    assert_eq!(response.first()["id"], id.as_str());
}

#[tokio::test]
async fn test_list_empty_catalog() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/foods", None, None).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, serde_json::json!({ "results": [] }));
}

#[tokio::test]
async fn test_list_pages_of_twelve() {
    let app = helpers::TestApp::new().await;
    for i in 0..14 {
        app.create_food(&format!("dish {i}"), "chile").await;
    }

    let first = app.request("GET", "/foods", None, None).await;
    assert_eq!(first.results().len(), 12);
    assert_eq!(first.first()["name"], "dish 0");

    let second = app.request("GET", "/foods?page=2", None, None).await;
    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(second.results().len(), 2);
    assert_eq!(second.first()["name"], "dish 12");

    let third = app.request("GET", "/foods?page=3", None, None).await;
    assert_eq!(third.status, StatusCode::CREATED);
    assert!(third.results().is_empty());
}

#[tokio::test]
async fn test_list_rejects_out_of_range_page() {
    let app = helpers::TestApp::new().await;
    app.create_food("tacos", "mexico").await;

    for page in ["0", "11", "abc"] {
        let response = app
            .request("GET", &format!("/foods?page={page}"), None, None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "page={page}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
        assert_eq!(response.body["message"], "Wrong page number");
    }
}

#[tokio::test]
async fn test_list_filters_by_region() {
    let app = helpers::TestApp::new().await;
    app.create_food("ceviche", "peru").await;
    app.create_food("asado", "argentina").await;
    app.create_food("lomo saltado", "peru").await;

    let peru = app.request("GET", "/foods?region=peru", None, None).await;
    assert_eq!(peru.status, StatusCode::CREATED);
    assert_eq!(peru.results().len(), 2);

    let brazil = app.request("GET", "/foods?region=brazil", None, None).await;
    assert!(brazil.results().is_empty());

    let all = app
        .request("GET", "/foods?region=all&page=1", None, None)
        .await;
    assert_eq!(all.results().len(), 3);
}

#[tokio::test]
async fn test_list_rejects_unknown_region() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/foods?region=test", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Wrong region");
    assert!(response.body.get("results").is_none());
}

#[tokio::test]
async fn test_create_rejects_missing_name_and_duplicates() {
    let app = helpers::TestApp::new().await;
    app.create_food("feijoada", "brazil").await;

    let missing = app
        .request(
            "POST",
            "/foods",
            Some(serde_json::json!({ "region": "brazil" })),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let duplicate = app
        .request(
            "POST",
            "/foods",
            Some(serde_json::json!({ "name": "feijoada", "region": "brazil" })),
            None,
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.body["message"], "The food already exists");
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/foods/does-not-exist", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_edit_merges_fields() {
    let app = helpers::TestApp::new().await;
    let id = app.create_food("arepa", "all").await;

    for method in ["PATCH", "PUT"] {
        let response = app
            .request(
                method,
                &format!("/foods/{id}"),
                Some(serde_json::json!({ "id": "ignored", "diet": "vegetarian" })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{method}");
        assert_eq!(response.first()["id"], id.as_str());
        assert_eq!(response.first()["name"], "arepa");
        assert_eq!(response.first()["diet"], "vegetarian");
    }
}

#[tokio::test]
async fn test_delete_twice() {
    let app = helpers::TestApp::new().await;
    let id = app.create_food("empanada", "argentina").await;
    let path = format!("/foods/{id}");

    let first = app.request("DELETE", &path, None, None).await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.body, serde_json::json!({ "results": [] }));

    let second = app.request("DELETE", &path, None, None).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);

    let gone = app.request("GET", &path, None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["storage"], "memory");
}
