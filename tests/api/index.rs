use crate::helpers::spawn_app;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn root_returns_welcome_payload() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"index": "Welcome to the Newsletter RESTful API"})
    );
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = spawn_app().await;

    let response = app.get("/subscriptions").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"]["code"], "not_found");
}

#[tokio::test]
async fn unsupported_method_returns_json_405() {
    let app = spawn_app().await;
    let request = axum::http::Request::builder()
        .method(axum::http::Method::PUT)
        .uri("/newsletters")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["error"]["code"], "method_not_allowed");
    assert_eq!(
        response.body["error"]["message"],
        "method not allowed: PUT /newsletters"
    );
}
