use crate::helpers::spawn_app;
use axum::http::StatusCode;

#[tokio::test]
async fn health_is_ok() {
    let app = spawn_app().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn ready_reports_database_state() {
    let app = spawn_app().await;

    let response = app.get("/ready").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["database"], "ok");

    app.store.pool().close().await;
    let response = app.get("/ready").await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "degraded");
}

#[tokio::test]
async fn version_names_the_package() {
    let app = spawn_app().await;

    let response = app.get("/version").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "newsletter-api");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = spawn_app().await;

    let response = app.get("/openapi.json").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"]["/newsletters/{id}"].is_object());
}
