//! Root and fallback handlers.

use crate::error::AppError;
use crate::schema::{IndexBody, WELCOME};
use axum::{
    http::{Method, Uri},
    Json,
};

#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    responses((status = 200, description = "Welcome message", body = IndexBody))
)]
pub async fn index() -> Json<IndexBody> {
    Json(IndexBody { index: WELCOME })
}

pub async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}
