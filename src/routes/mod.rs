//! Router assembly: API routes, common routes, docs, fallback, and the tower-http layers.

mod common;
mod docs;
mod newsletter;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};
pub use newsletter::newsletter_routes;

use crate::handlers::index::{fallback, method_not_allowed};
use crate::state::AppState;
use axum::{body::Body, http::Request, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use uuid::Uuid;

/// Full application router with request tracing and a request-body size cap.
/// Unknown paths and unsupported methods both answer with the JSON error body.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(newsletter_routes(state.clone()))
        .merge(common_routes(state))
        .merge(docs_routes())
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "request",
                    %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
}
