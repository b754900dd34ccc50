//! Root, collection and item routes.

use crate::handlers::index::index;
use crate::handlers::newsletter::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn newsletter_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/newsletters", get(list).post(create))
        .route(
            "/newsletters/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
