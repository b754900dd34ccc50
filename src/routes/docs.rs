//! OpenAPI document for the newsletter API.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{index, newsletter};
use crate::schema::{IndexBody, Links, MessageBody, NewsletterForm, NewsletterPatchForm, NewsletterPayload};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Newsletter API", description = "CRUD over newsletters with hypermedia links"),
    paths(
        index::index,
        newsletter::list,
        newsletter::create,
        newsletter::read,
        newsletter::update,
        newsletter::delete,
    ),
    components(schemas(NewsletterPayload, NewsletterForm, NewsletterPatchForm, Links, IndexBody, MessageBody, ErrorBody, ErrorDetail)),
    tags(
        (name = "index", description = "API root"),
        (name = "newsletters", description = "Newsletter records")
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi))
}
