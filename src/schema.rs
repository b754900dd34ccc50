//! Response payloads: newsletters with hypermedia links, plus the fixed-message bodies.

use crate::model::Newsletter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

pub const COLLECTION_PATH: &str = "/newsletters";

pub fn item_path(id: i64) -> String {
    format!("{}/{}", COLLECTION_PATH, id)
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_: String,
    pub collection: String,
}

/// Public view of a newsletter. `body` is not exposed.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct NewsletterPayload {
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub url: Links,
}

impl From<&Newsletter> for NewsletterPayload {
    fn from(n: &Newsletter) -> Self {
        NewsletterPayload {
            title: n.title.clone(),
            published_at: n.published_at,
            url: Links {
                self_: item_path(n.id),
                collection: COLLECTION_PATH.to_string(),
            },
        }
    }
}

pub fn many(newsletters: &[Newsletter]) -> Vec<NewsletterPayload> {
    newsletters.iter().map(NewsletterPayload::from).collect()
}

/// Form fields read by `POST /newsletters`.
#[derive(ToSchema)]
pub struct NewsletterForm {
    pub title: String,
    pub body: String,
}

/// Form fields accepted by `PATCH /newsletters/{id}`; any other field is rejected.
#[derive(ToSchema)]
pub struct NewsletterPatchForm {
    pub title: Option<String>,
    pub body: Option<String>,
    /// RFC 3339, or `YYYY-MM-DD HH:MM:SS` read as UTC.
    pub published_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct IndexBody {
    pub index: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    pub message: &'static str,
}

pub const WELCOME: &str = "Welcome to the Newsletter RESTful API";
pub const DELETED: &str = "record successfully deleted";
