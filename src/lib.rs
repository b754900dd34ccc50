//! Newsletter API: CRUD over newsletters with hypermedia links, backed by SQLite.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod schema;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{NewNewsletter, Newsletter, NewsletterPatch};
pub use routes::{app, common_routes, docs_routes, newsletter_routes, ApiDoc};
pub use schema::NewsletterPayload;
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists, ensure_tables, NewsletterRepository, SqliteNewsletterStore};
