//! Shared application state for all routes. Holds the repository; there is no other shared state.

use crate::store::NewsletterRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn NewsletterRepository>,
}

impl AppState {
    pub fn new<R>(repo: R) -> Self
    where
        R: NewsletterRepository + 'static,
    {
        AppState { repo: Arc::new(repo) }
    }
}
