//! HTTP handlers for the root resource and newsletter CRUD.

pub mod index;
pub mod newsletter;
