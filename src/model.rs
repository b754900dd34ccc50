//! Newsletter entity and its write models (create / partial update).

use crate::error::AppError;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::HashMap;

/// Attribute names a PATCH may set. `id` is deliberately absent.
pub const MUTABLE_FIELDS: &[&str] = &["title", "body", "published_at"];

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Newsletter {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewNewsletter {
    pub title: String,
    pub body: String,
}

impl NewNewsletter {
    /// Both `title` and `body` must be present; other fields are ignored.
    pub fn from_form(mut form: HashMap<String, String>) -> Result<Self, AppError> {
        let title = form
            .remove("title")
            .ok_or_else(|| AppError::Validation("title is required".into()))?;
        let body = form
            .remove("body")
            .ok_or_else(|| AppError::Validation("body is required".into()))?;
        Ok(NewNewsletter { title, body })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsletterPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsletterPatch {
    /// Any field outside [`MUTABLE_FIELDS`] fails the whole patch.
    pub fn from_form(form: HashMap<String, String>) -> Result<Self, AppError> {
        let mut unknown: Vec<&str> = form
            .keys()
            .map(String::as_str)
            .filter(|k| !MUTABLE_FIELDS.contains(k))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(AppError::Validation(format!(
                "unknown or immutable fields: {} (allowed: {})",
                unknown.join(", "),
                MUTABLE_FIELDS.join(", ")
            )));
        }

        let mut patch = NewsletterPatch::default();
        for (key, value) in form {
            match key.as_str() {
                "title" => patch.title = Some(value),
                "body" => patch.body = Some(value),
                "published_at" => patch.published_at = Some(parse_timestamp(&value)?),
                _ => {}
            }
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.published_at.is_none()
    }
}

/// RFC 3339, or a naive `YYYY-MM-DD[T ]HH:MM:SS[.f]` read as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(AppError::Validation(format!(
        "published_at '{}' is not a valid timestamp",
        raw
    )))
}
