//! Newsletter CRUD handlers: list, create, read, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{NewNewsletter, NewsletterPatch};
use crate::response::{created, ok};
use crate::schema::{self, MessageBody, NewsletterForm, NewsletterPatchForm, NewsletterPayload, DELETED};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Form,
};
use std::collections::HashMap;

type FormFields = Result<Form<HashMap<String, String>>, FormRejection>;
type IdPath = Result<Path<i64>, PathRejection>;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("newsletter {}", id))
}

#[utoipa::path(
    get,
    path = "/newsletters",
    tag = "newsletters",
    responses(
        (status = 200, description = "All newsletters in storage order", body = [NewsletterPayload]),
        (status = 500, description = "Datastore failure", body = ErrorBody)
    )
)]
#[tracing::instrument(name = "List newsletters", skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.repo.list().await?;
    Ok(ok(schema::many(&rows)))
}

#[utoipa::path(
    post,
    path = "/newsletters",
    tag = "newsletters",
    request_body(content = NewsletterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Newsletter created", body = NewsletterPayload),
        (status = 400, description = "Missing field or malformed form", body = ErrorBody),
        (status = 500, description = "Datastore failure", body = ErrorBody)
    )
)]
#[tracing::instrument(name = "Create a newsletter", skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<impl IntoResponse, AppError> {
    let Form(fields) = form?;
    let new = NewNewsletter::from_form(fields)?;
    let row = state.repo.create(&new).await?;
    tracing::info!(id = row.id, "newsletter created");
    Ok(created(NewsletterPayload::from(&row)))
}

#[utoipa::path(
    get,
    path = "/newsletters/{id}",
    tag = "newsletters",
    params(("id" = i64, Path, description = "Newsletter id")),
    responses(
        (status = 200, description = "The newsletter", body = NewsletterPayload),
        (status = 404, description = "No newsletter with this id", body = ErrorBody)
    )
)]
#[tracing::instrument(name = "Read a newsletter", skip(state, id))]
pub async fn read(State(state): State<AppState>, id: IdPath) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let row = state.repo.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(ok(NewsletterPayload::from(&row)))
}

#[utoipa::path(
    patch,
    path = "/newsletters/{id}",
    tag = "newsletters",
    params(("id" = i64, Path, description = "Newsletter id")),
    request_body(content = NewsletterPatchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The updated newsletter", body = NewsletterPayload),
        (status = 400, description = "Unknown field or malformed value", body = ErrorBody),
        (status = 404, description = "No newsletter with this id", body = ErrorBody)
    )
)]
#[tracing::instrument(name = "Update a newsletter", skip(state, id, form))]
pub async fn update(
    State(state): State<AppState>,
    id: IdPath,
    form: FormFields,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Form(fields) = form?;
    let patch = NewsletterPatch::from_form(fields)?;
    let row = state.repo.update(id, &patch).await?.ok_or_else(|| not_found(id))?;
    Ok(ok(NewsletterPayload::from(&row)))
}

#[utoipa::path(
    delete,
    path = "/newsletters/{id}",
    tag = "newsletters",
    params(("id" = i64, Path, description = "Newsletter id")),
    responses(
        (status = 200, description = "Newsletter deleted", body = MessageBody),
        (status = 404, description = "No newsletter with this id", body = ErrorBody)
    )
)]
#[tracing::instrument(name = "Delete a newsletter", skip(state, id))]
pub async fn delete(State(state): State<AppState>, id: IdPath) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    if !state.repo.delete(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "newsletter deleted");
    Ok(ok(MessageBody { message: DELETED }))
}
