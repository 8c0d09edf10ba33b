//! Client CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{ClientDraft, PageRequest};
use crate::response::page_body;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

/// A path id that is not an integer cannot name a row.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::NotFound(format!("client {}", id_str)))
}

/// GET /api/clientes?term=&page=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let req = PageRequest::from_query(&params, state.default_page_size);
    let page = state.repo.list(&req).await?;
    Ok(Json(page_body(&req, page)))
}

/// GET /api/clientes/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let client = state
        .repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("client {}", id)))?;
    Ok(Json(client))
}

/// POST /api/clientes
pub async fn create(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<ClientDraft>,
) -> Result<impl IntoResponse, AppError> {
    let changes = RequestValidator::validate_create(&draft)?;
    let client = state.repo.create(&changes).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /api/clientes/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(draft): JsonBody<ClientDraft>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let changes = RequestValidator::validate_update(&draft)?;
    let client = state
        .repo
        .update(id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("client {}", id)))?;
    Ok(Json(client))
}

/// DELETE /api/clientes/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.repo.delete(id).await? {
        return Err(AppError::NotFound(format!("client {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
