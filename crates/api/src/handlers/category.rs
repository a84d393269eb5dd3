//! Handlers for category endpoints.
//!
//! All tree-shape and naming rules live in the taxonomy engine; these
//! handlers only translate between HTTP and the engine's typed calls.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pressroom_core::types::DbId;
use pressroom_db::models::category::{CreateCategory, UpdateCategory};
use pressroom_taxonomy::categories;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct ListCategoriesParams {
    /// Omitted = list root categories.
    pub parent_id: Option<DbId>,
}

/// GET /categories
///
/// List the direct children of `parent_id` (roots when omitted).
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListCategoriesParams>,
) -> AppResult<impl IntoResponse> {
    let children = categories::list_children(&state.pool, params.parent_id).await?;
    Ok(Json(DataResponse { data: children }))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = categories::create_category(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = categories::get_category(&state.pool, id).await?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = categories::update_category(&state.pool, id, &patch).await?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    categories::delete_category(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
