//! Handlers for article endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pressroom_core::types::DbId;
use pressroom_db::models::article::{CreateArticle, UpdateArticle};
use pressroom_taxonomy::{articles, subtree};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct ListArticlesParams {
    /// Root, leaf, or omitted for a global search.
    pub category_id: Option<DbId>,
    /// Case-sensitive substring matched against title or description.
    pub keyword: Option<String>,
}

/// GET /articles
///
/// Subtree listing: a root category fans out over its children, a leaf
/// lists its own articles, no category searches everything.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListArticlesParams>,
) -> AppResult<impl IntoResponse> {
    let keyword = params.keyword.as_deref().unwrap_or("");
    let result = subtree::list(&state.pool, params.category_id, keyword).await?;
    Ok(Json(DataResponse { data: result }))
}

/// POST /articles
pub async fn create_article(
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<impl IntoResponse> {
    let article = articles::add_article(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: article })))
}

/// GET /articles/{id}
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = articles::get_article(&state.pool, id).await?;
    Ok(Json(DataResponse { data: article }))
}

/// PUT /articles/{id}
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<impl IntoResponse> {
    let article = articles::update_article(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: article }))
}

/// DELETE /articles/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    articles::delete_article(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
