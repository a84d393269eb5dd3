//! Route definitions.

pub mod article;
pub mod category;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories            list (GET ?parent_id=), create (POST)
/// /categories/{id}       get, update (PUT), delete
///
/// /articles              list (GET ?category_id=&keyword=), create (POST)
/// /articles/{id}         get, update (PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/articles", article::router())
}
