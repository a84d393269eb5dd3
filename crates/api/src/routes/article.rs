//! Route definitions for article management.
//!
//! Mounted at `/articles` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Article routes.
///
/// ```text
/// GET    /          -> list_articles (?category_id, ?keyword)
/// POST   /          -> create_article
/// GET    /{id}      -> get_article
/// PUT    /{id}      -> update_article
/// DELETE /{id}      -> delete_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(article::list_articles).post(article::create_article),
        )
        .route(
            "/{id}",
            get(article::get_article)
                .put(article::update_article)
                .delete(article::delete_article),
        )
}
