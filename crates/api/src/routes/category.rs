//! Route definitions for category management.
//!
//! Mounted at `/categories` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET    /          -> list_categories (?parent_id)
/// POST   /          -> create_category
/// GET    /{id}      -> get_category
/// PUT    /{id}      -> update_category
/// DELETE /{id}      -> delete_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/{id}",
            get(category::get_category)
                .put(category::update_category)
                .delete(category::delete_category),
        )
}
