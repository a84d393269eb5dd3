use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use pressroom_taxonomy::TaxonomyError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`TaxonomyError`] for domain errors and implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from the taxonomy engine.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Taxonomy(err) => classify_taxonomy_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a taxonomy error to an HTTP status, error code, and message.
///
/// - Missing entities map to 404.
/// - Duplicate keys and structural delete/move protection map to 409.
/// - Rejected references (bad parent, self-parent, root attachment)
///   map to 422.
/// - Store failures map to 500 with a sanitized message.
fn classify_taxonomy_error(err: &TaxonomyError) -> (StatusCode, &'static str, String) {
    match err {
        TaxonomyError::CategoryNotFound(_) | TaxonomyError::ArticleNotFound(_) => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
        }
        TaxonomyError::DuplicateName(_) => {
            (StatusCode::CONFLICT, "DUPLICATE_NAME", err.to_string())
        }
        TaxonomyError::DuplicateTitle(_) => {
            (StatusCode::CONFLICT, "DUPLICATE_TITLE", err.to_string())
        }
        TaxonomyError::HasChildren(_) => {
            (StatusCode::CONFLICT, "HAS_CHILDREN", err.to_string())
        }
        TaxonomyError::ParentNotFound(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "PARENT_NOT_FOUND",
            err.to_string(),
        ),
        TaxonomyError::SelfParent(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "SELF_PARENT",
            err.to_string(),
        ),
        TaxonomyError::RootAttachmentRejected(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "ROOT_ATTACHMENT_REJECTED",
            err.to_string(),
        ),
        TaxonomyError::Store(store_err) => {
            tracing::error!(error = %store_err, "Store error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
