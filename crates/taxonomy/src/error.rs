//! Typed errors for taxonomy operations.

use pressroom_core::types::DbId;

/// Error type for every taxonomy engine operation.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("category {0} not found")]
    CategoryNotFound(DbId),

    #[error("article {0} not found")]
    ArticleNotFound(DbId),

    #[error("parent category {0} does not resolve to an existing root category")]
    ParentNotFound(DbId),

    #[error("a category named '{0}' already exists under this parent")]
    DuplicateName(String),

    #[error("an article titled '{0}' already exists under this category")]
    DuplicateTitle(String),

    #[error("category {0} cannot be its own parent")]
    SelfParent(DbId),

    #[error("category {0} is a root category; articles attach to leaf categories only")]
    RootAttachmentRejected(DbId),

    #[error("category {0} still has child categories")]
    HasChildren(DbId),

    /// Store failure, propagated verbatim for the caller to decide on
    /// retry policy.
    #[error("store unavailable: {0}")]
    Store(#[from] sqlx::Error),
}

/// Convenience alias for engine return values.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

/// Whether a store error is a unique-constraint violation (Postgres
/// error code 23505) on the named constraint or index.
///
/// The schema's unique indexes back the duplicate checks as defense in
/// depth against concurrent inserts racing past the service-level
/// pre-check.
pub(crate) fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(
            &sqlx::Error::RowNotFound,
            "uq_articles_title_parent",
        ));
    }
}
