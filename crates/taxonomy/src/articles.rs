//! Article operations: leaf-only attachment and title uniqueness.

use sqlx::PgPool;

use pressroom_core::types::DbId;
use pressroom_db::models::article::{Article, CreateArticle, UpdateArticle};
use pressroom_db::repositories::{ArticleRepo, CategoryRepo};

use crate::aggregation;
use crate::error::{is_unique_violation, TaxonomyError, TaxonomyResult};

/// Unique constraint backing the `(title, parent_id)` key.
const UQ_TITLE_PARENT: &str = "uq_articles_title_parent";

fn classify_title_conflict(err: sqlx::Error, title: &str) -> TaxonomyError {
    if is_unique_violation(&err, UQ_TITLE_PARENT) {
        TaxonomyError::DuplicateTitle(title.to_string())
    } else {
        TaxonomyError::Store(err)
    }
}

/// Create an article under a leaf category.
///
/// The parent must resolve to an existing category and must itself be a
/// leaf; attaching directly to a root is rejected. On success the
/// aggregate counters of the leaf and its root grow by one.
pub async fn add_article(pool: &PgPool, input: &CreateArticle) -> TaxonomyResult<Article> {
    if let Some(existing) =
        ArticleRepo::find_by_title_and_parent(pool, &input.title, input.parent_id).await?
    {
        return Err(TaxonomyError::DuplicateTitle(existing.title));
    }

    let parent = CategoryRepo::find_by_id(pool, input.parent_id)
        .await?
        .ok_or(TaxonomyError::ParentNotFound(input.parent_id))?;
    if parent.is_root() {
        return Err(TaxonomyError::RootAttachmentRejected(parent.id));
    }

    let article = ArticleRepo::create(pool, input)
        .await
        .map_err(|e| classify_title_conflict(e, &input.title))?;

    aggregation::increment(pool, article.parent_id).await?;

    tracing::info!(
        article_id = article.id,
        parent_id = article.parent_id,
        "Article created"
    );
    Ok(article)
}

/// Fetch an article by ID.
pub async fn get_article(pool: &PgPool, id: DbId) -> TaxonomyResult<Article> {
    ArticleRepo::find_by_id(pool, id)
        .await?
        .ok_or(TaxonomyError::ArticleNotFound(id))
}

/// Delete an article.
///
/// Aggregate counters are NOT decremented here: the system this engine
/// replaces only ever incremented on create, and that asymmetry is kept
/// until a reconciliation pass exists.
pub async fn delete_article(pool: &PgPool, id: DbId) -> TaxonomyResult<()> {
    if !ArticleRepo::delete(pool, id).await? {
        return Err(TaxonomyError::ArticleNotFound(id));
    }
    tracing::info!(article_id = id, "Article deleted");
    Ok(())
}

/// Overwrite an article (full-field update, not a partial merge).
///
/// Fails when the new `(title, parent_id)` pair belongs to a different
/// existing article.
pub async fn update_article(
    pool: &PgPool,
    id: DbId,
    input: &UpdateArticle,
) -> TaxonomyResult<Article> {
    // Existence check first so an unknown id is NotFound, not a
    // spurious duplicate.
    get_article(pool, id).await?;

    if let Some(other) =
        ArticleRepo::find_by_title_and_parent(pool, &input.title, input.parent_id).await?
    {
        if other.id != id {
            return Err(TaxonomyError::DuplicateTitle(other.title));
        }
    }

    let updated = ArticleRepo::update(pool, id, input)
        .await
        .map_err(|e| classify_title_conflict(e, &input.title))?
        .ok_or(TaxonomyError::ArticleNotFound(id))?;

    tracing::info!(article_id = id, "Article updated");
    Ok(updated)
}
