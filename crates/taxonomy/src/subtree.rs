//! Hierarchical article listing with concurrent per-child fan-out.

use futures::future::try_join_all;
use sqlx::PgPool;

use pressroom_core::types::DbId;
use pressroom_db::models::article::Article;
use pressroom_db::repositories::{ArticleRepo, CategoryRepo};

use crate::error::TaxonomyResult;

/// List articles under a category, filtered by keyword.
///
/// - `category_id = None`: every article matching `keyword` against
///   title or description, across all categories.
/// - Leaf category: only that category's articles.
/// - Root category: one query per direct child, issued concurrently and
///   joined; results merge in child enumeration order (`sort` ASC,
///   `updated_at` DESC), articles within a child in store-native order.
///   Any single child failure aborts the whole query.
/// - Unresolvable id: an empty result set, not an error.
///
/// Keyword matching is a case-sensitive substring test; either field
/// matching is sufficient.
pub async fn list(
    pool: &PgPool,
    category_id: Option<DbId>,
    keyword: &str,
) -> TaxonomyResult<Vec<Article>> {
    let Some(id) = category_id else {
        return Ok(ArticleRepo::search(pool, None, keyword).await?);
    };

    let Some(category) = CategoryRepo::find_by_id(pool, id).await? else {
        return Ok(Vec::new());
    };

    if !category.is_root() {
        return Ok(ArticleRepo::search(pool, Some(id), keyword).await?);
    }

    // Root: fan out over the children, join all, first error wins.
    let children = CategoryRepo::list_children(pool, Some(id)).await?;
    let searches = children
        .iter()
        .map(|child| ArticleRepo::search(pool, Some(child.id), keyword));
    let per_child = try_join_all(searches).await?;

    let merged: Vec<Article> = per_child.into_iter().flatten().collect();
    tracing::debug!(
        category_id = id,
        children = children.len(),
        articles = merged.len(),
        "Subtree query merged"
    );
    Ok(merged)
}
