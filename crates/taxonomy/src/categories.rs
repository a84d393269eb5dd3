//! Category operations: tree-shape and naming invariants.
//!
//! The tree is exactly two levels deep. A parent reference must resolve
//! to an existing *root* category; re-parenting a category that has
//! children of its own is rejected so no leaf ever ends up below the
//! second tier.

use sqlx::PgPool;

use pressroom_core::types::DbId;
use pressroom_db::models::category::{Category, CreateCategory, UpdateCategory};
use pressroom_db::repositories::CategoryRepo;

use crate::error::{is_unique_violation, TaxonomyError, TaxonomyResult};

/// Unique index names backing the `(name, parent_id)` key.
const UQ_NAME_PARENT: &str = "uq_categories_name_parent";
const UQ_NAME_ROOT: &str = "uq_categories_name_root";

/// Resolve `parent_id` and require it to be a root category.
///
/// A missing parent and a non-root parent are the same failure: the id
/// does not name a valid attachment point for a second-tier category.
async fn ensure_root_parent(pool: &PgPool, parent_id: DbId) -> TaxonomyResult<Category> {
    let parent = CategoryRepo::find_by_id(pool, parent_id)
        .await?
        .ok_or(TaxonomyError::ParentNotFound(parent_id))?;
    if !parent.is_root() {
        return Err(TaxonomyError::ParentNotFound(parent_id));
    }
    Ok(parent)
}

/// Map a unique-index violation on the category name key back to the
/// domain error, passing other store errors through.
fn classify_name_conflict(err: sqlx::Error, name: &str) -> TaxonomyError {
    if is_unique_violation(&err, UQ_NAME_PARENT) || is_unique_violation(&err, UQ_NAME_ROOT) {
        TaxonomyError::DuplicateName(name.to_string())
    } else {
        TaxonomyError::Store(err)
    }
}

/// Create a category.
///
/// Defaults when omitted: root placement, enabled status, zero
/// articles, default sort. A new category starts with no articles, so
/// no aggregation step is needed here.
pub async fn create_category(pool: &PgPool, input: &CreateCategory) -> TaxonomyResult<Category> {
    if let Some(existing) =
        CategoryRepo::find_by_name_and_parent(pool, &input.name, input.parent_id).await?
    {
        return Err(TaxonomyError::DuplicateName(existing.name));
    }

    if let Some(parent_id) = input.parent_id {
        ensure_root_parent(pool, parent_id).await?;
    }

    let category = CategoryRepo::create(pool, input)
        .await
        .map_err(|e| classify_name_conflict(e, &input.name))?;

    tracing::info!(
        category_id = category.id,
        parent_id = category.parent_id,
        "Category created"
    );
    Ok(category)
}

/// Fetch a category by ID.
pub async fn get_category(pool: &PgPool, id: DbId) -> TaxonomyResult<Category> {
    CategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or(TaxonomyError::CategoryNotFound(id))
}

/// Update a category. Omitted patch fields retain previous values.
pub async fn update_category(
    pool: &PgPool,
    id: DbId,
    patch: &UpdateCategory,
) -> TaxonomyResult<Category> {
    let existing = get_category(pool, id).await?;

    if let Some(parent_id) = patch.parent_id {
        if parent_id == id {
            return Err(TaxonomyError::SelfParent(id));
        }
        ensure_root_parent(pool, parent_id).await?;

        // Re-parenting a category that has children would push its
        // children below the second tier.
        if CategoryRepo::count_children(pool, id).await? > 0 {
            return Err(TaxonomyError::HasChildren(id));
        }
    }

    let target_name = patch.name.as_deref().unwrap_or(&existing.name);
    let target_parent = patch.parent_id.or(existing.parent_id);
    if let Some(other) =
        CategoryRepo::find_by_name_and_parent(pool, target_name, target_parent).await?
    {
        if other.id != id {
            return Err(TaxonomyError::DuplicateName(other.name));
        }
    }

    let updated = CategoryRepo::update(pool, id, patch)
        .await
        .map_err(|e| classify_name_conflict(e, target_name))?
        .ok_or(TaxonomyError::CategoryNotFound(id))?;

    tracing::info!(category_id = id, "Category updated");
    Ok(updated)
}

/// Delete a category.
///
/// A root with existing children cannot be deleted (the children would
/// be orphaned). A leaf is deleted without checking for attached
/// articles, matching the behavior this engine replaces.
pub async fn delete_category(pool: &PgPool, id: DbId) -> TaxonomyResult<()> {
    let category = get_category(pool, id).await?;

    if category.is_root() && CategoryRepo::count_children(pool, id).await? > 0 {
        return Err(TaxonomyError::HasChildren(id));
    }

    if !CategoryRepo::delete(pool, id).await? {
        return Err(TaxonomyError::CategoryNotFound(id));
    }

    tracing::info!(category_id = id, "Category deleted");
    Ok(())
}

/// List the direct children of `parent_id` (root categories when
/// `None`), ordered by `sort` ascending then `updated_at` descending.
pub async fn list_children(
    pool: &PgPool,
    parent_id: Option<DbId>,
) -> TaxonomyResult<Vec<Category>> {
    Ok(CategoryRepo::list_children(pool, parent_id).await?)
}
