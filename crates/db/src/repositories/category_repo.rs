//! Repository for the `categories` table.

use sqlx::PgPool;

use pressroom_core::category::{CategoryStatus, DEFAULT_SORT};
use pressroom_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list for categories queries.
const COLUMNS: &str = "id, name, parent_id, status, article_num, sort, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its uniqueness key `(name, parent_id)`.
    ///
    /// `IS NOT DISTINCT FROM` makes the NULL parent (root) case match.
    pub async fn find_by_name_and_parent(
        pool: &PgPool,
        name: &str,
        parent_id: Option<DbId>,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE name = $1 AND parent_id IS NOT DISTINCT FROM $2"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .bind(parent_id)
            .fetch_optional(pool)
            .await
    }

    /// List direct children of `parent_id` (roots when `None`), ordered
    /// by `sort` ascending then `updated_at` descending.
    pub async fn list_children(
        pool: &PgPool,
        parent_id: Option<DbId>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE parent_id IS NOT DISTINCT FROM $1
             ORDER BY sort ASC, updated_at DESC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Count direct children of a category.
    pub async fn count_children(pool: &PgPool, parent_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM categories WHERE parent_id = $1")
                .bind(parent_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Create a new category, returning the created row.
    ///
    /// Defaults: root (`parent_id` NULL), enabled, zero articles,
    /// [`DEFAULT_SORT`] ordering.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, parent_id, status, sort)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.parent_id)
            .bind(CategoryStatus::Enabled.id())
            .bind(input.sort.unwrap_or(DEFAULT_SORT))
            .fetch_one(pool)
            .await
    }

    /// Update a category by ID, returning the updated row. Omitted
    /// fields retain their previous values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                parent_id = COALESCE($3, parent_id),
                status = COALESCE($4, status),
                sort = COALESCE($5, sort),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.parent_id)
            .bind(input.status)
            .bind(input.sort)
            .fetch_optional(pool)
            .await
    }

    /// Atomically bump `article_num` by one, returning the updated row.
    ///
    /// This is the only write path for the aggregate counter; it is
    /// called exclusively by the aggregation engine.
    pub async fn increment_article_num(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                article_num = article_num + 1,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
