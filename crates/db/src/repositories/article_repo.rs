//! Repository for the `articles` table.

use sqlx::PgPool;

use pressroom_core::search::escape_like;
use pressroom_core::types::DbId;

use crate::models::article::{Article, CreateArticle, UpdateArticle};

/// Column list for articles queries.
const COLUMNS: &str = "id, title, description, content, parent_id, created_at, updated_at";

/// Provides CRUD and keyword-search operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Find an article by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an article by its uniqueness key `(title, parent_id)`.
    pub async fn find_by_title_and_parent(
        pool: &PgPool,
        title: &str,
        parent_id: DbId,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE title = $1 AND parent_id = $2");
        sqlx::query_as::<_, Article>(&query)
            .bind(title)
            .bind(parent_id)
            .fetch_optional(pool)
            .await
    }

    /// Search articles by keyword against `title` OR `description`
    /// (case-sensitive substring), optionally scoped to one category.
    ///
    /// An empty keyword matches every article. Results are returned in
    /// store-native order.
    pub async fn search(
        pool: &PgPool,
        parent_id: Option<DbId>,
        keyword: &str,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(keyword));
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE ($1::BIGINT IS NULL OR parent_id = $1)
               AND (title LIKE $2 OR description LIKE $2)"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(parent_id)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Create a new article, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, description, content, parent_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content)
            .bind(input.parent_id)
            .fetch_one(pool)
            .await
    }

    /// Overwrite an article by ID (full-field update), returning the
    /// updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = $2,
                description = $3,
                content = $4,
                parent_id = $5,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content)
            .bind(input.parent_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
