//! Article model.

use pressroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub content: String,
    /// Always references a leaf category.
    pub parent_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new article.
#[derive(Debug, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub parent_id: DbId,
}

/// DTO for updating an article. Updates are a full-field overwrite,
/// so every field is required.
#[derive(Debug, Deserialize)]
pub struct UpdateArticle {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub parent_id: DbId,
}
