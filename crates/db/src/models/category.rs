//! Category model.
//!
//! A category with `parent_id = NULL` is a root (first taxonomy tier);
//! a non-NULL `parent_id` marks a leaf (second tier, the only tier
//! articles attach to).

use pressroom_core::category::StatusId;
use pressroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    /// `None` = root category, `Some(id)` = leaf under that root.
    pub parent_id: Option<DbId>,
    pub status: StatusId,
    /// Aggregate article count; written only by the aggregation engine.
    pub article_num: i64,
    pub sort: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Category {
    /// Whether this category is a root (first tier).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    /// Omitted = create a root category.
    pub parent_id: Option<DbId>,
    pub sort: Option<i32>,
}

/// DTO for updating a category. Omitted fields retain previous values.
///
/// `article_num` is deliberately absent: the counter is internal to the
/// aggregation engine and not patchable from outside.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub parent_id: Option<DbId>,
    pub status: Option<StatusId>,
    pub sort: Option<i32>,
}
