//! Aggregate counter propagation.
//!
//! `article_num` on a leaf counts the articles attached to it; on a
//! root it is the sum over the root's children. The counter is
//! maintained incrementally here, never recomputed on read, and this
//! module is the only writer.

use sqlx::PgPool;

use pressroom_core::types::DbId;
use pressroom_db::repositories::CategoryRepo;

use crate::error::{TaxonomyError, TaxonomyResult};

/// Bump the article counter of `leaf_id` and of every ancestor up to
/// the root.
///
/// The walk is bounded by the two-level tree invariant (at most one
/// parent hop), but is written as a general parent-walk. Writes are
/// strictly child-before-parent: if a parent write fails, the child
/// increment has already taken effect. That transient under-propagation
/// is surfaced to the caller, not rolled back; a future reconciliation
/// pass owns the repair.
pub async fn increment(pool: &PgPool, leaf_id: DbId) -> TaxonomyResult<()> {
    let mut current = Some(leaf_id);
    let mut hops = 0u32;

    while let Some(id) = current {
        let category = match CategoryRepo::increment_article_num(pool, id).await {
            Ok(Some(category)) => category,
            Ok(None) => {
                if hops > 0 {
                    tracing::warn!(
                        leaf_id,
                        missing_id = id,
                        "Counter propagation stopped: ancestor vanished mid-walk; \
                         lower-level counters already incremented"
                    );
                }
                return Err(TaxonomyError::CategoryNotFound(id));
            }
            Err(err) => {
                if hops > 0 {
                    tracing::warn!(
                        leaf_id,
                        failed_id = id,
                        error = %err,
                        "Counter propagation failed mid-walk; \
                         lower-level counters already incremented"
                    );
                }
                return Err(err.into());
            }
        };

        current = category.parent_id;
        hops += 1;
    }

    tracing::debug!(leaf_id, levels = hops, "Article counters incremented");
    Ok(())
}
