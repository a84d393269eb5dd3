//! Taxonomy & content consistency engine.
//!
//! Maintains the structural invariants of the two-level category tree,
//! enforces where articles may attach, propagates aggregate article
//! counters up the tree, blocks structurally invalid deletions, and
//! answers subtree listing queries with a concurrent per-child fan-out.
//!
//! Every operation takes the shared `&PgPool` as its first argument and
//! returns a typed [`error::TaxonomyError`] on failure; nothing is
//! retried or swallowed here.

pub mod aggregation;
pub mod articles;
pub mod categories;
pub mod error;
pub mod subtree;

pub use error::{TaxonomyError, TaxonomyResult};
