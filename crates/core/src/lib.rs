//! Pure domain logic for the Pressroom taxonomy engine.
//!
//! This crate has no internal dependencies and no I/O so it can be used
//! by the persistence layer, the taxonomy services, and any future CLI
//! or worker tooling.

pub mod category;
pub mod search;
pub mod types;
