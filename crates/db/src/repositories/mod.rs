//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. No business rules live
//! here; tree invariants are enforced by the taxonomy services.

pub mod article_repo;
pub mod category_repo;

pub use article_repo::ArticleRepo;
pub use category_repo::CategoryRepo;
