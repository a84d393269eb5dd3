//! HTTP handlers: thin pass-through over the taxonomy engine.

pub mod article;
pub mod category;
