//! Domain layer for the Inkwell comment service.
//!
//! Holds everything that does not depend on HTTP or a concrete database:
//! shared id/timestamp types, the [`error::CoreError`] taxonomy, comment
//! validation rules, pagination math, the repository traits and the
//! [`service::CommentService`] that composes them.

pub mod comment;
pub mod error;
pub mod memory;
pub mod pagination;
pub mod repositories;
pub mod service;
pub mod types;
