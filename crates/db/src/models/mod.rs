//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A conversion into the storage-agnostic `inkwell_core` type

pub mod article;
pub mod comment;
pub mod user;
