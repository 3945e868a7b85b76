//! User entity model and DTOs.

use inkwell_core::comment::Author;
use inkwell_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the email address -- NEVER serialize this to API responses.
/// Comments expose only the [`Author`] projection.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

impl From<User> for Author {
    fn from(row: User) -> Self {
        Author {
            id: row.id,
            name: row.name,
        }
    }
}
