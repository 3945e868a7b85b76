//! Comment entities, the create request DTO and its validation rules.
//!
//! The types here are storage-agnostic: the DB layer maps its rows into
//! them and the API layer serializes them straight into responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Maximum length of a comment body, counted in characters.
pub const MAX_COMMENT_LENGTH: usize = 1_000;

/// Message returned when `content` is absent or blank.
pub const CONTENT_REQUIRED_MESSAGE: &str = "The content field is required.";

/// Message returned when `content` exceeds [`MAX_COMMENT_LENGTH`].
pub const CONTENT_TOO_LONG_MESSAGE: &str =
    "The content field must not be greater than 1000 characters.";

/// Message returned when `content` is present but not a string.
pub const CONTENT_NOT_STRING_MESSAGE: &str = "The content field must be a string.";

/* --------------------------------------------------------------------------
Entities
-------------------------------------------------------------------------- */

/// An article as seen by this service: only its key and slug matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: DbId,
    pub slug: String,
}

/// The public projection of a user attached to a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
}

/// A persisted comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub article_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A comment together with its author's id and display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: Author,
}

/// Insert payload handed to a [`CommentRepository`](crate::repositories::CommentRepository).
#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub is_approved: bool,
}

/* --------------------------------------------------------------------------
Create request
-------------------------------------------------------------------------- */

/// Content submitted to `POST /articles/{slug}/comments`.
///
/// Built by the HTTP layer from a JSON object body; `None` means the field
/// was absent or `null`.
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateCommentRequest {
    #[validate(
        required(message = "The content field is required."),
        length(
            min = 1,
            max = 1000,
            message = "The content field must not be greater than 1000 characters."
        )
    )]
    pub content: Option<String>,
}

impl CreateCommentRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Trim surrounding whitespace; blank content is treated as absent.
    pub fn normalized(self) -> Self {
        let content = self
            .content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Self { content }
    }

    /// Normalize, validate and return the content to store.
    pub fn into_content(self) -> Result<String, CoreError> {
        let normalized = self.normalized();
        normalized.validate()?;
        normalized
            .content
            .ok_or_else(|| CoreError::invalid_field("content", CONTENT_REQUIRED_MESSAGE))
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
