//! Comment row models.

use inkwell_core::comment::{Author, Comment as CommentEntity, CommentWithAuthor};
use inkwell_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub article_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A `comments` row joined with its author's display name.
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthorRow {
    pub id: DbId,
    pub article_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_name: String,
}

impl From<Comment> for CommentEntity {
    fn from(row: Comment) -> Self {
        CommentEntity {
            id: row.id,
            article_id: row.article_id,
            user_id: row.user_id,
            content: row.content,
            is_approved: row.is_approved,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<CommentWithAuthorRow> for CommentWithAuthor {
    fn from(row: CommentWithAuthorRow) -> Self {
        CommentWithAuthor {
            user: Author {
                id: row.user_id,
                name: row.user_name,
            },
            comment: CommentEntity {
                id: row.id,
                article_id: row.article_id,
                user_id: row.user_id,
                content: row.content,
                is_approved: row.is_approved,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}
