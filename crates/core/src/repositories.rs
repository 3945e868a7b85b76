//! Storage seams consumed by [`CommentService`](crate::service::CommentService).
//!
//! The Postgres implementations live in `inkwell-db`; [`MemoryStore`](crate::memory::MemoryStore)
//! implements all three for tests and local runs. Implementations report
//! storage failures as [`CoreError::Internal`] and a vanished foreign key
//! as [`CoreError::NotFound`].

use async_trait::async_trait;

use crate::comment::{Article, Author, Comment, CommentWithAuthor, NewComment};
use crate::error::CoreError;
use crate::types::DbId;

/// Resolves article slugs.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, CoreError>;
}

/// Resolves users to their public author projection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_author(&self, id: DbId) -> Result<Option<Author>, CoreError>;
}

/// Persists and queries comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Approved comments of one article, newest first (`created_at DESC, id DESC`).
    async fn list_approved(
        &self,
        article_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommentWithAuthor>, CoreError>;

    /// Number of approved comments of one article.
    async fn count_approved(&self, article_id: DbId) -> Result<i64, CoreError>;

    async fn create(&self, input: &NewComment) -> Result<Comment, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Comment>, CoreError>;

    /// Delete a comment, returning `false` if no row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, CoreError>;
}
