//! Postgres-backed implementation of the core repository traits.

use async_trait::async_trait;
use inkwell_core::comment::{
    Article, Author, Comment, CommentWithAuthor, NewComment, CONTENT_TOO_LONG_MESSAGE,
};
use inkwell_core::error::CoreError;
use inkwell_core::repositories::{ArticleRepository, CommentRepository, UserRepository};
use inkwell_core::types::DbId;

use crate::repositories::{ArticleRepo, CommentRepo, UserRepo};
use crate::DbPool;

/// PostgreSQL foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL check constraint violation.
const CHECK_VIOLATION: &str = "23514";

/// Adapter exposing the zero-sized repos through the core traits.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Translate a sqlx error into the core taxonomy.
///
/// - Foreign key violations mean the referenced article/user vanished: 404.
/// - The content length check constraint maps to a validation error.
/// - Everything else is logged and reported as an internal error.
pub fn classify_sqlx_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or_default();
        match db_err.code().as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => {
                let entity = if constraint.contains("user") {
                    "User"
                } else {
                    "Article"
                };
                return CoreError::not_found(entity, constraint);
            }
            Some(CHECK_VIOLATION) if constraint == "ck_comments_content_length" => {
                return CoreError::invalid_field("content", CONTENT_TOO_LONG_MESSAGE);
            }
            _ => {}
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(err.to_string())
}

#[async_trait]
impl ArticleRepository for PgStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, CoreError> {
        let row = ArticleRepo::find_by_slug(&self.pool, slug)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn find_author(&self, id: DbId) -> Result<Option<Author>, CoreError> {
        let row = UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl CommentRepository for PgStore {
    async fn list_approved(
        &self,
        article_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommentWithAuthor>, CoreError> {
        let rows = CommentRepo::list_approved_for_article(&self.pool, article_id, limit, offset)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_approved(&self, article_id: DbId) -> Result<i64, CoreError> {
        CommentRepo::count_approved_for_article(&self.pool, article_id)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn create(&self, input: &NewComment) -> Result<Comment, CoreError> {
        let row = CommentRepo::create(&self.pool, input)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Comment>, CoreError> {
        let row = CommentRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        CommentRepo::delete(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_internal() {
        // `fetch_optional` never yields RowNotFound; seeing one means a query bug.
        let err = classify_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, CoreError::Internal(_)));
    }

    #[test]
    fn pool_timeout_is_internal() {
        let err = classify_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, CoreError::Internal(_)));
    }
}
