//! Repository for the `comments` table.

use inkwell_core::comment::NewComment;
use inkwell_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CommentWithAuthorRow};

/// Column list for plain comments queries.
const COLUMNS: &str = "id, article_id, user_id, content, is_approved, created_at, updated_at";

/// Column list for comments joined with `users` (aliased `c` and `u`).
const JOINED_COLUMNS: &str = "c.id, c.article_id, c.user_id, c.content, c.is_approved, \
    c.created_at, c.updated_at, u.name AS user_name";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List approved comments of an article with author names, newest first.
    pub async fn list_approved_for_article(
        pool: &PgPool,
        article_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommentWithAuthorRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.article_id = $1 AND c.is_approved
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, CommentWithAuthorRow>(&query)
            .bind(article_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count approved comments of an article.
    pub async fn count_approved_for_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM comments WHERE article_id = $1 AND is_approved",
        )
        .bind(article_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Insert a new comment, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (article_id, user_id, content, is_approved)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.article_id)
            .bind(input.user_id)
            .bind(&input.content)
            .bind(input.is_approved)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by its ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
