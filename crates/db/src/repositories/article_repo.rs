//! Repository for the `articles` table.

use sqlx::PgPool;

use crate::models::article::{Article, CreateArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, created_at, updated_at";

/// Provides lookups (and seeding inserts) for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (slug)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.slug)
            .fetch_one(pool)
            .await
    }

    /// Find an article by its slug (exact match).
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE slug = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
