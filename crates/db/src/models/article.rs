//! Article row model. Articles are owned by the publishing side; this
//! service only reads them (inserts exist for seeding and tests).

use inkwell_core::comment::Article as ArticleRef;
use inkwell_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub id: DbId,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new article.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    pub slug: String,
}

impl From<Article> for ArticleRef {
    fn from(row: Article) -> Self {
        ArticleRef {
            id: row.id,
            slug: row.slug,
        }
    }
}
