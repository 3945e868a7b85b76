//! In-memory implementation of every repository trait.
//!
//! Backs the service and API test suites. Tables are guarded by one
//! `RwLock`, so each trait call is atomic with respect to the others.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::comment::{Article, Author, Comment, CommentWithAuthor, NewComment};
use crate::error::CoreError;
use crate::repositories::{ArticleRepository, CommentRepository, UserRepository};
use crate::types::{DbId, Timestamp};

#[derive(Default)]
struct Tables {
    articles: BTreeMap<DbId, Article>,
    users: BTreeMap<DbId, Author>,
    comments: BTreeMap<DbId, Comment>,
    next_id: DbId,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// Process-local store for articles, users and comments.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_article(&self, slug: &str) -> Article {
        let mut tables = self.tables.write().await;
        let article = Article {
            id: tables.next_id(),
            slug: slug.to_string(),
        };
        tables.articles.insert(article.id, article.clone());
        article
    }

    pub async fn insert_user(&self, name: &str) -> Author {
        let mut tables = self.tables.write().await;
        let user = Author {
            id: tables.next_id(),
            name: name.to_string(),
        };
        tables.users.insert(user.id, user.clone());
        user
    }

    /// Insert a comment with an explicit approval flag and creation time.
    pub async fn seed_comment(
        &self,
        article_id: DbId,
        user_id: DbId,
        content: &str,
        is_approved: bool,
        created_at: Timestamp,
    ) -> Comment {
        let mut tables = self.tables.write().await;
        let comment = Comment {
            id: tables.next_id(),
            article_id,
            user_id,
            content: content.to_string(),
            is_approved,
            created_at,
            updated_at: created_at,
        };
        tables.comments.insert(comment.id, comment.clone());
        comment
    }

    pub async fn comment_count(&self) -> usize {
        self.tables.read().await.comments.len()
    }
}

#[async_trait]
impl ArticleRepository for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, CoreError> {
        let tables = self.tables.read().await;
        Ok(tables.articles.values().find(|a| a.slug == slug).cloned())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_author(&self, id: DbId) -> Result<Option<Author>, CoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn list_approved(
        &self,
        article_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommentWithAuthor>, CoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<&Comment> = tables
            .comments
            .values()
            .filter(|c| c.article_id == article_id && c.is_approved)
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        rows.into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|c| {
                let user = tables.users.get(&c.user_id).cloned().ok_or_else(|| {
                    CoreError::Internal(format!("comment {} has no author row", c.id))
                })?;
                Ok(CommentWithAuthor {
                    comment: c.clone(),
                    user,
                })
            })
            .collect()
    }

    async fn count_approved(&self, article_id: DbId) -> Result<i64, CoreError> {
        let tables = self.tables.read().await;
        let count = tables
            .comments
            .values()
            .filter(|c| c.article_id == article_id && c.is_approved)
            .count();
        Ok(count as i64)
    }

    async fn create(&self, input: &NewComment) -> Result<Comment, CoreError> {
        let mut tables = self.tables.write().await;
        if !tables.articles.contains_key(&input.article_id) {
            return Err(CoreError::not_found("Article", input.article_id));
        }
        if !tables.users.contains_key(&input.user_id) {
            return Err(CoreError::not_found("User", input.user_id));
        }

        let now = Utc::now();
        let comment = Comment {
            id: tables.next_id(),
            article_id: input.article_id,
            user_id: input.user_id,
            content: input.content.clone(),
            is_approved: input.is_approved,
            created_at: now,
            updated_at: now,
        };
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Comment>, CoreError> {
        Ok(self.tables.read().await.comments.get(&id).cloned())
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        Ok(self.tables.write().await.comments.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_rejects_unknown_article() {
        let store = MemoryStore::new();
        let user = store.insert_user("Ada").await;

        let result = store
            .create(&NewComment {
                article_id: 404,
                user_id: user.id,
                content: "Hello".into(),
                is_approved: true,
            })
            .await;

        assert!(matches!(result, Err(CoreError::NotFound { entity: "Article", .. })));
        assert_eq!(store.comment_count().await, 0);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let store = MemoryStore::new();
        let article = store.insert_article("a").await;
        let user = store.insert_user("Ada").await;
        let comment = store
            .seed_comment(article.id, user.id, "x", true, Utc::now())
            .await;

        assert!(store.delete(comment.id).await.unwrap());
        assert!(!store.delete(comment.id).await.unwrap());
    }

    #[tokio::test]
    async fn equal_timestamps_order_by_id_descending() {
        let store = MemoryStore::new();
        let article = store.insert_article("a").await;
        let user = store.insert_user("Ada").await;
        let at = Utc::now();
        let older = store.seed_comment(article.id, user.id, "first", true, at).await;
        let newer = store.seed_comment(article.id, user.id, "second", true, at).await;

        let rows = store.list_approved(article.id, 20, 0).await.unwrap();
        let ids: Vec<DbId> = rows.iter().map(|r| r.comment.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }
}
