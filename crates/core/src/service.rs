//! The comment service: list, create and delete comments on articles.

use std::sync::Arc;

use crate::comment::{Article, CommentWithAuthor, CreateCommentRequest, NewComment};
use crate::error::CoreError;
use crate::pagination::{page_offset, Page, COMMENTS_PER_PAGE};
use crate::repositories::{ArticleRepository, CommentRepository, UserRepository};
use crate::types::DbId;

/// Composes the three repositories into the comment operations.
///
/// Cheap to clone; every repository sits behind an `Arc`.
#[derive(Clone)]
pub struct CommentService {
    articles: Arc<dyn ArticleRepository>,
    comments: Arc<dyn CommentRepository>,
    users: Arc<dyn UserRepository>,
}

impl CommentService {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            articles,
            comments,
            users,
        }
    }

    /// Resolve a slug, failing with NotFound when no article carries it.
    pub async fn find_article(&self, slug: &str) -> Result<Article, CoreError> {
        self.articles
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| CoreError::not_found("Article", slug))
    }

    /// Approved comments of the article, newest first, [`COMMENTS_PER_PAGE`] per page.
    pub async fn list(
        &self,
        article_slug: &str,
        page: i64,
    ) -> Result<Page<CommentWithAuthor>, CoreError> {
        let article = self.find_article(article_slug).await?;
        let page = page.max(1);

        let total = self.comments.count_approved(article.id).await?;
        let data = self
            .comments
            .list_approved(
                article.id,
                COMMENTS_PER_PAGE,
                page_offset(page, COMMENTS_PER_PAGE),
            )
            .await?;

        Ok(Page::new(data, page, COMMENTS_PER_PAGE, total))
    }

    /// Post a comment as `caller`. Comments are published immediately.
    pub async fn create(
        &self,
        article_slug: &str,
        input: CreateCommentRequest,
        caller: DbId,
    ) -> Result<CommentWithAuthor, CoreError> {
        let article = self.find_article(article_slug).await?;
        let content = input.into_content()?;

        let author = self
            .users
            .find_author(caller)
            .await?
            .ok_or_else(|| CoreError::Unauthorized("Unknown user".into()))?;

        let comment = self
            .comments
            .create(&NewComment {
                article_id: article.id,
                user_id: author.id,
                content,
                is_approved: true,
            })
            .await?;

        Ok(CommentWithAuthor {
            comment,
            user: author,
        })
    }

    /// Delete a comment. Only its author may do so.
    pub async fn delete(&self, comment_id: DbId, caller: DbId) -> Result<(), CoreError> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Comment", comment_id))?;

        if comment.user_id != caller {
            return Err(CoreError::Forbidden(
                "You can only delete your own comments".into(),
            ));
        }

        if !self.comments.delete(comment_id).await? {
            // Lost a race with another delete of the same row.
            return Err(CoreError::not_found("Comment", comment_id));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    use super::*;
    use crate::comment::MAX_COMMENT_LENGTH;
    use crate::memory::MemoryStore;

    struct Fixture {
        store: Arc<MemoryStore>,
        service: CommentService,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let service = CommentService::new(store.clone(), store.clone(), store.clone());
        Fixture { store, service }
    }

    #[tokio::test]
    async fn list_unknown_slug_is_not_found() {
        let fx = fixture();
        let err = fx.service.list("missing", 1).await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Article", .. });
    }

    #[tokio::test]
    async fn find_article_matches_slug_exactly() {
        let fx = fixture();
        let post = fx.store.insert_article("my-post").await;

        assert_eq!(fx.service.find_article("my-post").await.unwrap(), post);
        assert_matches!(
            fx.service.find_article("my-post-2").await,
            Err(CoreError::NotFound { entity: "Article", .. })
        );
    }

    #[tokio::test]
    async fn list_returns_only_approved_comments_of_that_article() {
        let fx = fixture();
        let post = fx.store.insert_article("my-post").await;
        let other = fx.store.insert_article("my-post-2").await;
        let ada = fx.store.insert_user("Ada").await;

        let visible = fx.store.seed_comment(post.id, ada.id, "visible", true, Utc::now()).await;
        fx.store.seed_comment(post.id, ada.id, "hidden", false, Utc::now()).await;
        fx.store.seed_comment(other.id, ada.id, "elsewhere", true, Utc::now()).await;

        let page = fx.service.list("my-post", 1).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].comment.id, visible.id);
        assert_eq!(page.data[0].user.name, "Ada");
    }

    #[tokio::test]
    async fn list_is_newest_first_and_paged_by_twenty() {
        let fx = fixture();
        let post = fx.store.insert_article("my-post").await;
        let ada = fx.store.insert_user("Ada").await;
        let base = Utc::now() - Duration::hours(1);

        for i in 0..25 {
            fx.store
                .seed_comment(post.id, ada.id, &format!("c{i}"), true, base + Duration::seconds(i))
                .await;
        }

        let first = fx.service.list("my-post", 1).await.unwrap();
        assert_eq!(first.data.len(), 20);
        assert_eq!(first.total, 25);
        assert_eq!(first.last_page, 2);
        assert_eq!(first.data[0].comment.content, "c24");
        assert_eq!(first.data[19].comment.content, "c5");

        let second = fx.service.list("my-post", 2).await.unwrap();
        assert_eq!(second.data.len(), 5);
        assert_eq!(second.data[0].comment.content, "c4");
        assert_eq!(second.data[4].comment.content, "c0");
        assert_eq!(second.from, Some(21));
        assert_eq!(second.to, Some(25));
    }

    #[tokio::test]
    async fn create_attaches_author_and_approves() {
        let fx = fixture();
        let post = fx.store.insert_article("my-post").await;
        let ada = fx.store.insert_user("Ada").await;

        let created = fx
            .service
            .create("my-post", CreateCommentRequest::new("Hello"), ada.id)
            .await
            .unwrap();

        assert_eq!(created.comment.article_id, post.id);
        assert_eq!(created.comment.user_id, ada.id);
        assert_eq!(created.comment.content, "Hello");
        assert!(created.comment.is_approved);
        assert_eq!(created.user, ada);
    }

    #[tokio::test]
    async fn create_oversized_content_persists_nothing() {
        let fx = fixture();
        fx.store.insert_article("my-post").await;
        let ada = fx.store.insert_user("Ada").await;

        let input = CreateCommentRequest::new("x".repeat(MAX_COMMENT_LENGTH + 1));
        let err = fx.service.create("my-post", input, ada.id).await.unwrap_err();

        assert_matches!(err, CoreError::Validation(_));
        assert_eq!(fx.store.comment_count().await, 0);
    }

    #[tokio::test]
    async fn create_unknown_slug_persists_nothing() {
        let fx = fixture();
        let ada = fx.store.insert_user("Ada").await;

        let err = fx
            .service
            .create("nope", CreateCommentRequest::new("Hello"), ada.id)
            .await
            .unwrap_err();

        assert_matches!(err, CoreError::NotFound { entity: "Article", .. });
        assert_eq!(fx.store.comment_count().await, 0);
    }

    #[tokio::test]
    async fn create_unknown_slug_wins_over_invalid_content() {
        let fx = fixture();
        let ada = fx.store.insert_user("Ada").await;

        let err = fx
            .service
            .create("nope", CreateCommentRequest::default(), ada.id)
            .await
            .unwrap_err();

        assert_matches!(err, CoreError::NotFound { .. });
    }

    #[tokio::test]
    async fn create_by_unknown_user_is_unauthorized() {
        let fx = fixture();
        fx.store.insert_article("my-post").await;

        let err = fx
            .service
            .create("my-post", CreateCommentRequest::new("Hello"), 999)
            .await
            .unwrap_err();

        assert_matches!(err, CoreError::Unauthorized(_));
        assert_eq!(fx.store.comment_count().await, 0);
    }

    #[tokio::test]
    async fn delete_by_other_user_is_forbidden_and_keeps_comment() {
        let fx = fixture();
        fx.store.insert_article("my-post").await;
        let ada = fx.store.insert_user("Ada").await;
        let bob = fx.store.insert_user("Bob").await;

        let created = fx
            .service
            .create("my-post", CreateCommentRequest::new("Hello"), ada.id)
            .await
            .unwrap();

        let err = fx.service.delete(created.comment.id, bob.id).await.unwrap_err();
        assert_matches!(err, CoreError::Forbidden(_));
        assert_eq!(fx.store.comment_count().await, 1);
    }

    #[tokio::test]
    async fn delete_twice_is_not_found_the_second_time() {
        let fx = fixture();
        fx.store.insert_article("my-post").await;
        let ada = fx.store.insert_user("Ada").await;

        let created = fx
            .service
            .create("my-post", CreateCommentRequest::new("Hello"), ada.id)
            .await
            .unwrap();

        fx.service.delete(created.comment.id, ada.id).await.unwrap();
        let err = fx.service.delete(created.comment.id, ada.id).await.unwrap_err();

        assert_matches!(err, CoreError::NotFound { entity: "Comment", .. });
        assert_eq!(fx.store.comment_count().await, 0);
    }
}
