//! # API Handler
//!
//! The validation and translation core. Every operation runs the same flow:
//!
//! 1. Validate raw inputs (no I/O). Failures return `BadRequest` and no
//!    query is issued.
//! 2. Query the store through the handle this handler owns.
//! 3. Turn empty lookups into `NotFound` and store failures into API errors
//!    through `From<StoreError>`.

use std::collections::HashMap;

use tracing::debug;

use crate::store::{Article, ArticleSummary, Comment, ContentStore, NewComment, Topic, User};

use super::errors::{ApiError, ApiResult};
use super::request::{parse_article_list_query, parse_body, parse_id, NewCommentBody, VoteDelta};

/// Request-level operations over a content store
#[derive(Debug, Clone)]
pub struct ApiHandler<S> {
    store: S,
}

impl<S: ContentStore> ApiHandler<S> {
    /// Create a handler over `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `GET /api/topics`
    pub async fn topics(&self) -> ApiResult<Vec<Topic>> {
        Ok(self.store.fetch_topics().await?)
    }

    /// `GET /api/users`
    pub async fn users(&self) -> ApiResult<Vec<User>> {
        Ok(self.store.fetch_users().await?)
    }

    /// `GET /api/articles/:article_id`
    pub async fn article(&self, raw_id: &str) -> ApiResult<Article> {
        let article_id = parse_id(raw_id)?;
        self.require_article(article_id).await
    }

    /// `GET /api/articles`
    pub async fn articles(&self, params: &HashMap<String, String>) -> ApiResult<Vec<ArticleSummary>> {
        let query = parse_article_list_query(params)?;

        if let Some(slug) = &query.topic {
            if self.store.fetch_topic(slug).await?.is_none() {
                return Err(ApiError::NotFound("Topic"));
            }
        }

        Ok(self.store.fetch_all_articles(&query).await?)
    }

    /// `GET /api/articles/:article_id/comments`
    ///
    /// An empty list only means "no comments" once the article is known to
    /// exist.
    pub async fn article_comments(&self, raw_id: &str) -> ApiResult<Vec<Comment>> {
        let article_id = parse_id(raw_id)?;
        self.require_article(article_id).await?;
        Ok(self.store.fetch_comments_by_article(article_id).await?)
    }

    /// `POST /api/articles/:article_id/comments`
    pub async fn post_comment(&self, raw_id: &str, body: &[u8]) -> ApiResult<Comment> {
        let article_id = parse_id(raw_id)?;
        let NewCommentBody { author, body } = parse_body(body)?;

        self.require_article(article_id).await?;

        let comment = self
            .store
            .insert_comment(NewComment {
                article_id,
                author,
                body,
            })
            .await?;
        debug!(article_id, comment_id = comment.comment_id, "comment posted");
        Ok(comment)
    }

    /// `PATCH /api/articles/:article_id`
    pub async fn adjust_votes(&self, raw_id: &str, body: &[u8]) -> ApiResult<Article> {
        let article_id = parse_id(raw_id)?;
        let VoteDelta { inc_votes } = parse_body(body)?;

        self.store
            .adjust_article_votes(article_id, inc_votes)
            .await?
            .ok_or(ApiError::NotFound("Article"))
    }

    async fn require_article(&self, article_id: i64) -> ApiResult<Article> {
        self.store
            .fetch_article_by_id(article_id)
            .await?
            .ok_or(ApiError::NotFound("Article"))
    }
}
