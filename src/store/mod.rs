//! # Store Module
//!
//! The query layer. Every statement is parameterized; row sets come back as
//! typed models and backend failures as [`StoreError`].
//!
//! Zero rows is a normal result here (`Option::None` or an empty `Vec`).
//! Deciding whether that means "not found" belongs to the caller.

mod config;
mod errors;
mod models;
mod query;
mod sql;

use std::future::Future;

pub use config::StoreConfig;
pub use errors::{StoreError, StoreResult};
pub use models::{Article, ArticleSummary, Comment, NewComment, Topic, User};
pub use query::{ArticleListQuery, SortColumn, SortOrder};
pub use sql::SqlStore;

/// Operations the API needs from a relational store.
///
/// Implementations are cheap handles (a pool, an `Arc`) and are cloned into
/// every request.
pub trait ContentStore: Clone + Send + Sync + 'static {
    /// All topics
    fn fetch_topics(&self) -> impl Future<Output = StoreResult<Vec<Topic>>> + Send;

    /// One topic by slug
    fn fetch_topic(&self, slug: &str)
        -> impl Future<Output = StoreResult<Option<Topic>>> + Send;

    /// All users
    fn fetch_users(&self) -> impl Future<Output = StoreResult<Vec<User>>> + Send;

    /// Zero or one article
    fn fetch_article_by_id(
        &self,
        article_id: i64,
    ) -> impl Future<Output = StoreResult<Option<Article>>> + Send;

    /// Articles with their comment counts, ordered per `query`
    fn fetch_all_articles(
        &self,
        query: &ArticleListQuery,
    ) -> impl Future<Output = StoreResult<Vec<ArticleSummary>>> + Send;

    /// Comments under an article, newest first. Empty does not imply the
    /// article is missing.
    fn fetch_comments_by_article(
        &self,
        article_id: i64,
    ) -> impl Future<Output = StoreResult<Vec<Comment>>> + Send;

    /// Insert a comment and return the stored row
    fn insert_comment(
        &self,
        comment: NewComment,
    ) -> impl Future<Output = StoreResult<Comment>> + Send;

    /// Apply `delta` to an article's votes and return the updated row, or
    /// `None` if the article does not exist. A sum outside the `i64` range
    /// is `ColumnMismatch` and leaves the row untouched.
    fn adjust_article_votes(
        &self,
        article_id: i64,
        delta: i64,
    ) -> impl Future<Output = StoreResult<Option<Article>>> + Send;
}
