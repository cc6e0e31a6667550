//! # SQL Store
//!
//! `ContentStore` backed by an sqlx SQLite pool. Foreign keys are enforced
//! on every connection, so unknown authors and topics are rejected by the
//! database at write time.

use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use tracing::{debug, info, warn};

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::models::{Article, ArticleSummary, Comment, NewComment, Topic, User};
use super::query::ArticleListQuery;
use super::ContentStore;

const SELECT_TOPICS: &str = "SELECT slug, description FROM topics ORDER BY slug";

const SELECT_TOPIC: &str = "SELECT slug, description FROM topics WHERE slug = ?";

const SELECT_USERS: &str = "SELECT username, name, avatar_url FROM users ORDER BY username";

const SELECT_ARTICLE: &str = "SELECT article_id, title, topic, author, body, created_at, votes, article_img_url
   FROM articles
  WHERE article_id = ?";

const SELECT_ARTICLE_SUMMARIES: &str = "SELECT articles.article_id AS article_id,
       articles.title AS title,
       articles.topic AS topic,
       articles.author AS author,
       articles.body AS body,
       articles.created_at AS created_at,
       articles.votes AS votes,
       articles.article_img_url AS article_img_url,
       COUNT(comments.comment_id) AS comment_count
  FROM articles
  LEFT JOIN comments ON comments.article_id = articles.article_id";

const SELECT_COMMENTS: &str = "SELECT comment_id, article_id, author, body, votes, created_at
   FROM comments
  WHERE article_id = ?
  ORDER BY created_at DESC, comment_id DESC";

const INSERT_COMMENT: &str = "INSERT INTO comments (article_id, author, body, votes, created_at)
 VALUES (?, ?, ?, 0, ?)
 RETURNING comment_id, article_id, author, body, votes, created_at";

// SQLite turns an overflowing integer sum into a REAL, so the sum is only
// applied when it stays inside the i64 range.
const UPDATE_VOTES: &str = "UPDATE articles
    SET votes = votes + ?1
  WHERE article_id = ?2
    AND CASE WHEN ?1 >= 0 THEN votes <= 9223372036854775807 - ?1
             ELSE votes >= -9223372036854775807 - 1 - ?1
        END
 RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url";

/// SQLite-backed store handle. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    /// Open a pool for `config`
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));

        pool_options = if config.is_in_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        info!(url = %config.database_url, "store pool opened");

        Ok(Self { pool })
    }

    /// The underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        info!("store pool closed");
    }
}

impl ContentStore for SqlStore {
    async fn fetch_topics(&self) -> StoreResult<Vec<Topic>> {
        let topics = sqlx::query_as::<_, Topic>(SELECT_TOPICS)
            .fetch_all(&self.pool)
            .await?;
        Ok(topics)
    }

    async fn fetch_topic(&self, slug: &str) -> StoreResult<Option<Topic>> {
        let topic = sqlx::query_as::<_, Topic>(SELECT_TOPIC)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(topic)
    }

    async fn fetch_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn fetch_article_by_id(&self, article_id: i64) -> StoreResult<Option<Article>> {
        let article = sqlx::query_as::<_, Article>(SELECT_ARTICLE)
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(article)
    }

    async fn fetch_all_articles(
        &self,
        query: &ArticleListQuery,
    ) -> StoreResult<Vec<ArticleSummary>> {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(SELECT_ARTICLE_SUMMARIES);

        if let Some(topic) = &query.topic {
            builder.push(" WHERE articles.topic = ");
            builder.push_bind(topic.clone());
        }

        builder.push(" GROUP BY articles.article_id ORDER BY ");
        builder.push(query.order_clause());

        debug!(sql = builder.sql(), "listing articles");

        let articles = builder
            .build_query_as::<ArticleSummary>()
            .fetch_all(&self.pool)
            .await?;
        Ok(articles)
    }

    async fn fetch_comments_by_article(&self, article_id: i64) -> StoreResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(SELECT_COMMENTS)
            .bind(article_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(comments)
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        let inserted = sqlx::query_as::<_, Comment>(INSERT_COMMENT)
            .bind(comment.article_id)
            .bind(comment.author)
            .bind(comment.body)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;
        debug!(comment_id = inserted.comment_id, "comment inserted");
        Ok(inserted)
    }

    async fn adjust_article_votes(
        &self,
        article_id: i64,
        delta: i64,
    ) -> StoreResult<Option<Article>> {
        let updated = sqlx::query_as::<_, Article>(UPDATE_VOTES)
            .bind(delta)
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await?;

        if updated.is_some() {
            return Ok(updated);
        }

        // No row changed: either the article is missing or the sum is out of range
        match self.fetch_article_by_id(article_id).await? {
            Some(article) => {
                warn!(article_id, votes = article.votes, delta, "vote adjustment out of range");
                Err(StoreError::ColumnMismatch(format!(
                    "votes {} + {} is out of range",
                    article.votes, delta
                )))
            }
            None => Ok(None),
        }
    }
}
