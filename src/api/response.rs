//! # Response Bodies
//!
//! Wrappers that give each success payload its top-level key.

use serde::Serialize;

use crate::store::{Article, ArticleSummary, Comment, User};

/// `GET /api/users`
#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// `GET /api/articles`
#[derive(Debug, Clone, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleSummary>,
}

/// `PATCH /api/articles/:article_id`
#[derive(Debug, Clone, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

/// `GET /api/articles/:article_id/comments`
#[derive(Debug, Clone, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// `POST /api/articles/:article_id/comments`
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}
