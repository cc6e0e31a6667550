//! Content HTTP Routes
//!
//! Topics, users, articles and comments. Handlers pass raw path strings,
//! query maps and body bytes straight to [`ApiHandler`], which does all of
//! the validation.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::api::{
    ApiHandler, ApiResult, ArticleResponse, ArticlesResponse, CommentResponse, CommentsResponse,
    UsersResponse,
};
use crate::store::{Article, ContentStore, Topic};

/// Create content routes
pub fn content_routes<S: ContentStore>(handler: ApiHandler<S>) -> Router {
    Router::new()
        .route("/topics", get(get_topics_handler::<S>))
        .route("/users", get(get_users_handler::<S>))
        .route("/articles", get(get_articles_handler::<S>))
        .route(
            "/articles/:article_id",
            get(get_article_handler::<S>).patch(patch_article_handler::<S>),
        )
        .route(
            "/articles/:article_id/comments",
            get(get_comments_handler::<S>).post(post_comment_handler::<S>),
        )
        .with_state(handler)
}

// ==================
// Topic / User Handlers
// ==================

async fn get_topics_handler<S: ContentStore>(
    State(handler): State<ApiHandler<S>>,
) -> ApiResult<Json<Vec<Topic>>> {
    Ok(Json(handler.topics().await?))
}

async fn get_users_handler<S: ContentStore>(
    State(handler): State<ApiHandler<S>>,
) -> ApiResult<Json<UsersResponse>> {
    let users = handler.users().await?;
    Ok(Json(UsersResponse { users }))
}

// ==================
// Article Handlers
// ==================

async fn get_articles_handler<S: ContentStore>(
    State(handler): State<ApiHandler<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ArticlesResponse>> {
    let articles = handler.articles(&params).await?;
    Ok(Json(ArticlesResponse { articles }))
}

async fn get_article_handler<S: ContentStore>(
    State(handler): State<ApiHandler<S>>,
    Path(article_id): Path<String>,
) -> ApiResult<Json<Article>> {
    Ok(Json(handler.article(&article_id).await?))
}

async fn patch_article_handler<S: ContentStore>(
    State(handler): State<ApiHandler<S>>,
    Path(article_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<ArticleResponse>> {
    let article = handler.adjust_votes(&article_id, &body).await?;
    Ok(Json(ArticleResponse { article }))
}

// ==================
// Comment Handlers
// ==================

async fn get_comments_handler<S: ContentStore>(
    State(handler): State<ApiHandler<S>>,
    Path(article_id): Path<String>,
) -> ApiResult<Json<CommentsResponse>> {
    let comments = handler.article_comments(&article_id).await?;
    Ok(Json(CommentsResponse { comments }))
}

async fn post_comment_handler<S: ContentStore>(
    State(handler): State<ApiHandler<S>>,
    Path(article_id): Path<String>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let comment = handler.post_comment(&article_id, &body).await?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}
