//! API Layer for newsdesk
//!
//! Sits between the HTTP handlers and the store. It owns request
//! validation and the translation of store outcomes into client errors.
//!
//! # Flow
//!
//! `Received → Validating → {Rejected(400) | Querying} → {Error | Shaped} → Responded`
//!
//! Validation never performs I/O. Store failures are classified once, in
//! `From<StoreError> for ApiError`.

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult, BadRequestKind, ErrorResponse};
pub use handler::ApiHandler;
pub use request::{parse_article_list_query, parse_body, parse_id, NewCommentBody, VoteDelta};
pub use response::{
    ArticleResponse, ArticlesResponse, CommentResponse, CommentsResponse, UsersResponse,
};
