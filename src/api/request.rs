//! # Request Validation
//!
//! Pure checks on raw request inputs. Nothing here touches the store; every
//! function either returns typed values or a `BadRequest`.
//!
//! Bodies are parsed into fixed contracts. Unknown keys are rejected, so a
//! misspelled field never reaches a query.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::error::Category;

use crate::store::{ArticleListQuery, SortColumn, SortOrder};

use super::errors::{ApiResult, BadRequestKind};

/// Body of `POST /api/articles/:article_id/comments`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCommentBody {
    pub author: String,
    pub body: String,
}

/// Body of `PATCH /api/articles/:article_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoteDelta {
    pub inc_votes: i64,
}

/// Parse a `*_id` path segment. Only plain decimal digits are accepted, so
/// `+1` is rejected rather than aliasing `1`.
pub fn parse_id(raw: &str) -> ApiResult<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BadRequestKind::InvalidId.into());
    }
    raw.parse::<i64>().map_err(|_| BadRequestKind::InvalidId.into())
}

/// Parse a JSON body into a contract type.
///
/// Bytes that are not JSON are `MalformedBody`; JSON that does not fit the
/// contract (unknown key, missing key, wrong type) is `InvalidColumn`.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(bytes).map_err(|err| {
        let kind = match err.classify() {
            Category::Data => BadRequestKind::InvalidColumn,
            Category::Syntax | Category::Eof | Category::Io => BadRequestKind::MalformedBody,
        };
        kind.into()
    })
}

/// Parse the article list query string. Unknown keys are ignored.
pub fn parse_article_list_query(params: &HashMap<String, String>) -> ApiResult<ArticleListQuery> {
    let sort_by = match params.get("sort_by") {
        Some(name) => {
            SortColumn::from_name(name).ok_or(BadRequestKind::InvalidSortQuery)?
        }
        None => SortColumn::default(),
    };

    let order = match params.get("order") {
        Some(name) => SortOrder::from_name(name).ok_or(BadRequestKind::InvalidOrderQuery)?,
        None => SortOrder::default(),
    };

    Ok(ArticleListQuery {
        sort_by,
        order,
        topic: params.get("topic").cloned(),
    })
}
