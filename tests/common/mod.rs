//! Shared fixtures for integration tests
//!
//! Every test gets its own in-memory SQLite database built from
//! `tests/fixtures/schema.sql` and seeded with the rows below.
//!
//! Seed facts the tests rely on:
//! - topics `mitch`, `cats`, `paper`; `paper` has no articles
//! - article 1 starts with 100 votes
//! - article 5 (topic `cats`) has two comments
//! - article 10 exists with no comments
//! - user `lurker` has written nothing

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use newsdesk::api::ApiHandler;
use newsdesk::http_server::{build_router, HttpServerConfig};
use newsdesk::store::{SqlStore, StoreConfig};

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

const IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

pub const ARTICLE_COUNT: usize = 13;

const TOPICS: &[(&str, &str)] = &[
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

const USERS: &[(&str, &str, &str)] = &[
    (
        "butter_bridge",
        "jonny",
        "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
    ),
    (
        "icellusedkars",
        "sam",
        "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
    ),
    (
        "rogersop",
        "paul",
        "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
    ),
    (
        "lurker",
        "do_nothing",
        "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
    ),
];

/// (article_id, title, topic, author, votes, day offset)
const ARTICLES: &[(i64, &str, &str, &str, i64, i64)] = &[
    (1, "Living in the shadow of a great man", "mitch", "butter_bridge", 100, 190),
    (2, "Sony Vaio; or, The Laptop", "mitch", "icellusedkars", 10, 100),
    (3, "Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", 0, 150),
    (4, "Student SUES Mitch!", "mitch", "rogersop", 0, 30),
    (5, "UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", 0, 140),
    (6, "A", "mitch", "icellusedkars", 3, 60),
    (7, "Z", "mitch", "icellusedkars", 0, 10),
    (8, "Does Mitch predate civilisation?", "mitch", "icellusedkars", 0, 120),
    (9, "They're not exactly dogs, are they?", "mitch", "butter_bridge", 0, 80),
    (10, "Seven inspirational thought leaders from Manchester UK", "mitch", "rogersop", 0, 170),
    (11, "Am I a cat?", "mitch", "icellusedkars", 0, 5),
    (12, "Moustache", "mitch", "butter_bridge", 0, 50),
    (13, "Another article about Mitch", "mitch", "butter_bridge", 0, 175),
];

/// (article_id, author, body, votes, day offset)
const COMMENTS: &[(i64, &str, &str, i64, i64)] = &[
    (9, "butter_bridge", "Oh, I've got compassion running out of my nose, pal!", 16, 101),
    (1, "butter_bridge", "The beautiful thing about treasure is that it exists.", 14, 191),
    (1, "icellusedkars", "Replacing the quiet elegance of the dark suit and tie.", 100, 192),
    (1, "icellusedkars", "I hate streaming noses", 0, 193),
    (1, "icellusedkars", "I hate streaming eyes even more", 0, 194),
    (5, "icellusedkars", "What do you see? I have no idea where this will lead us.", 16, 141),
    (5, "butter_bridge", "I carry a log, yes. Is it funny to you?", -100, 143),
    (3, "icellusedkars", "Ambidextrous marsupial", 0, 151),
    (3, "rogersop", "git push origin master", 0, 152),
    (9, "icellusedkars", "Fruit pastilles", 0, 102),
];

/// Base instant for all seed timestamps (2020-01-01T00:00:00Z)
fn seed_time(day_offset: i64) -> DateTime<Utc> {
    let base = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    base + chrono::Duration::days(day_offset)
}

/// An in-memory store with the schema but no rows
pub async fn empty_store() -> SqlStore {
    let store = SqlStore::connect(&StoreConfig::in_memory()).await.unwrap();
    sqlx::raw_sql(SCHEMA).execute(store.pool()).await.unwrap();
    store
}

/// An in-memory store with the schema and the seed rows
pub async fn seeded_store() -> SqlStore {
    let store = empty_store().await;
    let pool = store.pool();

    for &(slug, description) in TOPICS {
        sqlx::query("INSERT INTO topics (slug, description) VALUES (?, ?)")
            .bind(slug)
            .bind(description)
            .execute(pool)
            .await
            .unwrap();
    }

    for &(username, name, avatar_url) in USERS {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES (?, ?, ?)")
            .bind(username)
            .bind(name)
            .bind(avatar_url)
            .execute(pool)
            .await
            .unwrap();
    }

    for &(article_id, title, topic, author, votes, day) in ARTICLES {
        sqlx::query(
            "INSERT INTO articles
                 (article_id, title, topic, author, body, created_at, votes, article_img_url)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(article_id)
        .bind(title)
        .bind(topic)
        .bind(author)
        .bind(format!("Body of {}", title))
        .bind(seed_time(day))
        .bind(votes)
        .bind(IMG_URL)
        .execute(pool)
        .await
        .unwrap();
    }

    for &(article_id, author, body, votes, day) in COMMENTS {
        sqlx::query(
            "INSERT INTO comments (article_id, author, body, votes, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(article_id)
        .bind(author)
        .bind(body)
        .bind(votes)
        .bind(seed_time(day))
        .execute(pool)
        .await
        .unwrap();
    }

    store
}

/// Router over `store` with default server settings
pub fn router_for(store: SqlStore) -> Router {
    build_router(&HttpServerConfig::default(), ApiHandler::new(store)).unwrap()
}

/// Router over a freshly seeded store
pub async fn app() -> Router {
    router_for(seeded_store().await)
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    send_raw(app, method, uri, body).await
}

/// Send a request with an arbitrary body
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Parse a serialized timestamp
pub fn timestamp(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}
