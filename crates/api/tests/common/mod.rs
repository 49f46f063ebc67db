#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use copypatrol_api::config::ServerConfig;
use copypatrol_api::router::build_app_router;
use copypatrol_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        wiki_base_url: "https://en.wikipedia.org".to_string(),
        leaderboard_excluded_user: "Community Tech bot".to_string(),
    }
}

/// Build the full application router, including middleware, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert an unreviewed diff after the 2016 cutoff.
pub async fn insert_diff(pool: &PgPool, ithenticate_id: i64, page_title: &str, days_old: i32) {
    sqlx::query(
        "INSERT INTO copyright_diffs (ithenticate_id, page_title, rev_id, diff_timestamp) \
         VALUES ($1, $2, $3, NOW() - make_interval(days => $4))",
    )
    .bind(ithenticate_id)
    .bind(page_title)
    .bind(ithenticate_id * 10)
    .bind(days_old)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_membership(pool: &PgPool, page_title: &str, wp_project: &str) {
    sqlx::query("INSERT INTO wikiprojects (wp_page_title, wp_project) VALUES ($1, $2)")
        .bind(page_title)
        .bind(wp_project)
        .execute(pool)
        .await
        .unwrap();
}
