//! Shared fixtures for repository integration tests.
//!
//! Rows in `copyright_diffs` and `wikiprojects` are written by external
//! importers in production, so fixtures insert them with plain SQL.

#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use sqlx::PgPool;

/// A diff timestamp comfortably after the 2016-06-20 cutoff.
pub fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - TimeDelta::days(days)
}

/// Insert an unreviewed diff in the main namespace.
pub async fn insert_diff(
    pool: &PgPool,
    ithenticate_id: i64,
    page_title: &str,
    diff_timestamp: DateTime<Utc>,
) {
    insert_diff_in_ns(pool, ithenticate_id, page_title, 0, diff_timestamp).await;
}

pub async fn insert_diff_in_ns(
    pool: &PgPool,
    ithenticate_id: i64,
    page_title: &str,
    page_ns: i32,
    diff_timestamp: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO copyright_diffs \
            (ithenticate_id, page_ns, page_title, rev_id, diff_timestamp) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(ithenticate_id)
    .bind(page_ns)
    .bind(page_title)
    .bind(ithenticate_id * 10)
    .bind(diff_timestamp)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert a diff that has already been reviewed.
pub async fn insert_reviewed_diff(
    pool: &PgPool,
    ithenticate_id: i64,
    page_title: &str,
    status: &str,
    user: &str,
    review_timestamp: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO copyright_diffs \
            (ithenticate_id, page_title, rev_id, diff_timestamp, \
             status, status_user, review_timestamp) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(ithenticate_id)
    .bind(page_title)
    .bind(ithenticate_id * 10)
    .bind(ts(2017, 1, 1))
    .bind(status)
    .bind(user)
    .bind(review_timestamp)
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
