//! Reviewer leaderboard aggregation over `copyright_diffs.status_user`.

use copypatrol_core::leaderboard::{LeaderboardWindow, LEADERBOARD_SIZE};
use copypatrol_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::leaderboard::{LeaderboardData, LeaderboardEntry};

/// Provides top-reviewer aggregates.
pub struct LeaderboardRepo;

impl LeaderboardRepo {
    /// Top reviewers, most reviews first, ignoring `excluded_user`.
    ///
    /// When `since` is set only reviews after it are counted.
    pub async fn top_reviewers(
        pool: &PgPool,
        excluded_user: &str,
        since: Option<Timestamp>,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let window_clause = if since.is_some() {
            "AND review_timestamp > $2"
        } else {
            ""
        };
        let limit_idx = if since.is_some() { 3 } else { 2 };

        let query = format!(
            "SELECT status_user AS \"user\", COUNT(*)::BIGINT AS count \
             FROM copyright_diffs \
             WHERE status_user IS NOT NULL AND status_user <> $1 {window_clause} \
             GROUP BY status_user \
             ORDER BY count DESC, status_user ASC \
             LIMIT ${limit_idx}"
        );

        let mut q = sqlx::query_as::<_, LeaderboardEntry>(&query).bind(excluded_user);
        if let Some(since) = since {
            q = q.bind(since);
        }
        q.bind(LEADERBOARD_SIZE).fetch_all(pool).await
    }

    /// Leaderboards for the last week, last month and all time, relative to `now`.
    ///
    /// The three windows are queried independently.
    pub async fn leaderboard_data(
        pool: &PgPool,
        excluded_user: &str,
        now: Timestamp,
    ) -> Result<LeaderboardData, sqlx::Error> {
        let mut data = LeaderboardData::default();
        for window in LeaderboardWindow::ALL {
            let entries = Self::top_reviewers(pool, excluded_user, window.since(now)).await?;
            tracing::debug!(window = window.key(), entries = entries.len(), "Leaderboard window loaded");
            data.set_window(window, entries);
        }
        Ok(data)
    }
}
