//! Reviewer leaderboard aggregates. Derived, never persisted.

use copypatrol_core::leaderboard::LeaderboardWindow;
use serde::Serialize;
use sqlx::FromRow;

/// Number of reviews by one user within a window.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub user: String,
    pub count: i64,
}

/// Top reviewers for each window, keyed by [`LeaderboardWindow::key`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeaderboardData {
    #[serde(rename = "last-week")]
    pub last_week: Vec<LeaderboardEntry>,
    #[serde(rename = "last-month")]
    pub last_month: Vec<LeaderboardEntry>,
    #[serde(rename = "all-time")]
    pub all_time: Vec<LeaderboardEntry>,
}

impl LeaderboardData {
    pub fn window(&self, window: LeaderboardWindow) -> &[LeaderboardEntry] {
        match window {
            LeaderboardWindow::LastWeek => &self.last_week,
            LeaderboardWindow::LastMonth => &self.last_month,
            LeaderboardWindow::AllTime => &self.all_time,
        }
    }

    pub fn set_window(&mut self, window: LeaderboardWindow, entries: Vec<LeaderboardEntry>) {
        match window {
            LeaderboardWindow::LastWeek => self.last_week = entries,
            LeaderboardWindow::LastMonth => self.last_month = entries,
            LeaderboardWindow::AllTime => self.all_time = entries,
        }
    }
}
