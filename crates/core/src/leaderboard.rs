//! Leaderboard windows and constants.

use chrono::TimeDelta;

use crate::types::Timestamp;

/// Entries returned per window.
pub const LEADERBOARD_SIZE: i64 = 10;

/// Bot account whose automated reviews never count towards the leaderboard.
pub const DEFAULT_EXCLUDED_USER: &str = "Community Tech bot";

/// Time window a leaderboard is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardWindow {
    LastWeek,
    LastMonth,
    AllTime,
}

impl LeaderboardWindow {
    pub const ALL: [Self; 3] = [Self::LastWeek, Self::LastMonth, Self::AllTime];

    /// Key used in the serialized leaderboard map.
    pub fn key(self) -> &'static str {
        match self {
            Self::LastWeek => "last-week",
            Self::LastMonth => "last-month",
            Self::AllTime => "all-time",
        }
    }

    /// Window length, `None` when unbounded.
    pub fn duration(self) -> Option<TimeDelta> {
        match self {
            Self::LastWeek => Some(TimeDelta::days(7)),
            Self::LastMonth => Some(TimeDelta::days(30)),
            Self::AllTime => None,
        }
    }

    /// Lower bound on `review_timestamp` relative to `now`.
    pub fn since(self, now: Timestamp) -> Option<Timestamp> {
        self.duration().map(|d| now - d)
    }
}
