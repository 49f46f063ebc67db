//! Filters for the review queue.
//!
//! Raw request options arrive as loosely-typed strings. They are normalized
//! here into a [`RecordFilter`] that the repository layer turns into SQL.
//! Absent and empty options normalize to "no restriction".

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};
use crate::wikiproject::parse_project_list;

/// Namespace id of the Draft namespace.
pub const DRAFT_NAMESPACE: i32 = 118;

/// Default number of records per page.
pub const DEFAULT_RECORDS_LIMIT: i64 = 50;

/// Maximum number of records per page.
pub const MAX_RECORDS_LIMIT: i64 = 500;

/// Unix time of 2016-06-20 00:00:00 UTC. Diffs at or before this are never surfaced.
pub const MIN_DIFF_TIMESTAMP_SECS: i64 = 1_466_380_800;

/// The fixed lower bound applied to `diff_timestamp`.
pub fn min_diff_timestamp() -> Timestamp {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(MIN_DIFF_TIMESTAMP_SECS)
}

/// Clamp a user-provided limit to `[1, MAX_RECORDS_LIMIT]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_RECORDS_LIMIT)
        .clamp(1, MAX_RECORDS_LIMIT)
}

/// Review status restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No restriction on `status`.
    #[default]
    All,
    /// Only rows that have not been reviewed yet.
    Open,
    /// Only rows that carry a verdict.
    Reviewed,
}

impl StatusFilter {
    /// Unknown values fall back to [`StatusFilter::All`].
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("open") => Self::Open,
            Some("reviewed") => Self::Reviewed,
            _ => Self::All,
        }
    }
}

/// Raw query options for the records queue, as accepted over HTTP.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordOptions {
    pub limit: Option<i64>,
    pub filter: Option<String>,
    pub filter_user: Option<String>,
    pub last_id: Option<String>,
    pub drafts: Option<String>,
    pub wikiprojects: Option<String>,
}

/// Normalized restrictions for a records query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    pub status: StatusFilter,
    /// Exact match on `status_user`.
    pub reviewer: Option<String>,
    /// Exclusive upper bound on `ithenticate_id` ("load more" cursor).
    pub before_ithenticate_id: Option<DbId>,
    /// Restrict to the Draft namespace.
    pub drafts_only: bool,
    /// Full `wp_project` keys, e.g. `WikiProject_Medicine`.
    pub wikiprojects: Vec<String>,
    pub min_diff_timestamp: Timestamp,
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            reviewer: None,
            before_ithenticate_id: None,
            drafts_only: false,
            wikiprojects: Vec::new(),
            min_diff_timestamp: min_diff_timestamp(),
        }
    }
}

impl RecordFilter {
    /// Normalize raw options. Fails only when `last_id` is present but not an integer.
    pub fn from_options(options: &RecordOptions) -> Result<Self, CoreError> {
        let before_ithenticate_id = match non_empty(options.last_id.as_deref()) {
            Some(raw) => Some(raw.parse::<DbId>().map_err(|_| {
                CoreError::Validation(format!("last_id must be an integer, got '{raw}'"))
            })?),
            None => None,
        };

        Ok(Self {
            status: StatusFilter::parse(options.filter.as_deref()),
            reviewer: non_empty(options.filter_user.as_deref()).map(str::to_string),
            before_ithenticate_id,
            drafts_only: non_empty(options.drafts.as_deref()).is_some(),
            wikiprojects: options
                .wikiprojects
                .as_deref()
                .map(parse_project_list)
                .unwrap_or_default(),
            min_diff_timestamp: min_diff_timestamp(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
