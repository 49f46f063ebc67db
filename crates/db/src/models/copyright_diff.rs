//! Suspected copyright violation records (`copyright_diffs`).

use copypatrol_core::review::ReviewState;
use copypatrol_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `copyright_diffs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CopyrightDiffRecord {
    pub id: DbId,
    pub ithenticate_id: DbId,
    pub lang: String,
    pub project: String,
    pub page_ns: i32,
    pub page_title: String,
    pub rev_id: DbId,
    pub rev_parent_id: Option<DbId>,
    pub rev_user_text: Option<String>,
    pub diff_timestamp: Timestamp,
    pub status: Option<String>,
    pub status_user: Option<String>,
    pub review_timestamp: Option<Timestamp>,
}

impl CopyrightDiffRecord {
    pub fn review_state(&self) -> ReviewState {
        ReviewState::from_status(self.status.as_deref())
    }
}

/// A record together with the WikiProjects its page belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct RecordWithWikiProjects {
    #[serde(flatten)]
    pub record: CopyrightDiffRecord,
    pub wikiprojects: Vec<String>,
}

/// DTO for recording a review verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssessment {
    pub status: String,
    pub user: String,
}
