//! Review verdicts and the review state machine.
//!
//! A record moves from [`ReviewState::Unreviewed`] to
//! [`ReviewState::Reviewed`] exactly once. Verdict, reviewer and review
//! timestamp are written together.

use crate::error::CoreError;

/// The diff was a real violation and has been dealt with.
pub const STATUS_FIXED: &str = "fixed";

/// The report was a false positive; no action needed.
pub const STATUS_FALSE: &str = "false";

/// All valid verdict values.
pub const VALID_REVIEW_STATUSES: &[&str] = &[STATUS_FIXED, STATUS_FALSE];

/// Maximum length of a reviewer username, in bytes.
pub const MAX_REVIEWER_LENGTH: usize = 255;

/// Review state of a single record, derived from its nullable `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    Unreviewed,
    Reviewed,
}

impl ReviewState {
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some(_) => Self::Reviewed,
            None => Self::Unreviewed,
        }
    }

    /// Whether a new verdict may be recorded in this state.
    pub fn accepts_assessment(self) -> bool {
        self == Self::Unreviewed
    }
}

/// Validate that a verdict string is one of the accepted values.
pub fn validate_review_status(status: &str) -> Result<(), CoreError> {
    if VALID_REVIEW_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid review status '{status}'. Must be one of: {}",
            VALID_REVIEW_STATUSES.join(", ")
        )))
    }
}

/// Validate a reviewer username: non-blank and at most [`MAX_REVIEWER_LENGTH`] bytes.
pub fn validate_reviewer(user: &str) -> Result<(), CoreError> {
    if user.trim().is_empty() {
        return Err(CoreError::Validation(
            "Reviewer username must not be empty".to_string(),
        ));
    }
    if user.len() > MAX_REVIEWER_LENGTH {
        return Err(CoreError::Validation(format!(
            "Reviewer username exceeds {MAX_REVIEWER_LENGTH} bytes"
        )));
    }
    Ok(())
}
