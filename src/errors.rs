use thiserror::Error;

use crate::types::{FailureReason, PageNumber};

/// Error type for retrieval, submission, and configuration failures.
///
/// Malformed record fields are never represented here: they normalize
/// to zero sub-scores and/or quality flags instead.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("page {page} could not be fetched: {reason}")]
    PageUnavailable {
        page: PageNumber,
        reason: FailureReason,
    },
    #[error("assessment submission failed: {reason}")]
    Submission { reason: FailureReason },
    #[error("configuration error: {0}")]
    Configuration(String),
}
