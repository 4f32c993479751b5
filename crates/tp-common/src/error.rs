//! Error types for the trust pipeline.
//!
//! This module provides structured error handling with:
//! - Category classification for error grouping
//! - Retryability hints for callers that own retry policy
//!
//! The pipeline never retries anything itself; only the caller knows the
//! acceptable latency/cost tradeoffs for re-invoking the external reviewer.

use crate::categories::CategoryKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trust pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Malformed request input (bundle, ids).
    Input,
    /// Reviewer returned an unusable judgment set.
    Judgment,
    /// Network/timeout/non-2xx from the external reviewer.
    Reviewer,
    /// Score outside its documented range (defensive; a bug if seen).
    Score,
    /// Review lifecycle violations.
    Lifecycle,
    /// File I/O and serialization.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Judgment => "judgment",
            ErrorCategory::Reviewer => "reviewer",
            ErrorCategory::Score => "score",
            ErrorCategory::Lifecycle => "lifecycle",
            ErrorCategory::Io => "io",
        };
        write!(f, "{}", s)
    }
}

/// Unified error type for the trust pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed bundle or request. Fatal; the caller must fix the request.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The reviewer returned fewer than the required ten categories.
    ///
    /// Fatal for this run. Eligible for a caller-initiated retry of the
    /// reviewer call only; sanitization output may be reused.
    #[error("review incomplete: missing categories {missing:?}")]
    IncompleteJudgment { missing: Vec<CategoryKind> },

    /// Network, timeout, or non-2xx failure from the external reviewer.
    #[error("external reviewer failure: {reason}")]
    ExternalReviewer { reason: String, retryable: bool },

    /// Total score outside [0, 100]. Unreachable given the aggregator's
    /// contract; treated as an assertion failure, not a recoverable path.
    #[error("total score {value} outside [0, 100]")]
    ScoreRange { value: u32 },

    /// Illegal review lifecycle transition.
    #[error("invalid review transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Convenience constructor for input errors.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for reviewer failures.
    pub fn reviewer(reason: impl Into<String>, retryable: bool) -> Self {
        Error::ExternalReviewer {
            reason: reason.into(),
            retryable,
        }
    }

    /// Category of this error, for grouping in logs and agent output.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidInput { .. } => ErrorCategory::Input,
            Error::IncompleteJudgment { .. } => ErrorCategory::Judgment,
            Error::ExternalReviewer { .. } => ErrorCategory::Reviewer,
            Error::ScoreRange { .. } => ErrorCategory::Score,
            Error::InvalidTransition { .. } => ErrorCategory::Lifecycle,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Whether a caller-initiated retry can plausibly succeed.
    ///
    /// Reviewer timeouts and transient network failures are retryable with
    /// backoff; incomplete judgments are retryable at the reviewer call only.
    /// Everything else requires the caller to change the request.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::ExternalReviewer { retryable, .. } => *retryable,
            Error::IncompleteJudgment { .. } => true,
            _ => false,
        }
    }
}
