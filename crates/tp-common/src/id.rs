//! Submission and score identity types.
//!
//! A submission is identified by an opaque string assigned upstream (the
//! marketplace data layer). A score is identified by a UUID minted when the
//! pipeline produces it. Both are newtypes so the two namespaces cannot be
//! confused at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a developer submission, assigned by the upstream data layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    /// Create a submission id from any displayable value.
    pub fn new(id: impl Into<String>) -> Self {
        SubmissionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SubmissionId {
    fn from(s: &str) -> Self {
        SubmissionId(s.to_string())
    }
}

/// Identifier of a single produced score instance.
///
/// A new review cycle for the same submission mints a new `ScoreId`; prior
/// scores are retained for audit, never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreId(pub String);

impl ScoreId {
    /// Mint a fresh score id.
    pub fn new() -> Self {
        ScoreId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ScoreId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
