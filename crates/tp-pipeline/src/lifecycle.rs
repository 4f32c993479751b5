//! Submission review lifecycle.
//!
//! `NotStarted -> InProgress -> Submitted -> Reviewed`. `Reviewed` is
//! terminal per score instance; a new review cycle for the same submission
//! creates a new score and never mutates the prior terminal state.

use serde::{Deserialize, Serialize};
use tp_common::{Error, Result};

/// Review lifecycle states, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    NotStarted,
    InProgress,
    Submitted,
    Reviewed,
}

impl ReviewState {
    pub fn name(&self) -> &'static str {
        match self {
            ReviewState::NotStarted => "NOT_STARTED",
            ReviewState::InProgress => "IN_PROGRESS",
            ReviewState::Submitted => "SUBMITTED",
            ReviewState::Reviewed => "REVIEWED",
        }
    }

    /// Whether this state accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReviewState::Reviewed)
    }

    /// Legal next state, if any.
    fn next(&self) -> Option<ReviewState> {
        match self {
            ReviewState::NotStarted => Some(ReviewState::InProgress),
            ReviewState::InProgress => Some(ReviewState::Submitted),
            ReviewState::Submitted => Some(ReviewState::Reviewed),
            ReviewState::Reviewed => None,
        }
    }

    /// Transition to `to`, enforcing the single legal forward step.
    pub fn advance(self, to: ReviewState) -> Result<ReviewState> {
        if self.next() == Some(to) {
            Ok(to)
        } else {
            Err(Error::InvalidTransition {
                from: self.name().to_string(),
                to: to.name().to_string(),
            })
        }
    }
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_terminal() {
        let state = ReviewState::NotStarted
            .advance(ReviewState::InProgress)
            .and_then(|s| s.advance(ReviewState::Submitted))
            .and_then(|s| s.advance(ReviewState::Reviewed))
            .unwrap();
        assert!(state.is_terminal());
    }

    #[test]
    fn skipping_states_is_rejected() {
        assert!(ReviewState::NotStarted.advance(ReviewState::Reviewed).is_err());
        assert!(ReviewState::InProgress.advance(ReviewState::Reviewed).is_err());
    }

    #[test]
    fn terminal_state_rejects_everything() {
        for to in [
            ReviewState::NotStarted,
            ReviewState::InProgress,
            ReviewState::Submitted,
            ReviewState::Reviewed,
        ] {
            assert!(ReviewState::Reviewed.advance(to).is_err());
        }
    }

    #[test]
    fn going_backwards_is_rejected() {
        assert!(ReviewState::Submitted.advance(ReviewState::InProgress).is_err());
    }
}
