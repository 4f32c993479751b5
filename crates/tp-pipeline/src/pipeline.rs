//! The pipeline orchestrator.

use crate::lifecycle::ReviewState;
use crate::reviewer::Reviewer;
use crate::store::ScoreStore;
use tp_common::{Result, SubmissionId};
use tp_redact::{SanitizationGateway, SourceDocument};
use tp_score::{Score, ScoringPolicy};

/// One submission's path from raw bundle to persisted score.
///
/// Stateless between runs; every run is independent and may execute in
/// parallel with any other. Within a run, sanitization of the whole bundle
/// completes before the reviewer is called (the reviewer only accepts
/// sanitized documents), and the store insert happens only after
/// classification succeeds, so a cancelled or failed run persists nothing.
pub struct TrustPipeline<R, S> {
    gateway: SanitizationGateway,
    policy: ScoringPolicy,
    reviewer: R,
    store: S,
}

impl<R: Reviewer, S: ScoreStore> TrustPipeline<R, S> {
    pub fn new(policy: ScoringPolicy, reviewer: R, store: S) -> Self {
        Self {
            gateway: SanitizationGateway::new(),
            policy,
            reviewer,
            store,
        }
    }

    /// Run the full pipeline for a submitted bundle.
    ///
    /// Errors surface unchanged; nothing is retried here. Sanitization output
    /// is deterministic, so a caller retrying a reviewer failure may reuse it.
    pub fn run(&self, submission_id: SubmissionId, bundle: Vec<SourceDocument>) -> Result<Score> {
        let state = ReviewState::Submitted;

        let report = self.gateway.sanitize_report(bundle)?;
        tracing::debug!(
            submission = %submission_id,
            documents = report.documents.len(),
            findings = report.total_findings,
            coverage = report.coverage(),
            "bundle sanitized, calling reviewer"
        );

        let judgments = self.reviewer.review(&report.documents)?;
        let score = Score::derive(
            submission_id.clone(),
            &judgments,
            &self.policy,
            report.total_findings,
        )?;

        self.store.insert(&score)?;
        let state = state.advance(ReviewState::Reviewed)?;
        tracing::info!(
            submission = %submission_id,
            score = score.total_score,
            badge = %score.badge,
            state = %state,
            "review complete"
        );
        Ok(score)
    }

    /// Administrative trigger: re-run the full pipeline for a submission.
    ///
    /// Produces a new terminal score; prior scores remain in history.
    pub fn rerun(&self, submission_id: SubmissionId, bundle: Vec<SourceDocument>) -> Result<Score> {
        tracing::info!(submission = %submission_id, "administrative re-run requested");
        self.run(submission_id, bundle)
    }

    /// Most recent persisted score for a submission.
    pub fn latest(&self, submission_id: &SubmissionId) -> Result<Option<Score>> {
        self.store.latest(submission_id)
    }

    /// Full score history for a submission, newest first.
    pub fn history(&self, submission_id: &SubmissionId) -> Result<Vec<Score>> {
        self.store.history(submission_id)
    }
}
