//! The external reviewer interface.
//!
//! The reviewer is an opaque LLM-backed service: sanitized code in,
//! structured category judgments out. This crate treats it as a black box
//! with no retry or backoff policy of its own; retry policy belongs to the
//! caller, which alone knows acceptable latency and cost for re-invoking an
//! LLM call. Implementations should map timeouts and transport failures to
//! [`tp_common::Error::ExternalReviewer`] with an honest `retryable` flag.
//!
//! The signature only accepts sanitized documents. A caller cannot obtain
//! judgments for raw content without first running the gateway, which is the
//! structural sanitize-before-send guarantee.

use tp_common::Result;
use tp_redact::SanitizedDocument;
use tp_score::CategoryJudgment;

/// External LLM-based review service.
pub trait Reviewer {
    /// Evaluate a sanitized bundle and return one judgment per category.
    ///
    /// Expected to block for meaningful wall-clock time (network + LLM
    /// latency); callers should apply a timeout around the pipeline run and
    /// treat timeout as retryable.
    fn review(&self, bundle: &[SanitizedDocument]) -> Result<Vec<CategoryJudgment>>;
}

impl<T: Reviewer + ?Sized> Reviewer for &T {
    fn review(&self, bundle: &[SanitizedDocument]) -> Result<Vec<CategoryJudgment>> {
        (**self).review(bundle)
    }
}
