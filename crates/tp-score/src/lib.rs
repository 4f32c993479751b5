//! Scoring for reviewed submissions.
//!
//! This crate turns the external reviewer's per-category judgments into a
//! stable, auditable trust score and badge:
//!
//! - [`aggregate`] — equal-weighted mean of the ten fixed categories,
//!   rescaled to 0–100. Deterministic and iteration-order independent.
//! - [`classify`] — maps a total score onto the ordered badge tiers.
//! - [`ScoringPolicy`] — the versioned configuration artifact (thresholds,
//!   penalty knobs) recorded on every score it produces, so historical rows
//!   are never silently reinterpreted under new policy.
//! - [`Score::derive`] — full derivation including the automatic security
//!   penalty for submissions whose sanitization produced findings, recorded
//!   as append-only [`RuleApplication`] entries.

pub mod aggregate;
pub mod badge;
pub mod judgment;
pub mod policy;
pub mod score;

pub use aggregate::aggregate;
pub use badge::classify;
pub use judgment::{judgments_to_map, CategoryJudgment, EvidenceItem};
pub use policy::{ScoringPolicy, POLICY_SCHEMA_VERSION};
pub use score::{RuleApplication, Score};
