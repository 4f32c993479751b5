//! Scoring policy configuration.
//!
//! Categories, weights, and thresholds used to be implicit policy scattered
//! across the data model; here they are a single versioned artifact. Every
//! [`Score`](crate::Score) records the policy version that produced it, so
//! historical rows can be audited or re-scored without silently
//! reinterpreting old scores under new thresholds.

use crate::badge::{GREEN_MIN, YELLOW_MIN};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tp_common::{BadgeTier, Result};

/// Schema version for the policy file.
pub const POLICY_SCHEMA_VERSION: &str = "1.0.0";

/// The versioned set of thresholds and penalty knobs governing score and
/// badge derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Schema version recorded on every score this policy produces.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Minimum total score for a GREEN badge.
    #[serde(default = "default_green_min")]
    pub green_min: u32,

    /// Minimum total score for a YELLOW badge.
    #[serde(default = "default_yellow_min")]
    pub yellow_min: u32,

    /// Points deducted from the security category per redaction finding.
    #[serde(default = "default_penalty_per_finding")]
    pub secret_penalty_per_finding: f64,

    /// Upper bound on the total security deduction for one submission.
    #[serde(default = "default_penalty_cap")]
    pub secret_penalty_cap: f64,
}

fn default_schema_version() -> String {
    POLICY_SCHEMA_VERSION.to_string()
}

fn default_green_min() -> u32 {
    GREEN_MIN
}

fn default_yellow_min() -> u32 {
    YELLOW_MIN
}

fn default_penalty_per_finding() -> f64 {
    1.0
}

fn default_penalty_cap() -> f64 {
    3.0
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            green_min: default_green_min(),
            yellow_min: default_yellow_min(),
            secret_penalty_per_finding: default_penalty_per_finding(),
            secret_penalty_cap: default_penalty_cap(),
        }
    }
}

impl ScoringPolicy {
    /// Load a policy from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let policy: ScoringPolicy = serde_json::from_str(&raw)?;
        Ok(policy)
    }

    /// Save the policy to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Classify a total score under this policy's thresholds.
    pub fn classify(&self, total: u32) -> Result<BadgeTier> {
        crate::badge::classify_with(total, self.green_min, self.yellow_min)
    }

    /// Security deduction for a submission with `finding_count` redaction
    /// findings, capped.
    pub fn security_penalty(&self, finding_count: usize) -> f64 {
        (self.secret_penalty_per_finding * finding_count as f64).min(self.secret_penalty_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_fixed_thresholds() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.green_min, 75);
        assert_eq!(policy.yellow_min, 50);
        assert_eq!(policy.schema_version, POLICY_SCHEMA_VERSION);
    }

    #[test]
    fn penalty_is_capped() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.security_penalty(0), 0.0);
        assert_eq!(policy.security_penalty(2), 2.0);
        assert_eq!(policy.security_penalty(50), 3.0);
    }

    #[test]
    fn roundtrips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");
        let mut policy = ScoringPolicy::default();
        policy.green_min = 80;
        policy.save(&path).unwrap();

        let loaded = ScoringPolicy::load(&path).unwrap();
        assert_eq!(loaded.green_min, 80);
        assert_eq!(loaded.yellow_min, 50);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let policy: ScoringPolicy = serde_json::from_str(r#"{"green_min": 90}"#).unwrap();
        assert_eq!(policy.green_min, 90);
        assert_eq!(policy.yellow_min, 50);
        assert_eq!(policy.secret_penalty_cap, 3.0);
    }
}
