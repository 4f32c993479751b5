//! Score derivation and audit records.

use crate::aggregate::aggregate;
use crate::judgment::{judgments_to_map, CategoryJudgment};
use crate::policy::ScoringPolicy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tp_common::{BadgeTier, CategoryKind, Result, ScoreId, SubmissionId};

/// Append-only record of a post-hoc adjustment applied during derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleApplication {
    /// Stable rule identifier.
    pub rule: String,
    /// Category the adjustment touched.
    pub category: CategoryKind,
    /// What the rule did, e.g. `deducted 2.0 points`.
    pub action: String,
    /// Why it fired.
    pub reason: String,
}

/// Rule id for the automatic security deduction on secret findings.
pub const SECRET_PENALTY_RULE: &str = "secret-findings-security-penalty";

/// A completed review's score. Created once per review cycle; re-running
/// review for a submission creates a new `Score` superseding this one while
/// history is retained for audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub id: ScoreId,
    pub submission_id: SubmissionId,
    /// Per-category values after any rule applications.
    pub per_category: BTreeMap<CategoryKind, f64>,
    /// Pure function of `per_category`; never hand-edited.
    pub total_score: u32,
    /// Pure function of `total_score` under the recorded policy.
    pub badge: BadgeTier,
    /// Adjustments applied during derivation, in application order.
    pub applied_rules: Vec<RuleApplication>,
    /// Version of the policy that produced this score.
    pub policy_version: String,
    pub created_at: DateTime<Utc>,
}

impl Score {
    /// Derive a score from reviewer judgments under a policy.
    ///
    /// `finding_count` is the number of redaction findings sanitization
    /// produced for this submission's bundle. A non-zero count triggers the
    /// policy's automatic security-category penalty, recorded as a
    /// [`RuleApplication`] so the finding's effect on scoring is auditable.
    pub fn derive(
        submission_id: SubmissionId,
        judgments: &[CategoryJudgment],
        policy: &ScoringPolicy,
        finding_count: usize,
    ) -> Result<Score> {
        let mut per_category = judgments_to_map(judgments)?;
        let mut applied_rules = Vec::new();

        let penalty = policy.security_penalty(finding_count);
        if penalty > 0.0 {
            if let Some(value) = per_category.get_mut(&CategoryKind::Security) {
                let before = *value;
                *value = (before - penalty).max(0.0);
                applied_rules.push(RuleApplication {
                    rule: SECRET_PENALTY_RULE.to_string(),
                    category: CategoryKind::Security,
                    action: format!("deducted {:.1} points ({:.1} -> {:.1})", penalty, before, value),
                    reason: format!(
                        "{finding_count} redaction finding(s) in the submitted bundle"
                    ),
                });
                tracing::info!(
                    submission = %submission_id,
                    penalty,
                    finding_count,
                    "applied security penalty for redaction findings"
                );
            }
        }

        let total_score = aggregate(&per_category)?;
        let badge = policy.classify(total_score)?;

        Ok(Score {
            id: ScoreId::new(),
            submission_id,
            per_category,
            total_score,
            badge,
            applied_rules,
            policy_version: policy.schema_version.clone(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_judgments(value: f64) -> Vec<CategoryJudgment> {
        CategoryKind::all()
            .iter()
            .map(|k| CategoryJudgment::new(*k, value))
            .collect()
    }

    #[test]
    fn clean_submission_has_no_rule_applications() {
        let policy = ScoringPolicy::default();
        let score =
            Score::derive(SubmissionId::new("sub-1"), &ten_judgments(8.0), &policy, 0).unwrap();
        assert_eq!(score.total_score, 80);
        assert_eq!(score.badge, BadgeTier::Green);
        assert!(score.applied_rules.is_empty());
        assert_eq!(score.policy_version, policy.schema_version);
    }

    #[test]
    fn findings_trigger_recorded_security_penalty() {
        let policy = ScoringPolicy::default();
        let score =
            Score::derive(SubmissionId::new("sub-2"), &ten_judgments(8.0), &policy, 2).unwrap();

        // security: 8.0 - 2.0 = 6.0; total = 78
        assert_eq!(score.per_category[&CategoryKind::Security], 6.0);
        assert_eq!(score.total_score, 78);
        assert_eq!(score.applied_rules.len(), 1);
        let rule = &score.applied_rules[0];
        assert_eq!(rule.rule, SECRET_PENALTY_RULE);
        assert_eq!(rule.category, CategoryKind::Security);
        assert!(rule.reason.contains('2'));
    }

    #[test]
    fn penalty_never_pushes_security_below_zero() {
        let policy = ScoringPolicy::default();
        let mut judgments = ten_judgments(5.0);
        for judgment in &mut judgments {
            if judgment.category == CategoryKind::Security {
                judgment.value = 0.5;
            }
        }
        let score = Score::derive(SubmissionId::new("sub-3"), &judgments, &policy, 10).unwrap();
        assert_eq!(score.per_category[&CategoryKind::Security], 0.0);
    }

    #[test]
    fn rerun_mints_a_new_score_id() {
        let policy = ScoringPolicy::default();
        let judgments = ten_judgments(7.0);
        let a = Score::derive(SubmissionId::new("sub-4"), &judgments, &policy, 0).unwrap();
        let b = Score::derive(SubmissionId::new("sub-4"), &judgments, &policy, 0).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.total_score, b.total_score);
    }

    #[test]
    fn incomplete_judgments_are_rejected() {
        let policy = ScoringPolicy::default();
        let nine: Vec<CategoryJudgment> = ten_judgments(7.0).into_iter().skip(1).collect();
        let err = Score::derive(SubmissionId::new("sub-5"), &nine, &policy, 0).unwrap_err();
        assert!(matches!(err, tp_common::Error::IncompleteJudgment { .. }));
    }
}
