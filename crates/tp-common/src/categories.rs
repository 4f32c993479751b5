//! Review category taxonomy and badge tiers.
//!
//! The reviewer judges every submission against a fixed set of ten
//! categories. The set is closed: aggregation rejects judgments that do not
//! cover all ten, so badges stay comparable across submissions.
//!
//! # Versioning
//!
//! The taxonomy is versioned (see [`CATEGORIES_SCHEMA_VERSION`]) so that
//! historical scores can record which taxonomy produced them.

use serde::{Deserialize, Serialize};

/// Schema version for the category taxonomy.
pub const CATEGORIES_SCHEMA_VERSION: &str = "1.0.0";

/// Number of review categories. Aggregation requires all of them.
pub const CATEGORY_COUNT: usize = 10;

/// Review categories judged by the external reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Readability, structure, and consistency of the submitted code.
    CodeQuality,
    /// Soundness of the approach taken to the stated problem.
    ProblemSolving,
    /// Likelihood of latent defects (inverted: higher is safer).
    BugRisk,
    /// CI/CD, packaging, and operational hygiene.
    DevopsExecution,
    /// Algorithmic and resource efficiency.
    Optimization,
    /// Comments, READMEs, and API documentation.
    Documentation,
    /// Commit granularity, messages, and branch discipline.
    GitMaturity,
    /// Review responsiveness and teamwork signals.
    Collaboration,
    /// Pace of delivery relative to scope.
    DeliverySpeed,
    /// Handling of credentials, input validation, dependency risk.
    Security,
}

impl CategoryKind {
    /// All categories in canonical order. Aggregation iterates this slice,
    /// never a map, so results are independent of map iteration order.
    pub fn all() -> &'static [CategoryKind] {
        &[
            CategoryKind::CodeQuality,
            CategoryKind::ProblemSolving,
            CategoryKind::BugRisk,
            CategoryKind::DevopsExecution,
            CategoryKind::Optimization,
            CategoryKind::Documentation,
            CategoryKind::GitMaturity,
            CategoryKind::Collaboration,
            CategoryKind::DeliverySpeed,
            CategoryKind::Security,
        ]
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            CategoryKind::CodeQuality => "code_quality",
            CategoryKind::ProblemSolving => "problem_solving",
            CategoryKind::BugRisk => "bug_risk",
            CategoryKind::DevopsExecution => "devops_execution",
            CategoryKind::Optimization => "optimization",
            CategoryKind::Documentation => "documentation",
            CategoryKind::GitMaturity => "git_maturity",
            CategoryKind::Collaboration => "collaboration",
            CategoryKind::DeliverySpeed => "delivery_speed",
            CategoryKind::Security => "security",
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trust tier derived from the total score.
///
/// Ordered: `Red < Yellow < Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BadgeTier {
    Red,
    Yellow,
    Green,
}

impl BadgeTier {
    pub fn name(&self) -> &'static str {
        match self {
            BadgeTier::Red => "RED",
            BadgeTier::Yellow => "YELLOW",
            BadgeTier::Green => "GREEN",
        }
    }
}

impl std::fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_category_once() {
        let all = CategoryKind::all();
        assert_eq!(all.len(), CATEGORY_COUNT);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn categories_serialize_snake_case() {
        let json = serde_json::to_string(&CategoryKind::CodeQuality).unwrap();
        assert_eq!(json, "\"code_quality\"");
        let back: CategoryKind = serde_json::from_str("\"delivery_speed\"").unwrap();
        assert_eq!(back, CategoryKind::DeliverySpeed);
    }

    #[test]
    fn badge_tiers_are_ordered() {
        assert!(BadgeTier::Red < BadgeTier::Yellow);
        assert!(BadgeTier::Yellow < BadgeTier::Green);
    }

    #[test]
    fn badge_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&BadgeTier::Green).unwrap(), "\"GREEN\"");
    }
}
