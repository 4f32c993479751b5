//! Reviewer judgments and their validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tp_common::{CategoryKind, Error, Result};

/// A piece of evidence the reviewer attached to a judgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Short description of what the reviewer observed.
    pub summary: String,
    /// Document path the observation refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One per-category numeric judgment from the external reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryJudgment {
    pub category: CategoryKind,
    /// Judgment value on the reviewer's 0–10 scale.
    pub value: f64,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
}

impl CategoryJudgment {
    pub fn new(category: CategoryKind, value: f64) -> Self {
        Self {
            category,
            value,
            evidence: Vec::new(),
        }
    }

    /// Check the value is a finite number on the 0–10 scale.
    pub fn validate(&self) -> Result<()> {
        if !self.value.is_finite() || !(0.0..=10.0).contains(&self.value) {
            return Err(Error::invalid_input(format!(
                "judgment for {} out of range: {}",
                self.category, self.value
            )));
        }
        Ok(())
    }
}

/// Validate a judgment list and index it by category.
///
/// Rejects out-of-range values and duplicate categories. Does not require
/// completeness; [`aggregate`](crate::aggregate) enforces that all ten
/// categories are present.
pub fn judgments_to_map(judgments: &[CategoryJudgment]) -> Result<BTreeMap<CategoryKind, f64>> {
    let mut map = BTreeMap::new();
    for judgment in judgments {
        judgment.validate()?;
        if map.insert(judgment.category, judgment.value).is_some() {
            return Err(Error::invalid_input(format!(
                "duplicate judgment for category {}",
                judgment.category
            )));
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_values() {
        assert!(CategoryJudgment::new(CategoryKind::Security, 10.1).validate().is_err());
        assert!(CategoryJudgment::new(CategoryKind::Security, -0.1).validate().is_err());
        assert!(CategoryJudgment::new(CategoryKind::Security, f64::NAN).validate().is_err());
        assert!(CategoryJudgment::new(CategoryKind::Security, 0.0).validate().is_ok());
        assert!(CategoryJudgment::new(CategoryKind::Security, 10.0).validate().is_ok());
    }

    #[test]
    fn rejects_duplicate_categories() {
        let judgments = vec![
            CategoryJudgment::new(CategoryKind::CodeQuality, 5.0),
            CategoryJudgment::new(CategoryKind::CodeQuality, 7.0),
        ];
        assert!(judgments_to_map(&judgments).is_err());
    }

    #[test]
    fn judgment_json_shape() {
        let judgment = CategoryJudgment {
            category: CategoryKind::BugRisk,
            value: 6.0,
            evidence: vec![EvidenceItem {
                summary: "unchecked index in parser".to_string(),
                path: Some("src/parse.rs".to_string()),
            }],
        };
        let json = serde_json::to_value(&judgment).unwrap();
        assert_eq!(json["category"], "bug_risk");
        assert_eq!(json["value"], 6.0);
        assert_eq!(json["evidence"][0]["path"], "src/parse.rs");
    }
}
