//! Score aggregation.
//!
//! Fixed, documented derivation: the total score is the equal-weighted mean
//! of the ten category values rescaled to a 0–100 scale and rounded. Partial
//! judgment sets are rejected outright so badges stay comparable across
//! submissions.

use std::collections::BTreeMap;
use tp_common::{CategoryKind, Error, Result, CATEGORY_COUNT};

/// Maximum value of a single category judgment.
pub const CATEGORY_MAX: f64 = 10.0;

/// Combine per-category judgments into a total score on [0, 100].
///
/// `total = round(sum / (10 * 10) * 100)`. Deterministic and independent of
/// map iteration order: the sum walks [`CategoryKind::all`], never the map.
///
/// # Errors
///
/// [`Error::IncompleteJudgment`] when any of the ten categories is missing;
/// [`Error::InvalidInput`] when a value is outside the 0–10 scale.
pub fn aggregate(per_category: &BTreeMap<CategoryKind, f64>) -> Result<u32> {
    let missing: Vec<CategoryKind> = CategoryKind::all()
        .iter()
        .filter(|kind| !per_category.contains_key(kind))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(Error::IncompleteJudgment { missing });
    }

    let mut sum = 0.0;
    for kind in CategoryKind::all() {
        let value = per_category[kind];
        if !value.is_finite() || !(0.0..=CATEGORY_MAX).contains(&value) {
            return Err(Error::invalid_input(format!(
                "value for {} out of range: {}",
                kind, value
            )));
        }
        sum += value;
    }

    let total = (sum / (CATEGORY_MAX * CATEGORY_COUNT as f64) * 100.0).round();
    Ok(total as u32)
}
