//! Badge classification.

use tp_common::{BadgeTier, Error, Result};

/// Default tier thresholds: GREEN at 75 and above, YELLOW at 50 and above.
pub const GREEN_MIN: u32 = 75;
pub const YELLOW_MIN: u32 = 50;

/// Map a total score to its trust tier.
///
/// Total function over [0, 100]. Out-of-range input returns
/// [`Error::ScoreRange`], which is unreachable given the aggregator's
/// contract and indicates a bug if it ever fires.
pub fn classify(total: u32) -> Result<BadgeTier> {
    classify_with(total, GREEN_MIN, YELLOW_MIN)
}

/// Classify against explicit thresholds (used by versioned policies).
pub fn classify_with(total: u32, green_min: u32, yellow_min: u32) -> Result<BadgeTier> {
    if total > 100 {
        return Err(Error::ScoreRange { value: total });
    }
    if total >= green_min {
        Ok(BadgeTier::Green)
    } else if total >= yellow_min {
        Ok(BadgeTier::Yellow)
    } else {
        Ok(BadgeTier::Red)
    }
}
