use serde::{Deserialize, Serialize};

use crate::matching::normalize::normalize;
use crate::matching::tables::synonym_weight;

pub const EXACT_WEIGHT: f64 = 1.0;
pub const SUBSTRING_WEIGHT: f64 = 0.6;

/// Outcome of comparing two individual skills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairwiseMatch {
    pub matches: bool,
    pub weight: f64, // 0.0 – 1.0
}

impl PairwiseMatch {
    pub const NONE: PairwiseMatch = PairwiseMatch {
        matches: false,
        weight: 0.0,
    };

    fn hit(weight: f64) -> Self {
        Self {
            matches: true,
            weight,
        }
    }
}

/// Compares two raw skill strings.
///
/// Tiers, first applicable wins:
/// 1. equal after normalization → 1.0
/// 2. same synonym group → 0.9
/// 3. either contains the other → 0.6
/// 4. otherwise no match
#[allow(dead_code)]
pub fn match_skills(a: &str, b: &str) -> PairwiseMatch {
    match_normalized(&normalize(a), &normalize(b))
}

/// Same as [`match_skills`] for strings that are already normalized.
/// Empty strings never match, not even each other.
pub fn match_normalized(a: &str, b: &str) -> PairwiseMatch {
    if a.is_empty() || b.is_empty() {
        return PairwiseMatch::NONE;
    }
    if a == b {
        return PairwiseMatch::hit(EXACT_WEIGHT);
    }
    if let Some(weight) = synonym_weight(a, b) {
        return PairwiseMatch::hit(weight);
    }
    if a.contains(b) || b.contains(a) {
        return PairwiseMatch::hit(SUBSTRING_WEIGHT);
    }
    PairwiseMatch::NONE
}
