//! Skill-set match calculation: one candidate skill set scored against one
//! set of required skills.
//!
//! Required skills drive the iteration, so the denominator is always
//! `required.len()` and every requirement is judged on its own:
//! - best pairwise match (highest weight, first found on ties) → its weight
//! - otherwise a related candidate skill → 0.3
//! - otherwise the requirement is missing → 0.0
//!
//! `percentage = round(min(weighted / required, 1.0) × 100)`.

use serde::{Deserialize, Serialize};

use crate::matching::normalize::{normalize, normalize_all};
use crate::matching::pairwise::{match_normalized, PairwiseMatch};
use crate::matching::tables::are_related;

/// Partial credit for a requirement covered only by an adjacent skill.
pub const RELATED_WEIGHT: f64 = 0.3;

/// A requirement satisfied by a candidate skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchDetail {
    pub required: String,
    pub matched_against: Option<String>,
    pub weight: f64,
}

/// A requirement not matched, but covered by a related candidate skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedSkill {
    pub required: String,
    pub related: String,
}

/// Explainable result of scoring one skill set against one requirement set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub percentage: u32, // 0 – 100
    pub matched_skills: Vec<SkillMatchDetail>,
    pub missing_skills: Vec<String>,
    pub related_skills: Vec<RelatedSkill>,
    pub total_required: usize,
    pub total_matched: usize,
    pub weighted_score: f64, // rounded to 2 decimals
}

impl MatchReport {
    fn empty() -> Self {
        Self {
            percentage: 0,
            matched_skills: vec![],
            missing_skills: vec![],
            related_skills: vec![],
            total_required: 0,
            total_matched: 0,
            weighted_score: 0.0,
        }
    }
}

/// Scores `candidate` skills against `required` skills. Total over all
/// inputs: empty sets on either side yield a zero report.
pub fn calculate_match<C, R>(candidate: &[C], required: &[R]) -> MatchReport
where
    C: AsRef<str>,
    R: AsRef<str>,
{
    if required.is_empty() {
        return MatchReport::empty();
    }

    if candidate.is_empty() {
        return MatchReport {
            missing_skills: required.iter().map(|r| r.as_ref().to_string()).collect(),
            total_required: required.len(),
            ..MatchReport::empty()
        };
    }

    let normalized_candidate = normalize_all(candidate);

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    let mut related_skills = Vec::new();
    let mut weighted = 0.0_f64;

    for required_skill in required {
        let required_skill = required_skill.as_ref();
        let normalized_required = normalize(required_skill);

        if let Some((index, best)) = best_match(&normalized_required, &normalized_candidate) {
            weighted += best.weight;
            matched_skills.push(SkillMatchDetail {
                required: required_skill.to_string(),
                matched_against: Some(candidate[index].as_ref().to_string()),
                weight: best.weight,
            });
            continue;
        }

        let related = normalized_candidate
            .iter()
            .position(|c| are_related(&normalized_required, c));

        match related {
            Some(index) => {
                weighted += RELATED_WEIGHT;
                related_skills.push(RelatedSkill {
                    required: required_skill.to_string(),
                    related: candidate[index].as_ref().to_string(),
                });
            }
            None => missing_skills.push(required_skill.to_string()),
        }
    }

    let total_required = required.len();
    let ratio = (weighted / total_required as f64).min(1.0);

    MatchReport {
        percentage: (ratio * 100.0).round() as u32,
        total_matched: matched_skills.len(),
        matched_skills,
        missing_skills,
        related_skills,
        total_required,
        weighted_score: (weighted * 100.0).round() / 100.0,
    }
}

/// Highest-weight matching candidate skill for one normalized requirement.
/// Only a strictly greater weight replaces the current best, so the first
/// candidate wins ties.
fn best_match(required: &str, candidate: &[String]) -> Option<(usize, PairwiseMatch)> {
    candidate
        .iter()
        .enumerate()
        .map(|(i, c)| (i, match_normalized(required, c)))
        .filter(|(_, m)| m.matches)
        .fold(None, |best, (i, m)| match best {
            Some((_, b)) if b.weight >= m.weight => best,
            _ => Some((i, m)),
        })
}
