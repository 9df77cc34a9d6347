//! Recommendation ranking: applies the match calculator across a collection.
//!
//! Both directions share one pipeline:
//! 1. empty driving skill set → empty list ("cannot recommend", not an error)
//! 2. score every subject
//! 3. keep `percentage >= min_percentage`
//! 4. order by percentage desc, weighted score desc, input position asc
//! 5. truncate to `limit` if one was given

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::badge::{badge_for, Badge};
use crate::matching::calculator::{calculate_match, MatchReport};
use crate::matching::MatchError;

/// Anything that carries a skill list: a candidate's skills or a target's
/// required skills.
pub trait SkillSource {
    fn skills(&self) -> &[String];
}

/// Caller-supplied subject for the stateless ranking endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl SkillSource for SkillProfile {
    fn skills(&self) -> &[String] {
        &self.skills
    }
}

/// One element of a ranked recommendation list.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry<T> {
    pub subject: T,
    pub report: MatchReport,
    pub badge: Badge,
}

/// Validated ranking options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub min_percentage: u32,
    pub limit: Option<usize>,
}

impl RankOptions {
    /// Validates raw caller input: `min_percentage` must be within 0–100 and
    /// `limit`, when present, must not be negative.
    pub fn try_new(min_percentage: i64, limit: Option<i64>) -> Result<Self, MatchError> {
        if !(0..=100).contains(&min_percentage) {
            return Err(MatchError::InvalidArgument(format!(
                "min_percentage must be between 0 and 100, got {min_percentage}"
            )));
        }
        let limit = match limit {
            Some(l) if l < 0 => {
                return Err(MatchError::InvalidArgument(format!(
                    "limit must not be negative, got {l}"
                )))
            }
            Some(l) => Some(usize::try_from(l).map_err(|_| {
                MatchError::InvalidArgument(format!("limit {l} is out of range"))
            })?),
            None => None,
        };
        Ok(Self {
            min_percentage: min_percentage as u32,
            limit,
        })
    }
}

/// Ranks targets (projects) by how well `candidate_skills` cover their
/// required skills.
pub fn recommend_targets_for_candidate<T, I>(
    candidate_skills: &[String],
    targets: I,
    options: &RankOptions,
) -> Vec<RankedEntry<T>>
where
    T: SkillSource,
    I: IntoIterator<Item = T>,
{
    if candidate_skills.is_empty() {
        return vec![];
    }
    rank(targets, options, |target| {
        calculate_match(candidate_skills, target.skills())
    })
}

/// Ranks candidates (people) by how well their skills cover
/// `required_skills`.
pub fn recommend_candidates_for_target<T, I>(
    required_skills: &[String],
    candidates: I,
    options: &RankOptions,
) -> Vec<RankedEntry<T>>
where
    T: SkillSource,
    I: IntoIterator<Item = T>,
{
    if required_skills.is_empty() {
        return vec![];
    }
    rank(candidates, options, |candidate| {
        calculate_match(candidate.skills(), required_skills)
    })
}

fn rank<T, I, F>(subjects: I, options: &RankOptions, score: F) -> Vec<RankedEntry<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> MatchReport,
{
    let mut scored = 0_usize;
    let mut retained: Vec<(usize, RankedEntry<T>)> = subjects
        .into_iter()
        .enumerate()
        .filter_map(|(index, subject)| {
            scored += 1;
            let report = score(&subject);
            if report.percentage < options.min_percentage {
                return None;
            }
            let badge = badge_for(report.percentage);
            Some((
                index,
                RankedEntry {
                    subject,
                    report,
                    badge,
                },
            ))
        })
        .collect();

    retained.sort_by(|(ia, a), (ib, b)| {
        b.report
            .percentage
            .cmp(&a.report.percentage)
            .then_with(|| {
                b.report
                    .weighted_score
                    .partial_cmp(&a.report.weighted_score)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| ia.cmp(ib))
    });

    debug!(
        scored,
        retained = retained.len(),
        min_percentage = options.min_percentage,
        "ranked recommendations"
    );

    let entries = retained.into_iter().map(|(_, entry)| entry);
    match options.limit {
        Some(limit) => entries.take(limit).collect(),
        None => entries.collect(),
    }
}
