// Skill matching and recommendation engine.
// Pure and stateless: normalizer → pairwise matcher (synonym / related tables)
// → set match calculator → ranker. Only `handlers` touches I/O.

pub mod badge;
pub mod calculator;
pub mod handlers;
pub mod normalize;
pub mod pairwise;
pub mod ranker;
pub mod tables;

use thiserror::Error;

/// Caller contract violations. Degenerate inputs (empty skill sets, empty
/// collections) are not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
