use std::time::Duration;

use thiserror::Error;

use crate::utils::PlateError;

/// Reasons a search stopped before it could give a definitive answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchAborted {
    #[error("Plate has {length} digits, more than the limit of {max}")]
    TooManyDigits { length: usize, max: usize },
    #[error(
        "Range {lo}..{hi} could produce up to {estimate} candidates, more than the limit of {limit}"
    )]
    CandidateLimit {
        lo: usize,
        hi: usize,
        estimate: usize,
        limit: usize,
    },
    #[error("Search exceeded its time budget of {budget:?}")]
    DeadlineExceeded { budget: Duration },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid plate: {0}")]
    InvalidInput(#[from] PlateError),
    #[error("Search aborted: {0}")]
    Aborted(#[from] SearchAborted),
}

impl SolverError {
    /// True when the search gave up; the plate may or may not have a solution.
    pub fn is_aborted(&self) -> bool {
        matches!(self, SolverError::Aborted(_))
    }
}
