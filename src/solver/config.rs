use std::time::{Duration, Instant};

use log::warn;

use crate::expression::Rules;
use crate::solver::constants::{DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_DIGITS};
use crate::solver::errors::SearchAborted;

/// Whether to collect every solution or stop at the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    All,
    First,
}

/// Configuration for a plate search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub rules: Rules,
    /// Longer plates are refused instead of searched.
    pub max_digits: usize,
    /// Per-range bound on candidates before pruning.
    pub max_candidates: usize,
    pub deadline: Option<Duration>,
    pub mode: SearchMode,
}

impl SolverConfig {
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            max_digits: DEFAULT_MAX_DIGITS,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            deadline: None,
            mode: SearchMode::All,
        }
    }
}

/// Wall-clock budget for one search, shared by every stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    started: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    pub fn new(started: Instant, budget: Option<Duration>) -> Self {
        Self { started, budget }
    }

    /// Starts the clock now.
    pub fn start(budget: Option<Duration>) -> Self {
        Self::new(Instant::now(), budget)
    }

    /// A deadline that never passes.
    pub fn unbounded() -> Self {
        Self::start(None)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// # Errors
    ///
    /// Returns [`SearchAborted::DeadlineExceeded`] once the budget is spent.
    pub fn check(&self) -> Result<(), SearchAborted> {
        match self.budget {
            Some(budget) if self.elapsed() > budget => {
                warn!("Search exceeded its time budget of {:?}", budget);
                Err(SearchAborted::DeadlineExceeded { budget })
            }
            _ => Ok(()),
        }
    }
}
