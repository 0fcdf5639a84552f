use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};
use num_bigint::BigInt;
use rayon::prelude::*;

use crate::builder::{ExpressionBuilder, RangeTable};
use crate::solver::config::{Deadline, SearchMode, SolverConfig};
use crate::solver::errors::{SearchAborted, SolverError};
use crate::solver::solution::{Equation, Solution};
use crate::solver::splits::{SplitPoint, splits};
use crate::utils::DigitSequence;

/// Main solver for finding balanced equations on a plate
#[derive(Debug, Clone, Default)]
pub struct PlateSolver {
    config: SolverConfig,
}

impl PlateSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search according to the configured [`SearchMode`].
    ///
    /// # Errors
    ///
    /// See [`PlateSolver::solve`].
    pub fn run(&self, digits: &DigitSequence) -> Result<Vec<Solution>, SolverError> {
        match self.config.mode {
            SearchMode::All => self.solve(digits),
            SearchMode::First => Ok(self.solve_first(digits)?.into_iter().collect()),
        }
    }

    /// Every distinct solution, ordered by split position and then by the
    /// order the builder generated each side.
    ///
    /// An empty vector means the plate has no solution under the rules.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Aborted`] if the plate is longer than allowed, a
    /// range grows past the candidate limit, or the deadline passes.
    pub fn solve(&self, digits: &DigitSequence) -> Result<Vec<Solution>, SolverError> {
        let deadline = Deadline::start(self.config.deadline);
        let table = self.prepare(digits, deadline)?;
        let n = digits.len();

        let split_points: Vec<SplitPoint> = splits(n).collect();
        let per_split: Vec<Vec<Solution>> = split_points
            .into_par_iter()
            .map(|split| self.verify_split(&table, split, deadline, n))
            .collect::<Result<_, _>>()?;

        // Sides differ in digit count between splits, so renderings from
        // different splits never collide.
        let solutions: Vec<Solution> = per_split.into_iter().flatten().collect();
        info!(
            "Found {} solution(s) for plate {} in {:?}",
            solutions.len(),
            digits,
            deadline.elapsed()
        );
        Ok(solutions)
    }

    /// The first solution in [`PlateSolver::solve`] order, if any.
    ///
    /// # Errors
    ///
    /// See [`PlateSolver::solve`].
    pub fn solve_first(&self, digits: &DigitSequence) -> Result<Option<Solution>, SolverError> {
        let deadline = Deadline::start(self.config.deadline);
        let table = self.prepare(digits, deadline)?;
        let n = digits.len();

        for split in splits(n) {
            deadline.check()?;
            if let Some(solution) = self.first_in_split(&table, split, n) {
                info!("First solution for plate {}: {}", digits, solution);
                return Ok(Some(solution));
            }
        }

        info!("No solution for plate {}", digits);
        Ok(None)
    }

    fn prepare(&self, digits: &DigitSequence, deadline: Deadline) -> Result<RangeTable, SolverError> {
        let length = digits.len();
        if length > self.config.max_digits {
            warn!(
                "Refusing plate {} with {} digits (limit {})",
                digits, length, self.config.max_digits
            );
            return Err(SearchAborted::TooManyDigits {
                length,
                max: self.config.max_digits,
            }
            .into());
        }

        info!("Searching plate {} ({} digits)", digits, length);

        let builder = ExpressionBuilder::new(digits, &self.config.rules)
            .with_candidate_limit(self.config.max_candidates)
            .with_deadline(deadline);

        // The full plate is never one side of an equation.
        Ok(builder.build(length - 1)?)
    }

    /// Index right-side candidates by value so each left candidate finds its
    /// partners without a full scan.
    fn index_by_value(table: &RangeTable, lo: usize, hi: usize) -> HashMap<&BigInt, Vec<usize>> {
        let mut by_value: HashMap<&BigInt, Vec<usize>> = HashMap::new();
        for (index, candidate) in table.candidates(lo, hi).iter().enumerate() {
            by_value.entry(candidate.value()).or_default().push(index);
        }
        by_value
    }

    fn equation(
        table: &RangeTable,
        split: SplitPoint,
        n: usize,
        left: usize,
        right: usize,
    ) -> Option<Equation> {
        let s = split.position();
        Some(Equation {
            split,
            left: table.expression(0, s, left)?,
            right: table.expression(s, n, right)?,
        })
    }

    fn verify_split(
        &self,
        table: &RangeTable,
        split: SplitPoint,
        deadline: Deadline,
        n: usize,
    ) -> Result<Vec<Solution>, SearchAborted> {
        let s = split.position();
        let right_by_value = Self::index_by_value(table, s, n);

        let mut seen = HashSet::new();
        let mut solutions = Vec::new();

        for (li, left) in table.candidates(0, s).iter().enumerate() {
            let Some(partners) = right_by_value.get(left.value()) else {
                continue;
            };
            deadline.check()?;

            for &ri in partners {
                let Some(equation) = Self::equation(table, split, n, li, ri) else {
                    continue;
                };
                let solution = Solution::new(equation, left.value().clone());
                if seen.insert(solution.canonical().to_string()) {
                    solutions.push(solution);
                }
            }
        }

        debug!("Split {} yields {} solution(s)", s, solutions.len());
        Ok(solutions)
    }

    fn first_in_split(&self, table: &RangeTable, split: SplitPoint, n: usize) -> Option<Solution> {
        let s = split.position();
        let right_by_value = Self::index_by_value(table, s, n);

        table
            .candidates(0, s)
            .iter()
            .enumerate()
            .find_map(|(li, left)| {
                let ri = *right_by_value.get(left.value())?.first()?;
                let equation = Self::equation(table, split, n, li, ri)?;
                Some(Solution::new(equation, left.value().clone()))
            })
    }
}
