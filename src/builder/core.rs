use log::{debug, info, warn};
use rayon::prelude::*;

use crate::builder::arena::{Candidate, Node, RangeTable};
use crate::builder::generator::CandidateGenerator;
use crate::expression::{OperatorKind, Rules};
use crate::solver::{Deadline, SearchAborted};
use crate::solver::constants::DEFAULT_MAX_CANDIDATES;
use crate::utils::DigitSequence;

/// Enumerates every expression tree over every contiguous range of a plate.
///
/// Ranges are filled bottom-up by length; all ranges of one length are built
/// in parallel and each table slot is written exactly once.
pub struct ExpressionBuilder<'a> {
    digits: &'a DigitSequence,
    rules: &'a Rules,
    max_candidates: usize,
    deadline: Deadline,
}

impl<'a> ExpressionBuilder<'a> {
    pub fn new(digits: &'a DigitSequence, rules: &'a Rules) -> Self {
        Self {
            digits,
            rules,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            deadline: Deadline::unbounded(),
        }
    }

    pub fn with_candidate_limit(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    /// Build every range of length `1..=max_len`.
    ///
    /// # Errors
    ///
    /// Returns an error if a range would exceed the candidate limit or the
    /// time budget runs out.
    pub fn build(&self, max_len: usize) -> Result<RangeTable, SearchAborted> {
        let n = self.digits.len();
        let max_len = max_len.min(n);
        let mut table = RangeTable::new(n);

        info!(
            "Building expressions for ranges up to length {} over {} digits",
            max_len, n
        );

        for len in 1..=max_len {
            self.deadline.check()?;

            let built: Vec<Vec<Candidate>> = (0..=n - len)
                .into_par_iter()
                .map(|lo| self.build_range(&table, lo, lo + len))
                .collect::<Result<_, _>>()?;

            for (lo, candidates) in built.into_iter().enumerate() {
                debug!(
                    "Range {}..{} holds {} candidates",
                    lo,
                    lo + len,
                    candidates.len()
                );
                table.insert(lo, lo + len, candidates);
            }
        }

        info!("Built {} candidates in total", table.total_candidates());
        Ok(table)
    }

    fn build_range(
        &self,
        table: &RangeTable,
        lo: usize,
        hi: usize,
    ) -> Result<Vec<Candidate>, SearchAborted> {
        let mut candidates = Vec::new();

        if hi - lo == 1 {
            if let Some(digit) = self.digits.get(lo) {
                candidates.push(Candidate::new(Node::Leaf { digit }, digit.into()));
            }
        } else {
            let estimate = self.estimate(table, lo, hi);
            if estimate > self.max_candidates {
                warn!(
                    "Range {}..{} could produce {} candidates, limit is {}",
                    lo, hi, estimate, self.max_candidates
                );
                return Err(SearchAborted::CandidateLimit {
                    lo,
                    hi,
                    estimate,
                    limit: self.max_candidates,
                });
            }

            for split in lo + 1..hi {
                self.deadline.check()?;
                candidates.extend(CandidateGenerator::binary_candidates(
                    table.candidates(lo, split),
                    table.candidates(split, hi),
                    split,
                    self.rules,
                ));
            }
        }

        let wrapped = CandidateGenerator::unary_candidates(&candidates, self.rules);
        candidates.extend(wrapped);
        Ok(candidates)
    }

    /// Upper bound on the candidates `[lo, hi)` can produce before pruning.
    fn estimate(&self, table: &RangeTable, lo: usize, hi: usize) -> usize {
        let binary_ops = self.rules.binary_operators().count();
        let abs_factorial = usize::from(
            self.rules.allows(OperatorKind::AbsoluteValue)
                && self.rules.allows(OperatorKind::Factorial),
        );
        let fan_out = 1 + self.rules.unary_operators().count() + abs_factorial;

        (lo + 1..hi)
            .map(|split| {
                table
                    .candidates(lo, split)
                    .len()
                    .saturating_mul(table.candidates(split, hi).len())
            })
            .fold(0usize, usize::saturating_add)
            .saturating_mul(binary_ops)
            .saturating_mul(fan_out)
    }
}
