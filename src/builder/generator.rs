use rayon::prelude::*;

use crate::builder::arena::{Candidate, Node};
use crate::expression::{OperatorKind, Rules, apply_binary, apply_unary};

pub struct CandidateGenerator;

impl CandidateGenerator {
    /// Combine every left candidate with every right candidate under every
    /// enabled binary operator, dropping undefined results.
    ///
    /// Order is left index, then right index, then operator.
    pub fn binary_candidates(
        left: &[Candidate],
        right: &[Candidate],
        split: usize,
        rules: &Rules,
    ) -> Vec<Candidate> {
        left.par_iter()
            .enumerate()
            .flat_map_iter(|(li, l)| {
                right.iter().enumerate().flat_map(move |(ri, r)| {
                    rules.binary_operators().filter_map(move |op| {
                        apply_binary(op, l.value(), r.value(), rules)
                            .ok()
                            .map(|value| {
                                Candidate::new(
                                    Node::Binary {
                                        op,
                                        split,
                                        left: li,
                                        right: ri,
                                    },
                                    value,
                                )
                            })
                    })
                })
            })
            .collect()
    }

    /// Wrap each of `base` in every enabled unary operator, then put a
    /// factorial on each absolute value, dropping undefined results.
    ///
    /// Operand indices assume the result is appended right after `base` in
    /// the same table slot. A factorial is never negative, so `|n!|` is not
    /// generated.
    pub fn unary_candidates(base: &[Candidate], rules: &Rules) -> Vec<Candidate> {
        let mut wrapped: Vec<Candidate> = base
            .iter()
            .enumerate()
            .flat_map(|(operand, c)| {
                rules.unary_operators().filter_map(move |op| {
                    apply_unary(op, c.value(), rules)
                        .ok()
                        .map(|value| Candidate::new(Node::Unary { op, operand }, value))
                })
            })
            .collect();

        if rules.allows(OperatorKind::Factorial) {
            let offset = base.len();
            let abs_factorials: Vec<Candidate> = wrapped
                .iter()
                .enumerate()
                .filter(|(_, c)| {
                    matches!(
                        c.node(),
                        Node::Unary {
                            op: OperatorKind::AbsoluteValue,
                            ..
                        }
                    )
                })
                .filter_map(|(i, c)| {
                    apply_unary(OperatorKind::Factorial, c.value(), rules)
                        .ok()
                        .map(|value| {
                            Candidate::new(
                                Node::Unary {
                                    op: OperatorKind::Factorial,
                                    operand: offset + i,
                                },
                                value,
                            )
                        })
                })
                .collect();
            wrapped.extend(abs_factorials);
        }

        wrapped
    }
}
