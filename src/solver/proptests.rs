//! Property-based checks over random plates.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use proptest::prelude::*;

use crate::expression::{DEFAULT_MAX_FACTORIAL_ARG, Expression, OperatorKind, Rules};
use crate::solver::PlateSolver;
use crate::utils::DigitSequence;

// Short plates keep each case to a few milliseconds
fn plate() -> impl Strategy<Value = String> {
    "[0-9]{2,4}"
}

fn parse(digits: &str) -> DigitSequence {
    DigitSequence::parse(digits).unwrap_or_else(|e| panic!("strategy produced {}: {}", digits, e))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn sides_partition_the_plate(digits in plate()) {
        let seq = parse(&digits);
        let solutions = PlateSolver::default().solve(&seq);
        prop_assert!(solutions.is_ok());
        for solution in solutions.unwrap_or_default() {
            let mut positions: Vec<usize> = solution.left().leaves().iter().map(|(p, _)| *p).collect();
            prop_assert_eq!(positions.last().map(|p| p + 1), Some(solution.split()));
            positions.extend(solution.right().leaves().iter().map(|(p, _)| *p));
            prop_assert_eq!(positions, (0..seq.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn every_solution_balances(digits in plate()) {
        let rules = Rules::default();
        for solution in PlateSolver::default().solve(&parse(&digits)).unwrap_or_default() {
            let left = solution.left().evaluate_with(&rules).ok();
            let right = solution.right().evaluate_with(&rules).ok();
            prop_assert_eq!(left.as_ref(), Some(solution.value()));
            prop_assert_eq!(right.as_ref(), Some(solution.value()));
        }
    }

    #[test]
    fn operands_stay_in_domain(digits in plate()) {
        let rules = Rules::default();
        for solution in PlateSolver::default().solve(&parse(&digits)).unwrap_or_default() {
            let mut nodes = solution.left().nodes();
            nodes.extend(solution.right().nodes());
            for node in nodes {
                match node {
                    Expression::Unary { op: OperatorKind::Factorial, operand } => {
                        let value = operand.evaluate_with(&rules).ok().and_then(|v| v.to_u32());
                        prop_assert!(value.is_some_and(|v| v <= DEFAULT_MAX_FACTORIAL_ARG));
                    }
                    Expression::Binary { op: OperatorKind::Power, right, .. } => {
                        let exponent = right.evaluate_with(&rules);
                        prop_assert!(exponent.is_ok_and(|e| !e.is_negative()));
                    }
                    Expression::Binary { op, .. } | Expression::Unary { op, .. } => {
                        prop_assert!(rules.allows(*op));
                    }
                    Expression::Digit { .. } => {}
                }
            }
        }
    }

    #[test]
    fn solve_is_idempotent(digits in plate()) {
        let solver = PlateSolver::default();
        let seq = parse(&digits);
        prop_assert_eq!(solver.solve(&seq), solver.solve(&seq));
    }

    #[test]
    fn evaluation_is_deterministic(a in 0u8..10, b in 0u8..10, c in 0u8..10) {
        let expr = Expression::unary(
            OperatorKind::AbsoluteValue,
            Expression::binary(
                OperatorKind::Subtract,
                Expression::digit(0, a),
                Expression::binary(OperatorKind::Power, Expression::digit(1, b), Expression::digit(2, c)),
            ),
        );
        prop_assert_eq!(expr.evaluate(), expr.evaluate());
        let expected = (BigInt::from(a) - BigInt::from(b).pow(u32::from(c.min(6)))).abs();
        if c <= 6 {
            prop_assert_eq!(expr.evaluate(), Ok(expected));
        } else {
            prop_assert!(expr.evaluate().is_err());
        }
    }
}
