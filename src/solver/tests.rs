use std::collections::HashSet;
use std::time::{Duration, Instant};

use num_bigint::BigInt;

use crate::expression::{OperatorKind, Rules};
use crate::solver::{
    Deadline, PlateSolver, SearchAborted, SearchMode, Solution, SolverConfig, SolverError, splits,
};
use crate::utils::DigitSequence;

fn plate(digits: &str) -> DigitSequence {
    DigitSequence::parse(digits).unwrap_or_else(|e| panic!("bad plate {}: {}", digits, e))
}

fn solve(digits: &str) -> Vec<Solution> {
    PlateSolver::default()
        .solve(&plate(digits))
        .unwrap_or_else(|e| panic!("search for {} failed: {}", digits, e))
}

fn canonicals(solutions: &[Solution]) -> Vec<&str> {
    solutions.iter().map(Solution::canonical).collect()
}

#[test]
fn test_splits_cover_every_position() {
    let positions: Vec<usize> = splits(4).map(|s| s.position()).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(splits(4).len(), 3);
    assert_eq!(splits(1).count(), 0);

    if let Some(first) = splits(5).next() {
        assert_eq!(first.left(), 0..1);
        assert_eq!(first.right(), 1..5);
    }
}

#[test]
fn test_splits_restart() {
    let it = splits(3);
    let a: Vec<_> = it.clone().collect();
    let b: Vec<_> = it.collect();
    assert_eq!(a, b);
}

#[test]
fn test_4312_has_simple_chain() {
    let solutions = solve("4312");
    let found = solutions
        .iter()
        .find(|s| s.canonical() == "4 - 3 + 1 = 2");
    assert!(found.is_some(), "missing 4 - 3 + 1 = 2 in {:?}", canonicals(&solutions));
    if let Some(solution) = found {
        assert_eq!(solution.split(), 3);
        assert_eq!(solution.value(), &BigInt::from(2));
    }
}

#[test]
fn test_146_uses_factorial_of_absolute_value() {
    let solutions = solve("146");
    let found = solutions.iter().find(|s| s.canonical() == "|1 - 4|! = 6");
    assert!(found.is_some(), "missing |1 - 4|! = 6 in {:?}", canonicals(&solutions));
    if let Some(solution) = found {
        assert_eq!(solution.split(), 2);
        assert_eq!(solution.value(), &BigInt::from(6));
    }
}

#[test]
fn test_5234_rejects_unequal_pair() {
    let solutions = solve("5234");
    assert!(!canonicals(&solutions).contains(&"(5 - 2)! = 3 + 4"));
    for solution in &solutions {
        assert_eq!(
            solution.equation().balance(&Rules::default()).as_ref(),
            Some(solution.value())
        );
    }
}

#[test]
fn test_11_balances_trivially() {
    let solutions = solve("11");
    assert_eq!(solutions.first().map(Solution::canonical), Some("1 = 1"));
    if let Some(first) = solutions.first() {
        assert_eq!(first.split(), 1);
        assert_eq!(first.value(), &BigInt::from(1));
    }
}

#[test]
fn test_99_balances_trivially() {
    let solutions = solve("99");
    assert_eq!(
        canonicals(&solutions),
        vec!["9 = 9", "9 = |9|", "|9| = 9", "|9| = |9|"]
    );
    assert!(solutions.iter().all(|s| s.value() == &BigInt::from(9)));
}

#[test]
fn test_90_has_no_solution() {
    let result = PlateSolver::default().solve(&plate("90"));
    assert_eq!(result, Ok(Vec::new()));
}

#[test]
fn test_equivalent_groupings_collapse() {
    let solutions = solve("1236");
    let chain = solutions
        .iter()
        .filter(|s| s.canonical() == "1 + 2 + 3 = 6")
        .count();
    assert_eq!(chain, 1);

    let unique: HashSet<&str> = canonicals(&solutions).into_iter().collect();
    assert_eq!(unique.len(), solutions.len());
}

#[test]
fn test_solutions_ordered_by_split() {
    let solutions = solve("2428");
    assert!(!solutions.is_empty());
    assert!(solutions.windows(2).all(|w| w[0].split() <= w[1].split()));
}

#[test]
fn test_sides_partition_plate() {
    let digits = plate("3721");
    let solutions = solve("3721");
    for solution in &solutions {
        let s = solution.split();
        let left: Vec<usize> = solution.left().leaves().iter().map(|(p, _)| *p).collect();
        let right: Vec<usize> = solution.right().leaves().iter().map(|(p, _)| *p).collect();
        assert_eq!(left, (0..s).collect::<Vec<_>>());
        assert_eq!(right, (s..digits.len()).collect::<Vec<_>>());

        let mut leaf_digits = solution.left().leaves();
        leaf_digits.extend(solution.right().leaves());
        let read: Vec<u8> = leaf_digits.iter().map(|(_, d)| *d).collect();
        assert_eq!(read.as_slice(), digits.as_slice());
    }
}

#[test]
fn test_solve_is_idempotent() {
    let solver = PlateSolver::default();
    let digits = plate("4312");
    assert_eq!(solver.solve(&digits), solver.solve(&digits));
}

#[test]
fn test_solve_first_matches_head_of_solve() {
    let solver = PlateSolver::default();
    let digits = plate("4312");
    let all = solver.solve(&digits).unwrap_or_default();
    let first = solver.solve_first(&digits).unwrap_or_default();
    assert_eq!(first.as_ref(), all.first());
}

#[test]
fn test_first_mode_returns_at_most_one() {
    let solver = PlateSolver::new(SolverConfig::default().with_mode(SearchMode::First));
    assert_eq!(solver.run(&plate("4312")).map(|v| v.len()), Ok(1));
    assert_eq!(solver.run(&plate("90")).map(|v| v.len()), Ok(0));
}

#[test]
fn test_disabled_operators_are_never_used() {
    let rules = Rules::default()
        .without(OperatorKind::Factorial)
        .without(OperatorKind::Power);
    let solver = PlateSolver::new(SolverConfig::default().with_rules(rules));
    let solutions = solver.solve(&plate("1224")).unwrap_or_default();
    assert!(canonicals(&solutions).contains(&"1 * 2 * 2 = 4"));
    for solution in &solutions {
        assert!(!solution.canonical().contains('!'));
        assert!(!solution.canonical().contains('^'));
    }
}

#[test]
fn test_too_many_digits_is_aborted() {
    let result = PlateSolver::default().solve(&plate("123456"));
    assert_eq!(
        result,
        Err(SolverError::Aborted(SearchAborted::TooManyDigits {
            length: 6,
            max: 5
        }))
    );
    assert!(result.is_err_and(|e| e.is_aborted()));
}

#[test]
fn test_candidate_limit_is_aborted_not_empty() {
    let solver = PlateSolver::new(SolverConfig::default().with_max_candidates(50));
    let result = solver.solve(&plate("1234"));
    assert!(matches!(
        result,
        Err(SolverError::Aborted(SearchAborted::CandidateLimit { .. }))
    ));
}

#[test]
fn test_zero_deadline_is_aborted() {
    let solver = PlateSolver::new(SolverConfig::default().with_deadline(Duration::ZERO));
    let result = solver.solve(&plate("12345"));
    assert!(result.is_err_and(|e| e.is_aborted()));
}

#[test]
fn test_deadline_check() {
    assert_eq!(Deadline::unbounded().check(), Ok(()));
    assert_eq!(Deadline::start(Some(Duration::from_secs(60))).check(), Ok(()));

    let started = Instant::now() - Duration::from_secs(2);
    let spent = Deadline::new(started, Some(Duration::from_secs(1)));
    assert_eq!(
        spent.check(),
        Err(SearchAborted::DeadlineExceeded {
            budget: Duration::from_secs(1)
        })
    );
}

#[test]
fn test_five_digits_within_default_limits() {
    let rules = Rules::default()
        .without(OperatorKind::Factorial)
        .without(OperatorKind::AbsoluteValue);
    let solver = PlateSolver::new(SolverConfig::default().with_rules(rules));
    let result = solver.solve(&plate("12345"));
    let solutions = result.unwrap_or_else(|e| panic!("search for 12345 failed: {}", e));
    assert!(
        solutions
            .iter()
            .any(|s| s.canonical() == "1 * 2 = 3 + 4 - 5"),
        "missing 1 * 2 = 3 + 4 - 5 in {:?}",
        canonicals(&solutions)
    );
}

#[test]
fn test_invalid_input_is_not_an_abort() {
    let result = crate::solve_plate("12a");
    assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    assert!(result.is_err_and(|e| !e.is_aborted()));
}
