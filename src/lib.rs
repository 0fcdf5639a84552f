//! Plate Parity - find the equations hidden in license-plate digits
//!
//! Given the digits of a plate in their fixed order, this library places one
//! `=` between two of them and fills both sides with `+`, `-`, `*`, `^`,
//! factorial and absolute value (never division, never gluing digits into a
//! larger number) so that both sides come out equal.

pub mod builder;
pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{DomainViolation, Expression, OperatorKind, Rules, Value};
pub use solver::{
    PlateSolver, SearchAborted, SearchMode, Solution, SolverConfig, SolverError, SplitPoint,
};
pub use utils::{DigitSequence, PlateError, validate_plate};

/// Find every solution for a plate under the default rules
///
/// This is a convenience function that validates the plate and runs a
/// default solver over it.
///
/// # Arguments
///
/// * `plate` - A string containing only ASCII digits, at least two of them
///
/// # Returns
///
/// * `Ok(solutions)` - Every distinct solution; empty if the plate has none
/// * `Err(SolverError)` - If the plate is invalid or the search was aborted
///
/// # Errors
///
/// This function will return an error if:
/// * The plate is empty, too short, or contains non-digit characters
/// * The plate is longer than the default digit limit
/// * A side grows past the default candidate limit
///
/// # Examples
///
/// ```
/// use plate_parity::solve_plate;
///
/// match solve_plate("4312") {
///     Ok(solutions) if solutions.is_empty() => println!("No solution"),
///     Ok(solutions) => {
///         for solution in solutions {
///             println!("{}", solution);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_plate(plate: &str) -> Result<Vec<Solution>, SolverError> {
    let digits = DigitSequence::parse(plate)?;

    let solver = PlateSolver::default();
    solver.solve(&digits)
}
