mod config;
pub mod constants;
mod core;
mod errors;
mod solution;
mod splits;

pub use config::{Deadline, SearchMode, SolverConfig};
pub use core::PlateSolver;
pub use errors::{SearchAborted, SolverError};
pub use solution::{Equation, Solution};
pub use splits::{SplitPoint, Splits, splits};

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;
