pub mod arena;
mod core;
mod generator;

pub use arena::{Candidate, Node, RangeTable};
pub use core::ExpressionBuilder;
