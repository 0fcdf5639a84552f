//! Expression trees, their evaluation and canonical rendering

mod ast;
mod display;
mod errors;
mod eval;
mod rules;

pub use ast::{Expression, OperatorKind};
pub use errors::DomainViolation;
pub use eval::{Value, apply_binary, apply_unary};
pub use rules::{DEFAULT_MAX_EXPONENT, DEFAULT_MAX_FACTORIAL_ARG, Rules};
