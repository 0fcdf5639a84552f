use num_bigint::BigInt;
use thiserror::Error;

use crate::expression::ast::OperatorKind;

/// Why an expression has no value.
///
/// These never reach a caller as failures; an expression carrying one is the
/// undefined value and is dropped from the search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainViolation {
    #[error("Factorial operand {operand} is outside 0..={max}")]
    FactorialOutOfRange { operand: BigInt, max: u32 },
    #[error("Negative exponent {0}")]
    NegativeExponent(BigInt),
    #[error("Exponent {exponent} exceeds the limit of {max}")]
    ExponentTooLarge { exponent: BigInt, max: u32 },
    #[error("Operator {0} is disabled by the current rules")]
    OperatorDisabled(OperatorKind),
    #[error("Operator {0} applied with the wrong number of operands")]
    ArityMismatch(OperatorKind),
}
