use log::debug;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive};

use crate::expression::ast::{Expression, OperatorKind};
use crate::expression::errors::DomainViolation;
use crate::expression::rules::Rules;

/// Result of evaluating an expression: an integer, or the undefined value
/// together with the reason it is undefined.
pub type Value = Result<BigInt, DomainViolation>;

#[inline]
fn factorial(n: u32) -> BigInt {
    (2..=n).fold(BigInt::one(), |acc, k| acc * k)
}

/// Apply a binary operator to two defined operands.
///
/// `0 ^ 0` is 1.
pub fn apply_binary(op: OperatorKind, left: &BigInt, right: &BigInt, rules: &Rules) -> Value {
    if !rules.allows(op) {
        return Err(DomainViolation::OperatorDisabled(op));
    }

    match op {
        OperatorKind::Add => Ok(left + right),
        OperatorKind::Subtract => Ok(left - right),
        OperatorKind::Multiply => Ok(left * right),
        OperatorKind::Power => {
            if right.is_negative() {
                return Err(DomainViolation::NegativeExponent(right.clone()));
            }
            match right.to_u32() {
                Some(exponent) if exponent <= rules.max_exponent => Ok(left.pow(exponent)),
                _ => Err(DomainViolation::ExponentTooLarge {
                    exponent: right.clone(),
                    max: rules.max_exponent,
                }),
            }
        }
        OperatorKind::Factorial | OperatorKind::AbsoluteValue => {
            Err(DomainViolation::ArityMismatch(op))
        }
    }
}

/// Apply a unary operator to a defined operand.
///
/// `0!` is 1.
pub fn apply_unary(op: OperatorKind, operand: &BigInt, rules: &Rules) -> Value {
    if !rules.allows(op) {
        return Err(DomainViolation::OperatorDisabled(op));
    }

    match op {
        OperatorKind::Factorial => match operand.to_u32() {
            Some(n) if n <= rules.max_factorial_arg => Ok(factorial(n)),
            _ => Err(DomainViolation::FactorialOutOfRange {
                operand: operand.clone(),
                max: rules.max_factorial_arg,
            }),
        },
        OperatorKind::AbsoluteValue => Ok(operand.abs()),
        OperatorKind::Add
        | OperatorKind::Subtract
        | OperatorKind::Multiply
        | OperatorKind::Power => Err(DomainViolation::ArityMismatch(op)),
    }
}

impl Expression {
    /// Evaluates the expression under the default rules.
    pub fn evaluate(&self) -> Value {
        self.evaluate_with(&Rules::default())
    }

    /// Evaluates the expression bottom-up.
    ///
    /// An undefined operand makes every enclosing node undefined.
    pub fn evaluate_with(&self, rules: &Rules) -> Value {
        let result = match self {
            Expression::Digit { value, .. } => Ok(BigInt::from(*value)),
            Expression::Binary { op, left, right } => {
                let left = left.evaluate_with(rules)?;
                let right = right.evaluate_with(rules)?;
                apply_binary(*op, &left, &right, rules)
            }
            Expression::Unary { op, operand } => {
                let operand = operand.evaluate_with(rules)?;
                apply_unary(*op, &operand, rules)
            }
        };

        if let Err(e) = &result {
            debug!("Expression {} is undefined: {}", self, e);
        }

        result
    }
}
