use std::fmt;

use num_bigint::BigInt;

use crate::expression::{Expression, Rules};
use crate::solver::splits::SplitPoint;

/// Two expressions on either side of one `=`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    pub split: SplitPoint,
    pub left: Expression,
    pub right: Expression,
}

impl Equation {
    /// The shared value when both sides are defined and equal.
    pub fn balance(&self, rules: &Rules) -> Option<BigInt> {
        let left = self.left.evaluate_with(rules).ok()?;
        let right = self.right.evaluate_with(rules).ok()?;
        (left == right).then_some(left)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

/// A balanced equation found on a plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    equation: Equation,
    value: BigInt,
    canonical: String,
}

impl Solution {
    pub(crate) fn new(equation: Equation, value: BigInt) -> Self {
        let canonical = equation.to_string();
        Self {
            equation,
            value,
            canonical,
        }
    }

    /// Number of digits left of the `=`.
    pub fn split(&self) -> usize {
        self.equation.split.position()
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Rendering used to tell solutions apart, e.g. `4 - 3 + 1 = 2`.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    pub fn left(&self) -> &Expression {
        &self.equation.left
    }

    pub fn right(&self) -> &Expression {
        &self.equation.right
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}
