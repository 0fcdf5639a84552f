use crate::expression::ast::OperatorKind;

/// Largest factorial operand allowed by default (8! = 40320).
pub const DEFAULT_MAX_FACTORIAL_ARG: u32 = 8;
/// Largest exponent allowed by default, keeping repeated powers small.
pub const DEFAULT_MAX_EXPONENT: u32 = 6;

/// The arithmetic a plate equation is allowed to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Enabled operators, in the order the builder tries them.
    pub operators: Vec<OperatorKind>,
    pub max_factorial_arg: u32,
    pub max_exponent: u32,
}

impl Rules {
    pub fn allows(&self, op: OperatorKind) -> bool {
        self.operators.contains(&op)
    }

    pub fn binary_operators(&self) -> impl Iterator<Item = OperatorKind> + '_ {
        self.operators.iter().copied().filter(|op| op.is_binary())
    }

    pub fn unary_operators(&self) -> impl Iterator<Item = OperatorKind> + '_ {
        self.operators.iter().copied().filter(|op| op.is_unary())
    }

    /// Returns a copy of these rules with `op` removed.
    pub fn without(mut self, op: OperatorKind) -> Self {
        self.operators.retain(|enabled| *enabled != op);
        self
    }

    pub fn with_max_factorial_arg(mut self, max: u32) -> Self {
        self.max_factorial_arg = max;
        self
    }

    pub fn with_max_exponent(mut self, max: u32) -> Self {
        self.max_exponent = max;
        self
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            operators: OperatorKind::ALL.to_vec(),
            max_factorial_arg: DEFAULT_MAX_FACTORIAL_ARG,
            max_exponent: DEFAULT_MAX_EXPONENT,
        }
    }
}
