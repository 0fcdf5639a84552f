use std::fmt;

/// The operator vocabulary a plate equation may use.
///
/// There is deliberately no division (and no remainder): every operator keeps
/// values inside the integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Power,
    Factorial,
    AbsoluteValue,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 6] = [
        OperatorKind::Add,
        OperatorKind::Subtract,
        OperatorKind::Multiply,
        OperatorKind::Power,
        OperatorKind::Factorial,
        OperatorKind::AbsoluteValue,
    ];

    pub fn is_binary(self) -> bool {
        matches!(
            self,
            OperatorKind::Add | OperatorKind::Subtract | OperatorKind::Multiply | OperatorKind::Power
        )
    }

    pub fn is_unary(self) -> bool {
        !self.is_binary()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Subtract => "-",
            OperatorKind::Multiply => "*",
            OperatorKind::Power => "^",
            OperatorKind::Factorial => "!",
            OperatorKind::AbsoluteValue => "|x|",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An expression tree over a contiguous run of plate positions.
///
/// A `Digit` covers exactly one position. A `Binary` node's left child covers
/// the positions immediately before its right child's, so the leaves of any
/// tree read the plate in order and never merge two digits into one number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Digit {
        position: usize,
        value: u8,
    },
    Binary {
        op: OperatorKind,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        op: OperatorKind,
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn digit(position: usize, value: u8) -> Self {
        Expression::Digit { position, value }
    }

    pub fn binary(op: OperatorKind, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: OperatorKind, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Operator at the root, `None` for a bare digit.
    pub fn operator(&self) -> Option<OperatorKind> {
        match self {
            Expression::Digit { .. } => None,
            Expression::Binary { op, .. } | Expression::Unary { op, .. } => Some(*op),
        }
    }

    /// Leaves as `(position, digit)` pairs, left to right.
    pub fn leaves(&self) -> Vec<(usize, u8)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<(usize, u8)>) {
        match self {
            Expression::Digit { position, value } => out.push((*position, *value)),
            Expression::Binary { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
            Expression::Unary { operand, .. } => operand.collect_leaves(out),
        }
    }

    /// Every node of the tree in pre-order, the root first.
    pub fn nodes(&self) -> Vec<&Expression> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            match node {
                Expression::Digit { .. } => {}
                Expression::Binary { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
                Expression::Unary { operand, .. } => stack.push(operand),
            }
        }
        out
    }

    /// Half-open position range `[lo, hi)` covered by the leaves.
    ///
    /// Only meaningful for trees whose leaves are contiguous, which is every
    /// tree the builder produces.
    pub fn span(&self) -> (usize, usize) {
        match self {
            Expression::Digit { position, .. } => (*position, position + 1),
            Expression::Binary { left, right, .. } => (left.span().0, right.span().1),
            Expression::Unary { operand, .. } => operand.span(),
        }
    }
}
