use std::fmt;

use crate::expression::ast::{Expression, OperatorKind};

/// Canonical rendering: only the parentheses the tree shape requires.
///
/// `+` and `*` are printed as associative, so `(1 + 2) + 3` and `1 + (2 + 3)`
/// both become `1 + 2 + 3`. `^` groups to the right.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Binary { op, .. } => match op {
                    OperatorKind::Add | OperatorKind::Subtract => 1,
                    OperatorKind::Multiply => 2,
                    _ => 3,
                },
                Expression::Unary {
                    op: OperatorKind::Factorial,
                    ..
                } => 4,
                Expression::Digit { .. } | Expression::Unary { .. } => 5,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Digit { value, .. } => write!(f, "{}", value),
                Expression::Binary { op, left, right } => {
                    let lp = precedence(left);
                    let rp = precedence(right);
                    let (need_l, need_r) = match op {
                        OperatorKind::Add => (false, false),
                        OperatorKind::Subtract => (false, rp <= 1),
                        OperatorKind::Multiply => (lp < 2, rp < 2),
                        _ => (lp <= 3, rp < 3),
                    };
                    write_with_parens(f, left, need_l)?;
                    write!(f, " {} ", op.symbol())?;
                    write_with_parens(f, right, need_r)
                }
                Expression::Unary {
                    op: OperatorKind::AbsoluteValue,
                    operand,
                } => {
                    write!(f, "|")?;
                    fmt_expression(f, operand)?;
                    write!(f, "|")
                }
                Expression::Unary { op, operand } => {
                    let need = precedence(operand) < 5;
                    write_with_parens(f, operand, need)?;
                    if *op == OperatorKind::Factorial {
                        write!(f, "!")
                    } else {
                        write!(f, "{}", op.symbol())
                    }
                }
            }
        }

        fmt_expression(f, self)
    }
}
