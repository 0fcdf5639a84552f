use num_bigint::BigInt;

use crate::expression::{Expression, OperatorKind};

/// Shape of one candidate. Children are indices into the table slot of the
/// range they cover, never owning pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        digit: u8,
    },
    /// Left child lives in `lo..split`, right child in `split..hi`.
    Binary {
        op: OperatorKind,
        split: usize,
        left: usize,
        right: usize,
    },
    /// Operand lives in the same range as the wrapper.
    Unary {
        op: OperatorKind,
        operand: usize,
    },
}

/// An expression over one range together with its (always defined) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    node: Node,
    value: BigInt,
}

impl Candidate {
    pub(crate) fn new(node: Node, value: BigInt) -> Self {
        Self { node, value }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }
}

/// Memo table of candidates keyed by half-open range `[lo, hi)`.
#[derive(Debug, Clone, Default)]
pub struct RangeTable {
    width: usize,
    slots: Vec<Vec<Candidate>>,
}

impl RangeTable {
    pub fn new(len: usize) -> Self {
        let width = len + 1;
        Self {
            width,
            slots: vec![Vec::new(); width * width],
        }
    }

    #[inline]
    fn slot(&self, lo: usize, hi: usize) -> Option<usize> {
        (lo < hi && hi < self.width).then_some(lo * self.width + hi)
    }

    pub(crate) fn insert(&mut self, lo: usize, hi: usize, candidates: Vec<Candidate>) {
        if let Some(slot) = self.slot(lo, hi).and_then(|i| self.slots.get_mut(i)) {
            *slot = candidates;
        }
    }

    /// Candidates for `[lo, hi)` in generation order; empty if never built.
    pub fn candidates(&self, lo: usize, hi: usize) -> &[Candidate] {
        self.slot(lo, hi)
            .and_then(|i| self.slots.get(i))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn total_candidates(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Rebuild the owned tree for one candidate.
    pub fn expression(&self, lo: usize, hi: usize, index: usize) -> Option<Expression> {
        let candidate = self.candidates(lo, hi).get(index)?;
        let expr = match &candidate.node {
            Node::Leaf { digit } => Expression::digit(lo, *digit),
            Node::Binary {
                op,
                split,
                left,
                right,
            } => Expression::binary(
                *op,
                self.expression(lo, *split, *left)?,
                self.expression(*split, hi, *right)?,
            ),
            Node::Unary { op, operand } => {
                Expression::unary(*op, self.expression(lo, hi, *operand)?)
            }
        };
        Some(expr)
    }

    /// Every expression built for `[lo, hi)`, in generation order.
    pub fn expressions(&self, lo: usize, hi: usize) -> Vec<Expression> {
        (0..self.candidates(lo, hi).len())
            .filter_map(|index| self.expression(lo, hi, index))
            .collect()
    }
}
