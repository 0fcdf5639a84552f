use std::ops::Range;

/// Position of the single `=`: the left side covers `0..position`, the right
/// side `position..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SplitPoint {
    position: usize,
    len: usize,
}

impl SplitPoint {
    /// `None` unless both sides would be non-empty.
    pub fn new(position: usize, len: usize) -> Option<Self> {
        (position >= 1 && position < len).then_some(Self { position, len })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn left(&self) -> Range<usize> {
        0..self.position
    }

    pub fn right(&self) -> Range<usize> {
        self.position..self.len
    }
}

/// Every split of a plate of `len` digits, left to right.
#[derive(Debug, Clone)]
pub struct Splits {
    next: usize,
    len: usize,
}

pub fn splits(len: usize) -> Splits {
    Splits { next: 1, len }
}

impl Iterator for Splits {
    type Item = SplitPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let split = SplitPoint::new(self.next, self.len)?;
        self.next += 1;
        Some(split)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Splits {}
