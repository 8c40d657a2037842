//! Character-offset regions.

use std::fmt;

/// A span of a buffer between two character offsets.
///
/// `a` is the anchor and `b` the head. For selections the head is where the
/// caret sits; for everything else direction is irrelevant and callers use
/// [`Region::begin`] and [`Region::end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Anchor offset
    pub a: usize,
    /// Head offset
    pub b: usize,
}

impl Region {
    /// Create a region from anchor and head.
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Create an empty region (a caret) at `point`.
    pub const fn point(point: usize) -> Self {
        Self { a: point, b: point }
    }

    /// Smaller of the two offsets.
    pub fn begin(&self) -> usize {
        self.a.min(self.b)
    }

    /// Larger of the two offsets.
    pub fn end(&self) -> usize {
        self.a.max(self.b)
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end() - self.begin()
    }

    /// Whether the region covers no characters.
    pub fn is_empty(&self) -> bool {
        self.a == self.b
    }

    /// Whether `other` lies entirely inside this region (bounds inclusive).
    pub fn contains(&self, other: Region) -> bool {
        self.begin() <= other.begin() && other.end() <= self.end()
    }

    /// Whether the two regions share at least one character.
    pub fn intersects(&self, other: Region) -> bool {
        self.begin() < other.end() && other.begin() < self.end()
    }

    /// Shift both offsets forward by `delta`.
    pub fn offset(&self, delta: usize) -> Self {
        Self {
            a: self.a + delta,
            b: self.b + delta,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}
