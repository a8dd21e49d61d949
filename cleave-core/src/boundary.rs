//! Boundary types shared by both extractors and the chunk builder

use std::cmp::Ordering;
use std::fmt;

/// Relative strength of a break point
///
/// Higher levels are preferred: a chunk ends at the strongest boundary that
/// still lets it fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(pub u8);

impl Level {
    /// The weakest possible level
    pub const MIN: Level = Level(0);
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A candidate break point
///
/// `start` and `end` are byte offsets into the document and always fall on
/// `char` boundaries. A chunk that breaks here ends at `end`; `start` marks
/// where an overlapping chunk may begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Boundary {
    /// Break strength
    pub level: Level,
    /// First byte of the boundary region
    pub start: usize,
    /// One past the last byte of the boundary region
    pub end: usize,
}

impl Boundary {
    /// Create a boundary
    pub fn new(level: Level, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "boundary start {start} past end {end}");
        Self { level, start, end }
    }

    /// Byte length of the boundary region
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the boundary is a zero-width break point
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Ordering used by the builder: `start` ascending, then `level` descending
fn builder_order(a: &Boundary, b: &Boundary) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.level.cmp(&a.level))
        .then_with(|| a.end.cmp(&b.end))
}

/// Sort boundaries into builder order and drop exact duplicates
pub fn sort_boundaries(boundaries: &mut Vec<Boundary>) {
    boundaries.sort_unstable_by(builder_order);
    boundaries.dedup();
}

/// Whether `boundaries` is in builder order
pub fn is_sorted(boundaries: &[Boundary]) -> bool {
    boundaries
        .windows(2)
        .all(|pair| builder_order(&pair[0], &pair[1]) != Ordering::Greater)
}
