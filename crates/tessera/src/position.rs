//! Slot positions within a [`Vector`](crate::Vector).

use std::fmt;

/// A position in a vector: the index of a slot in `[0, len]`.
///
/// Positions are what `insert` and `erase` take and return. A position is
/// a plain index and borrows nothing, so it survives mutation; after any
/// operation that inserts or removes at or before it, it names a
/// different element. Use the borrowing iterators (`iter`, `iter_mut`)
/// when you need traversal that the compiler keeps valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    /// Position of slot `index`.
    pub const fn at(index: usize) -> Self {
        Self(index)
    }

    /// Slot index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// The following position.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
