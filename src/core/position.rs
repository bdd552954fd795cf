//! Grid coordinates and paths.
//!
//! A `Position` is local to one board: it says where a child sits inside its
//! immediate parent, never where it sits in the whole tree. A `Path` strings
//! positions together, one per nesting level.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered positions from some board down towards a leaf.
///
/// Inline capacity covers four nesting levels without allocating.
pub type Path = SmallVec<[Position; 4]>;

/// (row, column) inside one board's grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` times along `(d_row, d_col)`.
    ///
    /// Returns `None` when the result would have a negative coordinate;
    /// upper bounds are the caller's business.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, steps: isize) -> Option<Self> {
        let row = self.row as isize + d_row * steps;
        let col = self.col as isize + d_col * steps;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Self::new(row as usize, col as usize))
    }

    /// Row-major index into a grid with `cols` columns.
    #[inline]
    #[must_use]
    pub const fn to_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of [`Position::to_index`].
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize, cols: usize) -> Self {
        Self::new(index / cols, index % cols)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
