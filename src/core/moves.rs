//! Move representation: a path plus the symbol being placed.
//!
//! A move is addressed relative to a frame: the board it is handed to. The
//! first path segment picks a child of that board, the second a child of
//! that child, and so on until a cell is reached. Descending one level
//! consumes the head (`sub_move`); climbing back up prepends the parent's
//! position (`super_move`).
//!
//! Recursion inside the engine works on [`MoveRef`], a borrowed view whose
//! `rest()` is a slice of the same path, so descending never allocates.

use serde::{Deserialize, Serialize};

use super::position::{Path, Position};
use super::symbol::Symbol;

/// A fully owned move.
///
/// ## Example
///
/// ```
/// use rust_nttt::core::{Move, Position, Symbol};
///
/// // Sub-board (1, 1), then cell (0, 2) inside it.
/// let mv = Move::at(&[Position::new(1, 1), Position::new(0, 2)], Symbol::mark_of(0));
/// assert_eq!(mv.position(), Some(Position::new(1, 1)));
/// assert_eq!(mv.sub_move().path(), &[Position::new(0, 2)]);
/// assert_eq!(mv.to_string(), "X:(1, 1)>(0, 2)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Positions from the issuing frame down to the target cell.
    pub path: Path,

    /// Symbol placed in the target cell.
    pub symbol: Symbol,
}

impl Move {
    /// Create a move from any sequence of positions.
    #[must_use]
    pub fn new(path: impl IntoIterator<Item = Position>, symbol: Symbol) -> Self {
        Self {
            path: path.into_iter().collect(),
            symbol,
        }
    }

    /// Create a move from a slice of positions.
    #[must_use]
    pub fn at(path: &[Position], symbol: Symbol) -> Self {
        Self {
            path: Path::from_slice(path),
            symbol,
        }
    }

    /// The positions of this move.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Head of the path: the child picked in the current frame.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.path.first().copied()
    }

    /// Number of levels this move descends.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The same move seen from one level deeper (head consumed).
    ///
    /// Consuming the last segment leaves an empty path, which is what a
    /// cell receives.
    #[must_use]
    pub fn sub_move(&self) -> Self {
        Self::at(self.path.get(1..).unwrap_or_default(), self.symbol)
    }

    /// The same move seen from one level shallower (`parent` prepended).
    #[must_use]
    pub fn super_move(&self, parent: Position) -> Self {
        let mut path = Path::with_capacity(self.path.len() + 1);
        path.push(parent);
        path.extend_from_slice(&self.path);
        Self {
            path,
            symbol: self.symbol,
        }
    }

    /// Replace the symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Borrow as a [`MoveRef`].
    #[must_use]
    pub fn view(&self) -> MoveRef<'_> {
        MoveRef {
            path: &self.path,
            symbol: self.symbol,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.view(), f)
    }
}

/// Borrowed view of a move at some depth of the recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRef<'a> {
    pub path: &'a [Position],
    pub symbol: Symbol,
}

impl<'a> MoveRef<'a> {
    #[must_use]
    pub const fn new(path: &'a [Position], symbol: Symbol) -> Self {
        Self { path, symbol }
    }

    /// Head of the remaining path.
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.path.first().copied()
    }

    /// The view one level deeper.
    #[must_use]
    pub fn rest(&self) -> MoveRef<'a> {
        MoveRef {
            path: self.path.get(1..).unwrap_or_default(),
            symbol: self.symbol,
        }
    }

    /// Copy into an owned [`Move`].
    #[must_use]
    pub fn to_move(&self) -> Move {
        Move::at(self.path, self.symbol)
    }
}

impl PartialEq<Move> for MoveRef<'_> {
    fn eq(&self, other: &Move) -> bool {
        self.symbol == other.symbol && self.path == other.path.as_slice()
    }
}

impl std::fmt::Display for MoveRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.symbol)?;
        for (i, pos) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, ">")?;
            }
            write!(f, "{}", pos)?;
        }
        Ok(())
    }
}
