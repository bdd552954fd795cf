//! The capability contract shared by every node of the tree.
//!
//! There are exactly two kinds of node: [`Cell`] (a leaf) and [`Board`]
//! (a grid of nodes). Both implement [`Placeable`]; [`Node`] is the closed
//! enum a board stores its children as, and it dispatches the trait by
//! `match`.
//!
//! ## Frames
//!
//! Every method that takes a path reads it relative to the node it is
//! called on. A board consumes the head of the path to pick a child and
//! hands the rest down, so by the time a move reaches a cell the path is
//! empty.
//!
//! [`Cell`]: super::Cell
//! [`Board`]: super::Board
//! [`Node`]: super::Node

use smallvec::SmallVec;

use crate::core::{Move, MoveRef, Position, Result, Symbol};

use super::board::Board;
use super::cell::Cell;

/// Per-level availability along an active path.
pub type Availability = SmallVec<[bool; 4]>;

/// Operations every node supports.
pub trait Placeable {
    /// Where this node sits in its parent's grid. `None` for a root.
    ///
    /// Assigned once by the parent at construction.
    fn position(&self) -> Option<Position>;

    /// Effective symbol: stored for a cell, derived for a board.
    fn symbol(&self) -> Symbol;

    /// Apply `mv`, whose path is relative to this node.
    ///
    /// On error nothing has changed.
    fn make_move(&mut self, mv: MoveRef<'_>) -> Result<()>;

    /// Revert `mv`, which must be the last move applied to this node.
    ///
    /// On error nothing has changed.
    fn undo_move(&mut self, mv: MoveRef<'_>) -> Result<()>;

    /// Node addressed by `path`; an empty path is this node.
    fn sub_node(&self, path: &[Position]) -> Result<NodeRef<'_>>;

    /// Whether each level along `active` can still be played in.
    ///
    /// With an empty path this reports whether the node itself is open.
    fn availability(&self, active: &[Position]) -> Availability;

    /// Candidate moves inside this node, confined to `active`.
    ///
    /// `None` lets a board derive the region from its own history.
    /// Candidates carry the `Symbol::Empty` placeholder and paths that start
    /// with this node's own position.
    fn valid_moves(&self, active: Option<&[Position]>, is_top_level: bool) -> Vec<Move>;
}

/// Borrowed view of a node, as returned by [`Placeable::sub_node`].
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
    Cell(&'a Cell),
    Board(&'a Board),
}

impl<'a> NodeRef<'a> {
    /// Effective symbol of the node.
    #[must_use]
    pub fn symbol(self) -> Symbol {
        match self {
            NodeRef::Cell(cell) => cell.symbol(),
            NodeRef::Board(board) => board.symbol(),
        }
    }

    /// Position of the node inside its parent.
    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            NodeRef::Cell(cell) => cell.position(),
            NodeRef::Board(board) => board.position(),
        }
    }

    /// The board, if this is one.
    #[must_use]
    pub fn as_board(self) -> Option<&'a Board> {
        match self {
            NodeRef::Board(board) => Some(board),
            NodeRef::Cell(_) => None,
        }
    }

    /// The cell, if this is one.
    #[must_use]
    pub fn as_cell(self) -> Option<&'a Cell> {
        match self {
            NodeRef::Cell(cell) => Some(cell),
            NodeRef::Board(_) => None,
        }
    }
}
