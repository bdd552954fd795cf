//! Leaf node: one symbol slot.

use smallvec::smallvec;

use crate::core::{Error, Move, MoveRef, Position, Result, Symbol};

use super::placeable::{Availability, NodeRef, Placeable};

/// A single slot on the lowest level of the tree.
///
/// Equality compares position and symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    position: Option<Position>,
    symbol: Symbol,
}

impl Cell {
    /// Create an empty, unplaced cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn placed(position: Position) -> Self {
        Self {
            position: Some(position),
            symbol: Symbol::Empty,
        }
    }

    /// A cell's winner is whatever it holds.
    #[must_use]
    pub fn winner(&self) -> Symbol {
        self.symbol
    }

    fn expect_leaf(mv: MoveRef<'_>) -> Result<()> {
        if mv.path.is_empty() {
            Ok(())
        } else {
            Err(Error::PathTooLong {
                extra: mv.path.len(),
            })
        }
    }
}

impl Placeable for Cell {
    fn position(&self) -> Option<Position> {
        self.position
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn make_move(&mut self, mv: MoveRef<'_>) -> Result<()> {
        Self::expect_leaf(mv)?;
        if !mv.symbol.is_mark() {
            return Err(Error::InvalidSymbol { symbol: mv.symbol });
        }
        if !self.symbol.is_empty() {
            return Err(Error::CellTaken {
                symbol: self.symbol,
            });
        }
        self.symbol = mv.symbol;
        Ok(())
    }

    fn undo_move(&mut self, mv: MoveRef<'_>) -> Result<()> {
        Self::expect_leaf(mv)?;
        if self.symbol.is_empty() || self.symbol != mv.symbol {
            return Err(Error::UndoMismatch {
                expected: Move::at(&[], self.symbol),
                got: mv.to_move(),
            });
        }
        self.symbol = Symbol::Empty;
        Ok(())
    }

    fn sub_node(&self, path: &[Position]) -> Result<NodeRef<'_>> {
        if path.is_empty() {
            Ok(NodeRef::Cell(self))
        } else {
            Err(Error::PathTooLong { extra: path.len() })
        }
    }

    /// `[true]` when empty; a cell has nothing below it to check.
    fn availability(&self, _active: &[Position]) -> Availability {
        smallvec![self.symbol.is_empty()]
    }

    fn valid_moves(&self, _active: Option<&[Position]>, _is_top_level: bool) -> Vec<Move> {
        if self.symbol.is_empty() {
            vec![Move::new(self.position, Symbol::Empty)]
        } else {
            Vec::new()
        }
    }
}
