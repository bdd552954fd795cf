//! Win and draw derivation for a board.
//!
//! A board is won when some child anchors a run of `win_streak` identical
//! marks along one of four rays. For each anchor and ray the scan covers
//! the window `anchor - k*dir ..= anchor + (k-1)*dir` (with `k` the streak),
//! clipped to the grid. Any non-empty symbol can form a run, so a line of
//! drawn sub-boards decides the parent as drawn. A run only starts after an
//! empty slot (or at the start of the window): a change of symbol resets it.

use crate::core::{Position, Symbol};

use super::board::Board;
use super::placeable::Placeable;

/// (row step, column step) of each scan direction, in scan order.
const RAYS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

impl Board {
    /// Winner of this board, derived from its children.
    ///
    /// Returns the first run found scanning anchors row-major (a mark, or
    /// `Symbol::Full` for a line of drawn children), else `Symbol::Full` when
    /// no child is undecided, else `Symbol::Empty`.
    #[must_use]
    pub fn winner(&self) -> Symbol {
        let found = (0..self.cells.len())
            .map(|index| self.winner_from(Position::from_index(index, self.cols), None))
            .find(|symbol| !symbol.is_empty());
        match found {
            Some(symbol) => symbol,
            None if self.empty_cells() == 0 => Symbol::Full,
            None => Symbol::Empty,
        }
    }

    /// Ray-cast check anchored at `anchor`.
    ///
    /// `streak` overrides the board's win streak for both the window size
    /// and the run length. Returns the symbol of the first ray (in scan
    /// order) holding a full run, or `Symbol::Empty`.
    #[must_use]
    pub fn winner_from(&self, anchor: Position, streak: Option<usize>) -> Symbol {
        let streak = streak.unwrap_or(self.win_streak);
        if streak == 0 {
            return Symbol::Empty;
        }
        RAYS.iter()
            .map(|&(d_row, d_col)| self.longest_run(anchor, d_row, d_col, streak))
            .find(|symbol| !symbol.is_empty())
            .unwrap_or(Symbol::Empty)
    }

    /// Number of undecided children.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|child| child.symbol().is_empty()).count()
    }

    /// Positions of undecided children, row-major.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, child)| child.symbol().is_empty())
            .map(|(index, _)| Position::from_index(index, self.cols))
            .collect()
    }

    /// Outcome of this board.
    ///
    /// `Some(mark)` once won, `Some(Symbol::Full)` once drawn, `None` while
    /// the game is still going.
    #[must_use]
    pub fn final_symbol(&self) -> Option<Symbol> {
        let winner = self.winner();
        if !winner.is_empty() {
            return Some(winner);
        }
        if self.empty_cells() == 0 {
            return Some(Symbol::Full);
        }
        None
    }

    /// Whether this board is won or drawn.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !self.symbol.is_empty()
    }

    fn longest_run(&self, anchor: Position, d_row: isize, d_col: isize, streak: usize) -> Symbol {
        let reach = streak as isize;
        let mut count = 0;
        let mut prev = Symbol::Empty;

        for step in -reach..reach {
            let Some(pos) = anchor.offset(d_row, d_col, step) else {
                continue;
            };
            let Some(child) = self.get(pos) else {
                continue;
            };
            let symbol = child.symbol();
            count = if !symbol.is_empty() && (symbol == prev || prev.is_empty()) {
                count + 1
            } else {
                0
            };
            prev = symbol;
            if count == streak {
                return symbol;
            }
        }
        Symbol::Empty
    }
}
