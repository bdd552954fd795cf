//! Active-region constraint and legal-move enumeration.
//!
//! Generalizes "play in the sub-board matching the cell your opponent just
//! played" to any depth. The last move's path minus its head is read as a
//! path from the root: it names the region the next move must land in.
//! Regions that are already decided are trimmed off the end, falling back
//! to the enclosing, larger region; if nothing along the path is open the
//! next move is free.
//!
//! ```
//! use rust_nttt::core::{BoardConfig, Move, Position, Symbol};
//! use rust_nttt::node::{Board, Placeable};
//!
//! let mut board = Board::from_config(&BoardConfig::default()).unwrap();
//! let mv = Move::at(&[Position::new(0, 0), Position::new(1, 2)], Symbol::mark_of(0));
//! board.make_move(mv.view()).unwrap();
//!
//! // O must now answer inside sub-board (1, 2).
//! assert_eq!(board.active().as_slice(), &[Position::new(1, 2)]);
//! let moves = board.legal_moves(Symbol::mark_of(1));
//! assert_eq!(moves.len(), 9);
//! assert!(moves.iter().all(|m| m.position() == Some(Position::new(1, 2))));
//! ```

use smallvec::smallvec;
use tracing::debug;

use crate::core::{Move, Path, Position, Symbol};

use super::board::Board;
use super::placeable::{Availability, Placeable};

impl Board {
    /// Region the next move is confined to, as a path from this board.
    ///
    /// Empty when no move has been played or when the whole path is closed.
    #[must_use]
    pub fn active(&self) -> Path {
        let Some(last) = self.game_moves.last() else {
            return Path::new();
        };
        let tail = last.path.get(1..).unwrap_or_default();
        let open = self.open_prefix(tail);
        if open < tail.len() {
            debug!(requested = tail.len(), kept = open, "active path trimmed");
        }
        Path::from_slice(&tail[..open])
    }

    /// Legal moves for `desired`, confined to [`Board::active`].
    ///
    /// Paths are full paths from this board down to a cell.
    #[must_use]
    pub fn legal_moves(&self, desired: Symbol) -> Vec<Move> {
        self.get_valid_moves(None, true, desired)
    }

    /// Legal moves for `desired`, confined to an explicit `active` path.
    ///
    /// Closed regions at the end of `active` are trimmed as for
    /// [`Board::legal_moves`]; an out-of-range position counts as closed.
    #[must_use]
    pub fn legal_moves_in(&self, active: &[Position], desired: Symbol) -> Vec<Move> {
        self.get_valid_moves(Some(active), true, desired)
    }

    /// Move enumeration at one level of the recursion.
    ///
    /// - `active: None` computes the region from history. Below an
    ///   unconstrained level every open child is asked with `None`, so a
    ///   nested board confines its candidates by its own last move.
    /// - `is_top_level` re-validates `active` and replaces the
    ///   `Symbol::Empty` placeholder with `desired`; below the top,
    ///   placeholders pass through and each level prepends its own position.
    #[must_use]
    pub fn get_valid_moves(
        &self,
        active: Option<&[Position]>,
        is_top_level: bool,
        desired: Symbol,
    ) -> Vec<Move> {
        if self.is_decided() {
            return Vec::new();
        }

        let computed;
        let mut active = match active {
            Some(active) => active,
            None => {
                computed = self.active();
                computed.as_slice()
            }
        };
        if is_top_level {
            active = &active[..self.open_prefix(active)];
        }

        let mut moves = match active.split_first() {
            Some((head, rest)) => self
                .get(*head)
                .map(|child| child.valid_moves(Some(rest), false))
                .unwrap_or_default(),
            None => self
                .cells
                .iter()
                .filter(|child| child.symbol().is_empty())
                .flat_map(|child| child.valid_moves(None, false))
                .collect(),
        };

        if is_top_level {
            for mv in moves.iter_mut().filter(|mv| mv.symbol.is_empty()) {
                mv.symbol = desired;
            }
            debug!(count = moves.len(), active = active.len(), "legal moves");
        } else if let Some(position) = self.position {
            moves = moves.into_iter().map(|mv| mv.super_move(position)).collect();
        }
        moves
    }

    /// Availability along `active`, one level per entry.
    ///
    /// A closed board reports `[false]` whatever the path. An open board
    /// reports its own level (unless it is a root, which has no level in
    /// its own frame) followed by the child addressed by the path head.
    pub(super) fn path_availability(&self, active: &[Position]) -> Availability {
        let Some((head, rest)) = active.split_first() else {
            return smallvec![!self.is_decided()];
        };
        if self.is_decided() {
            return smallvec![false];
        }

        let mut avail = Availability::new();
        if self.position.is_some() {
            avail.push(true);
        }
        match self.get(*head) {
            Some(child) => avail.extend(child.availability(rest)),
            None => avail.push(false),
        }
        avail
    }

    /// Length of the prefix of `active` whose regions are all still open.
    fn open_prefix(&self, active: &[Position]) -> usize {
        if active.is_empty() {
            return 0;
        }
        let avail = self.availability(active);
        // Entries line up with `active` once this board's own level is skipped.
        let own = usize::from(self.position.is_some());
        match avail.iter().position(|open| !open) {
            Some(closed) => closed.saturating_sub(own).min(active.len()),
            None => active.len(),
        }
    }
}
