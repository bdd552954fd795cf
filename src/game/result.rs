//! Outcome of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Symbol};
use crate::node::Board;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Every region decided without a winning run.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// Map a decided symbol onto a result. `None` for `Symbol::Empty`.
    #[must_use]
    pub fn from_symbol(symbol: Symbol) -> Option<Self> {
        match symbol {
            Symbol::Mark(player) => Some(GameResult::Winner(player)),
            Symbol::Full => Some(GameResult::Draw),
            Symbol::Empty => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

impl Board {
    /// Outcome of this board, `None` while it is undecided.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.final_symbol().and_then(GameResult::from_symbol)
    }
}
