//! Players and turn order.
//!
//! Players are numbered from 0 and take turns in a fixed rotation. Nothing
//! assumes exactly two: a player's mark is `Symbol::Mark(PlayerId)`, and
//! the rotation wraps at whatever `player_count` the game was built with.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Player identifier, 0-based; up to 255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The mark this player places.
    #[must_use]
    pub const fn mark(self) -> Symbol {
        Symbol::Mark(self)
    }

    /// Whoever moves after this player in a game of `player_count`.
    ///
    /// ```
    /// use rust_nttt::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0);
        Self(((self.index() + 1) % player_count.max(1)) as u8)
    }

    /// Every player of a `player_count` game, in turn order.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(256)).map(|id| PlayerId(id as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
