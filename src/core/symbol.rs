//! The value a node reports to its parent.
//!
//! A `Cell` holds a symbol directly. A `Board` derives its symbol from its
//! children: `Empty` while undecided, `Mark(p)` once player `p` has a winning
//! run, `Full` once every child is decided without a winner.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Symbol stored in a cell or derived for a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Nothing placed yet / board undecided.
    #[default]
    Empty,
    /// A player's mark / board won by that player.
    Mark(PlayerId),
    /// Board exhausted without a winner (draw marker).
    Full,
}

impl Symbol {
    /// Shorthand for `Symbol::Mark(PlayerId::new(id))`.
    #[must_use]
    pub const fn mark_of(id: u8) -> Self {
        Symbol::Mark(PlayerId::new(id))
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Symbol::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_mark(self) -> bool {
        matches!(self, Symbol::Mark(_))
    }

    /// The player owning this symbol, if it is a mark.
    #[must_use]
    pub const fn mark(self) -> Option<PlayerId> {
        match self {
            Symbol::Mark(player) => Some(player),
            _ => None,
        }
    }
}

impl From<PlayerId> for Symbol {
    fn from(player: PlayerId) -> Self {
        Symbol::Mark(player)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Empty => write!(f, "."),
            // Two-player games read better as X/O.
            Symbol::Mark(PlayerId(0)) => write!(f, "X"),
            Symbol::Mark(PlayerId(1)) => write!(f, "O"),
            Symbol::Mark(player) => write!(f, "P{}", player.0),
            Symbol::Full => write!(f, "#"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct() {
        let symbols = [
            Symbol::Empty,
            Symbol::mark_of(0),
            Symbol::mark_of(1),
            Symbol::Full,
        ];
        for (i, a) in symbols.iter().enumerate() {
            for (j, b) in symbols.iter().enumerate() {
                assert_eq!(i == j, a == b);
            }
        }
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Symbol::default(), Symbol::Empty);
        assert!(Symbol::default().is_empty());
    }

    #[test]
    fn test_mark_accessors() {
        let x = Symbol::from(PlayerId::new(0));
        assert!(x.is_mark());
        assert_eq!(x.mark(), Some(PlayerId::new(0)));
        assert_eq!(Symbol::Full.mark(), None);
        assert!(!Symbol::Full.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::Empty.to_string(), ".");
        assert_eq!(Symbol::mark_of(0).to_string(), "X");
        assert_eq!(Symbol::mark_of(1).to_string(), "O");
        assert_eq!(Symbol::mark_of(4).to_string(), "P4");
        assert_eq!(Symbol::Full.to_string(), "#");
    }
}
