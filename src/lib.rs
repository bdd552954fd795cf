//! # rust-nttt
//!
//! A generalized N-level recursive tic-tac-toe engine: boards of boards of
//! cells, to any depth, each level with its own grid size and win streak.
//! Ultimate tic-tac-toe is the two-level, 3x3 case.
//!
//! ## Design Principles
//!
//! 1. **Paths, not coordinates**: a move carries one position per level,
//!    outermost first. Each board consumes the head and hands the rest to
//!    the child it names.
//!
//! 2. **Derived state**: a board's symbol (undecided, won, drawn) is always
//!    recomputed from its children after a move or undo, never set directly.
//!
//! 3. **N-Player First**: marks are `Symbol::Mark(PlayerId)`; nothing
//!    assumes exactly two players.
//!
//! ## Architecture
//!
//! - **Closed node hierarchy**: `Node = Cell | Board`, both implementing
//!   [`Placeable`].
//!
//! - **Persistent Data Structures**: children and history live in
//!   `im::Vector`, so cloning a whole game tree is cheap.
//!
//! - **Active region**: the last move's path, minus its head, names where
//!   the next move must land; closed regions fall back to their parent.
//!
//! ## Modules
//!
//! - `core`: Players, symbols, positions, moves, configuration, errors, RNG
//! - `node`: Cells, boards, win detection, legal-move enumeration
//! - `game`: Turn-taking sessions, results, random playouts
//!
//! ```
//! use rust_nttt::{BoardConfig, Game, GameRng, random_playout};
//!
//! let mut game = Game::new(&BoardConfig::default()).unwrap();
//! assert_eq!(game.legal_moves().len(), 81);
//!
//! let result = random_playout(&mut game, &mut GameRng::new(0)).unwrap();
//! assert_eq!(game.result(), Some(result));
//! ```

pub mod core;
pub mod node;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Symbol,
    Position, Path,
    Move, MoveRef,
    BoardConfig, LayerConfig, NodeSpec,
    Error, Result,
    GameRng,
};

pub use crate::node::{Availability, Board, Cell, Node, NodeRef, Placeable};

pub use crate::game::{random_playout, Game, GameResult};
