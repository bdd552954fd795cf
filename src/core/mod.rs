//! Core value types: players, symbols, positions, moves, configuration,
//! errors and RNG.
//!
//! Nothing here knows about the recursive board; these are the values the
//! `node` module moves around.

pub mod player;
pub mod symbol;
pub mod position;
pub mod moves;
pub mod config;
pub mod error;
pub mod rng;

pub use player::PlayerId;
pub use symbol::Symbol;
pub use position::{Path, Position};
pub use moves::{Move, MoveRef};
pub use config::{BoardConfig, LayerConfig, NodeSpec};
pub use error::{Error, Result};
pub use rng::GameRng;
