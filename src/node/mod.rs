//! The recursive engine: cells, boards of cells, boards of boards.
//!
//! - [`Placeable`]: the contract every node satisfies
//! - [`Cell`]: a leaf slot
//! - [`Board`]: a grid of [`Node`]s with its own win streak and history
//!
//! Win detection lives in `win`, the active-region rule and legal-move
//! enumeration in `active`; both extend [`Board`].

pub mod placeable;
pub mod cell;
pub mod board;
mod win;
mod active;

pub use placeable::{Availability, NodeRef, Placeable};
pub use cell::Cell;
pub use board::{Board, Node};
