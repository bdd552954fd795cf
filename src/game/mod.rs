//! Turn-taking on top of a root [`Board`](crate::node::Board).
//!
//! The board itself only checks bounds and occupancy. A [`Game`] adds whose
//! turn it is and confines every move to the active region.

pub mod result;
pub mod session;
pub mod playout;

pub use result::GameResult;
pub use session::Game;
pub use playout::random_playout;
