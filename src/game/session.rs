//! A game session: a root board plus whose turn it is.
//!
//! ```
//! use rust_nttt::core::{BoardConfig, Position};
//! use rust_nttt::game::Game;
//!
//! let mut game = Game::new(&BoardConfig::default()).unwrap();
//! game.play_at(&[Position::new(1, 1), Position::new(0, 2)]).unwrap();
//!
//! // The second player is sent to sub-board (0, 2).
//! assert!(game
//!     .legal_moves()
//!     .iter()
//!     .all(|mv| mv.position() == Some(Position::new(0, 2))));
//! ```

use im::Vector;
use tracing::{debug, instrument};

use crate::core::{BoardConfig, Error, Move, PlayerId, Position, Result};
use crate::node::{Board, Placeable};

use super::result::GameResult;

/// Root board with turn rotation and legality checks.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    player_count: usize,
    current: PlayerId,
}

impl Game {
    /// Start a game. The first player is `PlayerId(0)`.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        let board = Board::from_config(config)?;
        Ok(Self {
            board,
            player_count: config.player_count,
            current: PlayerId::new(0),
        })
    }

    /// The root board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Whether the root board is decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_decided()
    }

    /// Outcome, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.board.result()
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        self.board.history()
    }

    /// Legal moves for the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves(self.current.mark())
    }

    /// Play `mv` for the current player.
    ///
    /// Rejects moves once the game is over, moves carrying another player's
    /// symbol and moves outside the active region. On success the turn
    /// passes to the next player.
    #[instrument(skip(self, mv), fields(mv = %mv, player = %self.current))]
    pub fn play(&mut self, mv: Move) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let expected = self.current.mark();
        if mv.symbol != expected {
            return Err(Error::WrongSymbol {
                expected,
                got: mv.symbol,
            });
        }
        if !self.legal_moves().contains(&mv) {
            return Err(Error::IllegalMove { mv });
        }

        self.board.make_move(mv.view())?;
        self.current = self.current.next(self.player_count);
        debug!(
            symbol = %self.board.symbol(),
            next = %self.current,
            "move played"
        );
        Ok(())
    }

    /// Play at `path` with the current player's symbol.
    pub fn play_at(&mut self, path: &[Position]) -> Result<()> {
        self.play(Move::at(path, self.current.mark()))
    }

    /// Take back the last move and hand the turn back to whoever made it.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move> {
        let last = self.board.last_move().cloned().ok_or(Error::NothingToUndo)?;
        self.board.undo_move(last.view())?;
        if let Some(player) = last.symbol.mark() {
            self.current = player;
        }
        debug!(mv = %last, "move undone");
        Ok(last)
    }
}
