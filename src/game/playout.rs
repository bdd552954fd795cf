//! Uniform random playouts.
//!
//! Not a search: every legal move is equally likely. Used to exercise the
//! engine end to end from tests and benchmarks.

use tracing::{debug, instrument};

use crate::core::{Error, GameRng, Result};

use super::result::GameResult;
use super::session::Game;

/// Play uniformly random legal moves until the game is decided.
///
/// An undecided board always has a legal move, so this terminates after at
/// most one move per cell. A failed move, or an undecided board with no
/// legal move, is returned as an error rather than scored.
///
/// ```
/// use rust_nttt::core::{BoardConfig, GameRng};
/// use rust_nttt::game::{random_playout, Game};
///
/// let mut game = Game::new(&BoardConfig::default()).unwrap();
/// let result = random_playout(&mut game, &mut GameRng::new(7)).unwrap();
/// assert!(game.is_over());
/// assert_eq!(game.result(), Some(result));
/// ```
#[instrument(skip(game, rng), fields(seed = rng.seed()))]
pub fn random_playout(game: &mut Game, rng: &mut GameRng) -> Result<GameResult> {
    loop {
        if let Some(result) = game.result() {
            debug!(%result, moves = game.history().len(), "playout finished");
            return Ok(result);
        }

        let moves = game.legal_moves();
        let mv = rng.pick(&moves).cloned().ok_or(Error::NoLegalMoves)?;
        game.play(mv)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, LayerConfig, Symbol};
    use crate::node::Placeable;

    #[test]
    fn test_playout_is_deterministic() {
        let config = BoardConfig::default();

        let mut a = Game::new(&config).unwrap();
        let mut b = Game::new(&config).unwrap();
        let ra = random_playout(&mut a, &mut GameRng::new(42)).unwrap();
        let rb = random_playout(&mut b, &mut GameRng::new(42)).unwrap();

        assert_eq!(ra, rb);
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_playout_reaches_a_result() {
        for seed in 0..20 {
            let mut game = Game::new(&BoardConfig::classic()).unwrap();
            let result = random_playout(&mut game, &mut GameRng::new(seed)).unwrap();
            assert!(game.is_over());
            assert_eq!(game.result(), Some(result));
            assert!(game.history().len() <= 9);
        }
    }

    #[test]
    fn test_playout_on_rectangular_layers() {
        let config = BoardConfig::new(vec![LayerConfig::new(2, 3, 2), LayerConfig::new(3, 2, 2)]);
        let mut game = Game::new(&config).unwrap();
        random_playout(&mut game, &mut GameRng::new(3)).unwrap();

        assert!(game.is_over());
        assert!(game.history().iter().all(|mv| mv.depth() == 2));
    }

    #[test]
    fn test_playout_on_finished_game_is_noop() {
        let mut game = Game::new(&BoardConfig::classic()).unwrap();
        let first = random_playout(&mut game, &mut GameRng::new(1)).unwrap();
        let len = game.history().len();

        assert_eq!(random_playout(&mut game, &mut GameRng::new(2)), Ok(first));
        assert_eq!(game.history().len(), len);
    }

    #[test]
    fn test_playout_draw_means_a_full_board() {
        let config = BoardConfig::new(vec![LayerConfig::new(3, 3, 3), LayerConfig::new(2, 2, 2)]);
        for seed in 0..30 {
            let mut game = Game::new(&config).unwrap();
            let result = random_playout(&mut game, &mut GameRng::new(seed)).unwrap();

            assert_eq!(result == GameResult::Draw, game.board().symbol() == Symbol::Full);
            assert_eq!(GameResult::from_symbol(game.board().symbol()), Some(result));
        }
    }
}
