//! Property tests over random legal play.

use proptest::prelude::*;

use rust_nttt::core::{BoardConfig, GameRng, LayerConfig, Symbol};
use rust_nttt::game::{random_playout, Game};
use rust_nttt::node::{Board, Placeable};

fn layer() -> impl Strategy<Value = LayerConfig> {
    (1usize..=4, 1usize..=4, 1usize..=4)
        .prop_map(|(rows, cols, streak)| LayerConfig::new(rows, cols, streak))
}

fn config() -> impl Strategy<Value = BoardConfig> {
    (prop::collection::vec(layer(), 1..=2), 1usize..=3)
        .prop_map(|(layers, players)| BoardConfig::new(layers).with_player_count(players))
}

/// Play up to `steps` random legal moves from a fresh game.
fn advance(config: &BoardConfig, seed: u64, steps: usize) -> Game {
    let mut game = Game::new(config).unwrap();
    let mut rng = GameRng::new(seed);
    for _ in 0..steps {
        let moves = game.legal_moves();
        let Some(mv) = rng.pick(&moves).cloned() else {
            break;
        };
        game.play(mv).unwrap();
    }
    game
}

proptest! {
    #[test]
    fn make_then_undo_restores_board(config in config(), seed in 0u64..1_000, steps in 0usize..20) {
        let game = advance(&config, seed, steps);
        let board: &Board = game.board();
        let symbol = Symbol::from(game.current_player());

        for mv in board.legal_moves(symbol) {
            let mut copy = board.clone();
            copy.make_move(mv.view()).unwrap();
            copy.undo_move(mv.view()).unwrap();
            prop_assert_eq!(&copy, board);
            prop_assert_eq!(copy.symbol(), board.symbol());
            prop_assert_eq!(copy.history(), board.history());
        }
    }

    #[test]
    fn played_moves_cannot_be_repeated(config in config(), seed in 0u64..1_000, steps in 1usize..30) {
        let game = advance(&config, seed, steps);
        let mut board = game.board().clone();

        for mv in game.history() {
            let retry = mv.clone().with_symbol(Symbol::mark_of(0));
            prop_assert!(board.make_move(retry.view()).is_err());
        }
        prop_assert_eq!(&board, game.board());
    }

    #[test]
    fn legal_moves_are_full_paths(config in config(), seed in 0u64..1_000, steps in 0usize..20) {
        let game = advance(&config, seed, steps);
        let depth = config.depth();

        for mv in game.legal_moves() {
            prop_assert_eq!(mv.depth(), depth);
            let target = game.board().sub_board(mv.path()).unwrap();
            prop_assert!(target.symbol().is_empty());
        }
    }

    #[test]
    fn playouts_terminate_consistently(config in config(), seed in 0u64..1_000) {
        let mut game = Game::new(&config).unwrap();
        let cells: usize = config.layers.iter().map(LayerConfig::child_count).product();

        let result = random_playout(&mut game, &mut GameRng::new(seed)).unwrap();

        prop_assert!(game.is_over());
        prop_assert_eq!(game.result(), Some(result));
        prop_assert!(game.history().len() <= cells);
        prop_assert!(game.legal_moves().is_empty());
    }
}
