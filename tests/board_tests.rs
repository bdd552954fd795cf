//! Single-level board behavior through the public API.
//!
//! Construction, move application and undo, win and draw detection on
//! flat boards of various shapes.

use rust_nttt::core::{BoardConfig, Error, LayerConfig, Move, NodeSpec, Position, Symbol};
use rust_nttt::node::{Board, Placeable};
use rust_nttt::GameResult;

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

fn a() -> Symbol {
    Symbol::mark_of(0)
}

fn b() -> Symbol {
    Symbol::mark_of(1)
}

fn flat(rows: usize, cols: usize, streak: usize) -> Board {
    Board::new(LayerConfig::new(rows, cols, streak), &NodeSpec::Cell).unwrap()
}

fn play(board: &mut Board, symbol: Symbol, row: usize, col: usize) {
    board
        .make_move(Move::at(&[p(row, col)], symbol).view())
        .unwrap();
}

/// Top row completed on the fifth move; nothing is legal afterwards.
#[test]
fn test_classic_top_row_scenario() {
    let mut board = flat(3, 3, 3);
    play(&mut board, a(), 0, 0);
    play(&mut board, b(), 1, 1);
    play(&mut board, a(), 0, 1);
    play(&mut board, b(), 1, 2);
    assert_eq!(board.winner(), Symbol::Empty);
    assert_eq!(board.legal_moves(a()).len(), 5);

    play(&mut board, a(), 0, 2);

    assert_eq!(board.winner(), a());
    assert_eq!(board.final_symbol(), Some(a()));
    assert!(board.legal_moves(b()).is_empty());
    assert!(board.legal_moves(a()).is_empty());
    assert_eq!(board.history().len(), 5);
}

/// Every line of length k wins; every line of length k-1 does not.
#[test]
fn test_every_line_on_4x4_streak_3() {
    let lines: Vec<Vec<(usize, usize)>> = vec![
        vec![(2, 1), (2, 2), (2, 3)],
        vec![(0, 3), (1, 3), (2, 3)],
        vec![(1, 0), (2, 1), (3, 2)],
        vec![(0, 3), (1, 2), (2, 1)],
    ];

    for line in lines {
        let mut board = flat(4, 4, 3);
        for &(row, col) in &line[..2] {
            play(&mut board, b(), row, col);
        }
        assert_eq!(board.final_symbol(), None, "two of {line:?} is not a win");

        let (row, col) = line[2];
        play(&mut board, b(), row, col);
        assert_eq!(board.final_symbol(), Some(b()), "{line:?} should win");
    }
}

#[test]
fn test_rectangular_board() {
    let mut board = flat(2, 5, 4);
    for col in 1..4 {
        play(&mut board, a(), 1, col);
    }
    assert_eq!(board.winner(), Symbol::Empty);
    play(&mut board, b(), 0, 0);
    assert_eq!(board.winner(), Symbol::Empty);
    play(&mut board, a(), 1, 4);
    assert_eq!(board.winner(), a());

    // Out of range on the short axis.
    assert!(matches!(
        board.make_move(Move::at(&[p(2, 0)], b()).view()),
        Err(Error::OutOfBounds { rows: 2, cols: 5, .. })
    ));
}

#[test]
fn test_draw_is_reported_as_full() {
    // A B A
    // A B B
    // B A A
    let mut board = flat(3, 3, 3);
    let order = [
        (a(), 0, 0),
        (b(), 0, 1),
        (a(), 0, 2),
        (b(), 1, 1),
        (a(), 1, 0),
        (b(), 1, 2),
        (a(), 2, 1),
        (b(), 2, 0),
        (a(), 2, 2),
    ];
    for (symbol, row, col) in order {
        assert_eq!(board.final_symbol(), None);
        play(&mut board, symbol, row, col);
    }

    assert_eq!(board.symbol(), Symbol::Full);
    assert_eq!(board.final_symbol(), Some(Symbol::Full));
    assert_eq!(board.result(), Some(GameResult::Draw));
    assert!(board.legal_moves(a()).is_empty());
}

#[test]
fn test_failed_moves_leave_board_untouched() {
    let mut board = flat(3, 3, 3);
    play(&mut board, a(), 1, 1);
    let before = board.clone();

    let attempts = [
        Move::at(&[p(1, 1)], b()),
        Move::at(&[p(3, 1)], b()),
        Move::at(&[p(0, 0), p(0, 0)], b()),
        Move::at(&[], b()),
        Move::at(&[p(0, 0)], Symbol::Empty),
    ];
    for mv in attempts {
        let err = board.make_move(mv.view()).unwrap_err();
        assert!(err.is_invalid_move(), "{err} should reject {mv}");
        assert_eq!(board, before);
        assert_eq!(board.history(), before.history());
    }
}

#[test]
fn test_undo_in_reverse_order() {
    let mut board = flat(3, 3, 3);
    let moves = [
        Move::at(&[p(0, 0)], a()),
        Move::at(&[p(2, 2)], b()),
        Move::at(&[p(0, 1)], a()),
        Move::at(&[p(2, 1)], b()),
        Move::at(&[p(0, 2)], a()),
    ];
    let mut snapshots = Vec::new();
    for mv in &moves {
        snapshots.push(board.clone());
        board.make_move(mv.view()).unwrap();
    }
    assert_eq!(board.symbol(), a());

    for mv in moves.iter().rev() {
        board.undo_move(mv.view()).unwrap();
        let snapshot = snapshots.pop().unwrap();
        assert_eq!(board, snapshot);
        assert_eq!(board.symbol(), snapshot.symbol());
    }
    assert!(board.history().is_empty());
    assert_eq!(board.symbol(), Symbol::Empty);
}

#[test]
fn test_undo_mismatch_message() {
    let mut board = flat(3, 3, 3);
    let played = Move::at(&[p(0, 0)], a());
    board.make_move(played.view()).unwrap();

    let err = board
        .undo_move(Move::at(&[p(0, 0)], b()).view())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unable to undo move O:(0, 0), last played move was X:(0, 0)"
    );
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_three_player_marks() {
    let mut board = Board::from_config(&BoardConfig::classic().with_player_count(3)).unwrap();
    let c = Symbol::mark_of(2);
    for row in 0..3 {
        play(&mut board, c, row, 0);
    }
    assert_eq!(board.final_symbol(), Some(c));
    assert_eq!(c.to_string(), "P2");
}
