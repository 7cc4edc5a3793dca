//! Scenario tests for the minimax search against literal positions.

use tictactoe::{best_move, Board, Outcome, Player};

/// Drive a game to completion with both sides playing the search's move.
fn self_play(mut board: Board) -> Outcome {
    while let Some(player) = board.side_to_move() {
        let best = best_move(&board).expect("unfinished board must have a move");
        board = board
            .place(best.row, best.col, player)
            .expect("search must return a legal move");
    }
    board.outcome()
}

#[test]
fn self_play_from_empty_board_is_a_draw() {
    assert_eq!(self_play(Board::new()), Outcome::Draw);
}

#[test]
fn self_play_from_every_opening_is_a_draw() {
    // Tic-tac-toe is a solved draw; no opening move throws it away when both
    // sides continue optimally.
    for row in 0..3 {
        for col in 0..3 {
            let board = Board::new().place(row, col, Player::X).unwrap();
            assert_eq!(
                self_play(board),
                Outcome::Draw,
                "opening ({row}, {col}) should still draw"
            );
        }
    }
}

#[test]
fn completes_winning_row() {
    // X X .
    // O O .      X to move wins at (0, 2).
    // . . .
    let board = Board::from_symbols("XX_OO____").unwrap();
    assert_eq!(board.outcome(), Outcome::Unfinished);

    let best = best_move(&board).unwrap();
    assert_eq!((best.row, best.col), (0, 2));
    assert_eq!(best.value, 1);

    let won = board.place(best.row, best.col, Player::X).unwrap();
    assert_eq!(won.outcome(), Outcome::Win(Player::X));
}

#[test]
fn blocks_column_threat() {
    // X . .
    // X O .      O to move has no win of its own and must block (2, 0).
    // . . .
    let board = Board::from_symbols("X__XO____").unwrap();
    assert_eq!(board.side_to_move(), Some(Player::O));
    assert!(board.winning_moves(Player::O).is_empty());
    assert_eq!(board.winning_moves(Player::X), &[(2, 0)]);

    let best = best_move(&board).unwrap();
    assert_eq!((best.row, best.col), (2, 0));
}

#[test]
fn search_result_is_reproducible() {
    let board = Board::from_symbols("X___O____").unwrap();
    let first = best_move(&board).unwrap();

    // Same position constructed through a different path.
    let replayed = Board::new()
        .place(0, 0, Player::X)
        .unwrap()
        .place(1, 1, Player::O)
        .unwrap();
    assert_eq!(best_move(&replayed).unwrap(), first);
}

#[test]
fn search_refuses_finished_positions() {
    let won = Board::from_symbols("XXXOO____").unwrap();
    assert!(best_move(&won).is_err());

    let drawn = Board::from_symbols("XOXXOOOXX").unwrap();
    assert_eq!(drawn.outcome(), Outcome::Draw);
    assert!(best_move(&drawn).is_err());
}
