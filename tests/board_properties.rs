//! Board model properties checked over every reachable position.

use std::collections::HashSet;

use tictactoe::{Board, Cell, Outcome, Player, SIZE};

/// Which players own a complete line, recomputed independently of the
/// board's cached outcome.
fn line_winners(board: &Board) -> (bool, bool) {
    let mut x_wins = false;
    let mut o_wins = false;

    let mut lines: Vec<Vec<(usize, usize)>> = Vec::new();
    for i in 0..SIZE {
        lines.push((0..SIZE).map(|j| (i, j)).collect());
        lines.push((0..SIZE).map(|j| (j, i)).collect());
    }
    lines.push((0..SIZE).map(|i| (i, i)).collect());
    lines.push((0..SIZE).map(|i| (SIZE - 1 - i, i)).collect());

    for line in lines {
        if line.iter().all(|&(r, c)| board.cell(r, c) == Cell::X) {
            x_wins = true;
        }
        if line.iter().all(|&(r, c)| board.cell(r, c) == Cell::O) {
            o_wins = true;
        }
    }

    (x_wins, o_wins)
}

fn check_position(board: &Board) {
    let (x_wins, o_wins) = line_winners(board);

    // Legal play can never produce two winners.
    assert!(
        !(x_wins && o_wins),
        "both players have winning lines on {}",
        board.to_symbols()
    );

    // The cached outcome agrees with an independent line recount.
    match board.outcome() {
        Outcome::Win(Player::X) => assert!(x_wins),
        Outcome::Win(Player::O) => assert!(o_wins),
        Outcome::Draw => {
            assert!(!x_wins && !o_wins);
            assert!(board.empty_cells().is_empty());
        }
        Outcome::Unfinished => {
            assert!(!x_wins && !o_wins);
            assert!(!board.empty_cells().is_empty());
        }
    }

    // The cached outcome agrees with a fresh construction from symbols.
    let fresh = Board::from_symbols(&board.to_symbols()).unwrap();
    assert_eq!(fresh.outcome(), board.outcome());

    // Every threat coordinate is empty and actually wins when played.
    if let Some(player) = board.side_to_move() {
        for &(row, col) in board.winning_moves(player) {
            assert_eq!(board.cell(row, col), Cell::Empty);
            let next = board.place(row, col, player).unwrap();
            assert_eq!(next.outcome(), Outcome::Win(player));
        }
    }
}

fn explore(board: &Board, seen: &mut HashSet<String>) {
    if !seen.insert(board.to_symbols()) {
        return;
    }

    check_position(board);

    if let Some(player) = board.side_to_move() {
        for (row, col) in board.empty_cells() {
            let child = board.place(row, col, player).unwrap();
            explore(&child, seen);
        }
    }
}

#[test]
fn every_reachable_position_satisfies_the_board_invariants() {
    let mut seen = HashSet::new();
    explore(&Board::new(), &mut seen);

    // All reachable tic-tac-toe positions, a well-known count.
    assert_eq!(seen.len(), 5478);
}

#[test]
fn rejected_inputs_never_produce_a_board() {
    for bad in [
        "",
        "XO",
        "XOXOXOXOXO",
        "XOZ______",
        "XX_______",  // X ahead by two
        "O________",  // O ahead of X
        "XOXOXOXOO",  // O ahead on a full board
    ] {
        assert!(
            Board::from_symbols(bad).is_err(),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn immutability_isolates_sibling_continuations() {
    let parent = Board::from_symbols("X___O____").unwrap();
    let left = parent.place(0, 1, Player::X).unwrap();
    let right = parent.place(2, 2, Player::X).unwrap();

    // Neither child sees the other's move, and the parent is untouched.
    assert_eq!(left.cell(2, 2), Cell::Empty);
    assert_eq!(right.cell(0, 1), Cell::Empty);
    assert_eq!(parent.to_symbols(), "X___O____");
}
