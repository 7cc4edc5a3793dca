//! Exhaustive alpha-beta minimax over the full game tree
//!
//! X is the maximizing player and O the minimizing player by convention,
//! independent of which side a caller drives. The tree is at most
//! `CELL_COUNT` plies deep, so the search always runs to completion.

use crate::board::{Board, Outcome, Player};
use crate::{Error, Result};

/// Terminal value of a won game, from X's perspective.
const WIN_VALUE: i32 = 1;

/// The best move found for a position, with the position's game-theoretic
/// value from X's perspective (`+1` X wins, `0` draw, `-1` O wins under
/// optimal play).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub row: usize,
    pub col: usize,
    pub value: i32,
}

/// Find the optimal move for the side to move.
///
/// Candidates are explored in row-major order and the best-so-far move is
/// replaced only on strict improvement, so among equally good moves the
/// first one found is returned. The result is fully deterministic.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`] if the game is already over. Callers
/// should check [`Board::outcome`] first.
pub fn best_move(board: &Board) -> Result<BestMove> {
    if board.side_to_move().is_none() {
        return Err(Error::NoValidMoves);
    }

    let (value, chosen) = search(board, i32::MIN, i32::MAX)?;

    // The root window is maximally wide, so the first candidate strictly
    // improves on it and a move is always recorded.
    let (row, col) = chosen.ok_or(Error::NoValidMoves)?;
    Ok(BestMove { row, col, value })
}

fn terminal_value(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Win(Player::X) => Some(WIN_VALUE),
        Outcome::Win(Player::O) => Some(-WIN_VALUE),
        Outcome::Draw => Some(0),
        Outcome::Unfinished => None,
    }
}

/// Evaluate a position within an `(alpha, beta)` window.
///
/// Returns the node's value (alpha for a maximizing node, beta for a
/// minimizing node) and the move that last tightened the window, if any.
/// Only the root caller uses the move; inner nodes may legitimately finish
/// with `None` when an inherited bound is never beaten.
fn search(
    board: &Board,
    mut alpha: i32,
    mut beta: i32,
) -> Result<(i32, Option<(usize, usize)>)> {
    if let Some(value) = terminal_value(board.outcome()) {
        return Ok((value, None));
    }

    // An unfinished board always has a mover; construction enforces the
    // count invariant that guarantees it.
    let mover = board.side_to_move().ok_or(Error::NoValidMoves)?;
    let maximizing = mover == Player::X;
    let mut best: Option<(usize, usize)> = None;

    for (row, col) in board.empty_cells() {
        let child = board.place(row, col, mover)?;
        let (value, _) = search(&child, alpha, beta)?;

        if maximizing && value > alpha {
            alpha = value;
            best = Some((row, col));
        } else if !maximizing && value < beta {
            beta = value;
            best = Some((row, col));
        }

        // Alpha only rises and beta only falls; once they cross, no
        // remaining sibling can change the value returned to the parent.
        if beta <= alpha {
            break;
        }
    }

    Ok((if maximizing { alpha } else { beta }, best))
}
