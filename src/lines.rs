//! Winning line tables and the single-pass board scan
//!
//! The line tables cover every way to win: `SIZE` rows, `SIZE` columns and
//! both diagonals, built once at compile time from the board size constant.

use crate::board::{Cell, Outcome, Player, CELL_COUNT, SIZE};

/// Number of winning lines on the board (rows + columns + two diagonals).
pub const LINE_COUNT: usize = 2 * SIZE + 2;

/// Coordinates of every winning line, as (row, col) pairs.
pub const LINES: [[(usize, usize); SIZE]; LINE_COUNT] = build_lines();

const fn build_lines() -> [[(usize, usize); SIZE]; LINE_COUNT] {
    let mut lines = [[(0, 0); SIZE]; LINE_COUNT];
    let mut i = 0;
    while i < SIZE {
        let mut j = 0;
        while j < SIZE {
            lines[i][j] = (i, j); // row i
            lines[SIZE + i][j] = (j, i); // column i
            j += 1;
        }
        lines[2 * SIZE][i] = (i, i); // main diagonal
        lines[2 * SIZE + 1][i] = (SIZE - 1 - i, i); // anti-diagonal
        i += 1;
    }
    lines
}

/// Result of scanning every line of a board once: the derived outcome plus
/// the threat map (coordinates that would complete a line for each player).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineScan {
    pub outcome: Outcome,
    pub x_threats: Vec<(usize, usize)>,
    pub o_threats: Vec<(usize, usize)>,
}

/// Scan all lines of a cell array, deriving the outcome and the threat map.
///
/// A line fully occupied by one player wins and short-circuits the whole
/// evaluation (at most one such line can exist in a reachable position, so
/// whichever is found first decides). A line with exactly one empty cell and
/// the other `SIZE - 1` cells unanimous contributes that empty coordinate to
/// the owner's threat set. The board is a draw iff no line wins and no empty
/// cell remains anywhere.
pub(crate) fn scan(cells: &[Cell; CELL_COUNT]) -> LineScan {
    let mut x_threats: Vec<(usize, usize)> = Vec::new();
    let mut o_threats: Vec<(usize, usize)> = Vec::new();

    for line in &LINES {
        let mut owner: Option<Player> = None;
        let mut run = 0;
        let mut empty: Option<(usize, usize)> = None;
        let mut mixed = false;

        for &(row, col) in line {
            match cells[row * SIZE + col].to_player() {
                None => empty = Some((row, col)),
                Some(player) => match owner {
                    Some(current) if current == player => run += 1,
                    Some(_) => mixed = true,
                    None => {
                        owner = Some(player);
                        run = 1;
                    }
                },
            }
        }

        if let Some(player) = owner {
            if run == SIZE {
                return LineScan {
                    outcome: Outcome::Win(player),
                    x_threats: Vec::new(),
                    o_threats: Vec::new(),
                };
            }
            if run == SIZE - 1 && !mixed {
                if let Some(coord) = empty {
                    match player {
                        Player::X => x_threats.push(coord),
                        Player::O => o_threats.push(coord),
                    }
                }
            }
        }
    }

    // Set semantics: the same coordinate can complete more than one line.
    for threats in [&mut x_threats, &mut o_threats] {
        threats.sort_unstable();
        threats.dedup();
    }

    let outcome = if cells.contains(&Cell::Empty) {
        Outcome::Unfinished
    } else {
        Outcome::Draw
    };

    LineScan {
        outcome,
        x_threats,
        o_threats,
    }
}
