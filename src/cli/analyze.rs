//! Position analysis command

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::board::{Board, Outcome, Player};
use crate::minimax;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Board position as a 9-symbol row-major sequence ('X', 'O', '_')
    pub board: String,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Everything the core derives from a single position.
#[derive(Debug, Serialize)]
struct Report {
    board: String,
    outcome: Outcome,
    side_to_move: Option<Player>,
    x_winning_moves: Vec<(usize, usize)>,
    o_winning_moves: Vec<(usize, usize)>,
    best_move: Option<ReportMove>,
}

#[derive(Debug, Serialize)]
struct ReportMove {
    row: usize,
    col: usize,
    value: i32,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_symbols(&args.board)
        .with_context(|| format!("invalid board '{}'", args.board))?;

    let best_move = match board.outcome() {
        Outcome::Unfinished => {
            let best = minimax::best_move(&board)?;
            Some(ReportMove {
                row: best.row,
                col: best.col,
                value: best.value,
            })
        }
        _ => None,
    };

    let report = Report {
        board: board.to_symbols(),
        outcome: board.outcome(),
        side_to_move: board.side_to_move(),
        x_winning_moves: board.winning_moves(Player::X).to_vec(),
        o_winning_moves: board.winning_moves(Player::O).to_vec(),
        best_move,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&board, &report);
    }

    Ok(())
}

fn print_report(board: &Board, report: &Report) {
    println!("{board}");
    println!("Outcome: {}", report.outcome);

    if let Some(player) = report.side_to_move {
        println!("Side to move: {player}");
    }
    for (player, moves) in [
        (Player::X, &report.x_winning_moves),
        (Player::O, &report.o_winning_moves),
    ] {
        if !moves.is_empty() {
            let formatted: Vec<String> = moves
                .iter()
                .map(|&(row, col)| format!("({row}, {col})"))
                .collect();
            println!("{player} wins by playing: {}", formatted.join(", "));
        }
    }

    if let Some(best) = &report.best_move {
        let verdict = match best.value {
            v if v > 0 => "X can force a win",
            v if v < 0 => "O can force a win",
            _ => "optimal play draws",
        };
        println!(
            "Best move: ({}, {}) - {verdict}",
            best.row, best.col
        );
    }
}
