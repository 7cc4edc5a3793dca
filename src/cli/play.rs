//! Interactive game loop

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::board::{Board, Cell, Player, SIZE};
use crate::game::Game;
use crate::minimax;

/// Who supplies moves for a side. A closed set: the core search stays
/// ignorant of controllers, and weaker computer tiers are deliberately not
/// offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Controller {
    /// Prompt for coordinates on stdin
    Human,
    /// Fully-informed minimax search
    Minimax,
}

impl std::fmt::Display for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Controller::Human => write!(f, "human"),
            Controller::Minimax => write!(f, "minimax"),
        }
    }
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Controller for the X player
    #[arg(long, value_enum, default_value_t = Controller::Human)]
    pub x: Controller,

    /// Controller for the O player
    #[arg(long, value_enum, default_value_t = Controller::Minimax)]
    pub o: Controller,

    /// Starting position as a 9-symbol row-major sequence ('X', 'O', '_')
    #[arg(long)]
    pub board: Option<String>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let initial = match &args.board {
        Some(symbols) => Board::from_symbols(symbols)
            .with_context(|| format!("invalid starting board '{symbols}'"))?,
        None => Board::new(),
    };

    let mut game = Game::from_board(initial);
    println!("{}", game.board());

    while let Some(player) = game.board().side_to_move() {
        let controller = match player {
            Player::X => args.x,
            Player::O => args.o,
        };
        let (row, col) = choose_move(controller, player, game.board())?;
        game.play(row, col)
            .with_context(|| format!("move ({row}, {col}) for {player} failed"))?;
        println!("{}", game.board());
    }

    println!("{}", game.outcome());
    Ok(())
}

/// Dispatch a move request to the side's controller.
fn choose_move(controller: Controller, player: Player, board: &Board) -> Result<(usize, usize)> {
    match controller {
        Controller::Human => prompt_for_move(player, board),
        Controller::Minimax => {
            println!("Making move level \"hard\"");
            let best = minimax::best_move(board)?;
            Ok((best.row, best.col))
        }
    }
}

/// Prompt until the human enters a legal move as 1-based `row col`.
///
/// All correction happens here: the board itself rejects illegal moves but
/// never reprompts.
fn prompt_for_move(player: Player, board: &Board) -> Result<(usize, usize)> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter the coordinates for {player} (row col): ");
        io::stdout().flush().context("failed to flush stdout")?;

        let line = match lines.next() {
            Some(line) => line.context("failed to read from stdin")?,
            None => anyhow::bail!("stdin closed before the game finished"),
        };

        match parse_coordinates(&line) {
            Ok((row, col)) => {
                if board.cell(row, col) != Cell::Empty {
                    println!("This cell is occupied! Choose another one!");
                    continue;
                }
                return Ok((row, col));
            }
            Err(message) => println!("{message}"),
        }
    }
}

fn parse_coordinates(line: &str) -> std::result::Result<(usize, usize), String> {
    let mut parts = line.split_whitespace();
    let row = parts.next();
    let col = parts.next();
    let (Some(row), Some(col)) = (row, col) else {
        return Err("You should enter two numbers!".to_string());
    };
    if parts.next().is_some() {
        return Err("You should enter two numbers!".to_string());
    }

    let parse = |s: &str| -> std::result::Result<usize, String> {
        let value: usize = s
            .parse()
            .map_err(|_| "You should enter numbers!".to_string())?;
        if value < 1 || value > SIZE {
            return Err(format!("Coordinates should be from 1 to {SIZE}!"));
        }
        Ok(value - 1)
    };

    Ok((parse(row)?, parse(col)?))
}
