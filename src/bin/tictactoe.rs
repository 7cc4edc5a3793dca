//! Tic-tac-toe CLI - play against the optimal minimax player or analyze
//! positions.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe with an optimal minimax opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game with a chosen controller per side
    Play(tictactoe::cli::play::PlayArgs),

    /// Analyze a position: outcome, threats and the optimal move
    Analyze(tictactoe::cli::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tictactoe::cli::play::execute(args),
        Commands::Analyze(args) => tictactoe::cli::analyze::execute(args),
    }
}
