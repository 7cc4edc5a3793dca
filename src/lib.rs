//! Tic-tac-toe board model and game-theoretically optimal move search
//!
//! This crate provides:
//! - An immutable, fully validated board representation with a cached
//!   outcome and threat map
//! - An exhaustive alpha-beta minimax search returning the optimal move for
//!   the side to move
//! - A thin CLI shell for playing games and analyzing positions

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod minimax;

pub use board::{Board, Cell, Outcome, Player, CELL_COUNT, SIZE};
pub use error::{Error, Result};
pub use game::{Game, Move};
pub use minimax::{best_move, BestMove};
