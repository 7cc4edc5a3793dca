//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome, Player};
use crate::Result;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// A game in progress: the current position plus the move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Start a fresh game from the empty board.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continue a game from an existing position. History starts empty.
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            moves: Vec::new(),
        }
    }

    /// Play a move for the side whose turn it is.
    ///
    /// # Errors
    ///
    /// Propagates the board's placement errors (game over, occupied cell,
    /// out-of-bounds coordinate).
    pub fn play(&mut self, row: usize, col: usize) -> Result<()> {
        let player = self.board.side_to_move().ok_or(crate::Error::GameOver)?;
        self.board = self.board.place(row, col, player)?;
        self.moves.push(Move { row, col, player });
        Ok(())
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cached outcome of the current position.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Moves played so far, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_play_records_history() {
        let mut game = Game::new();
        game.play(1, 1).unwrap();
        game.play(0, 0).unwrap();

        assert_eq!(game.board().cell(1, 1), Cell::X);
        assert_eq!(game.board().cell(0, 0), Cell::O);
        assert_eq!(
            game.moves(),
            &[
                Move {
                    row: 1,
                    col: 1,
                    player: Player::X
                },
                Move {
                    row: 0,
                    col: 0,
                    player: Player::O
                }
            ]
        );
    }

    #[test]
    fn test_play_to_win() {
        let mut game = Game::new();
        for &(row, col) in &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(row, col).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Win(Player::X));

        let err = game.play(2, 2).unwrap_err();
        assert!(matches!(err, crate::Error::GameOver));
    }

    #[test]
    fn test_failed_move_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(0, 0).unwrap();

        let before = game.clone();
        assert!(game.play(0, 0).is_err());
        assert_eq!(game, before);
    }
}
