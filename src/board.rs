//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;
use crate::{Error, Result};

/// Side length of the square board. The line tables in [`crate::lines`] are
/// generated from this constant, so nothing else hard-codes the dimension.
pub const SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '_' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, or `None` for an empty cell.
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Unfinished,
    Draw,
    Win(Player),
}

impl Outcome {
    /// True once the game can no longer continue.
    pub fn is_finished(self) -> bool {
        self != Outcome::Unfinished
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unfinished => write!(f, "Game not finished"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Win(player) => write!(f, "{player} wins"),
        }
    }
}

/// An immutable board position.
///
/// A `Board` is fully validated at construction and never mutated: making a
/// move produces a new `Board`. The outcome and the threat map are computed
/// once, at construction, and can therefore never go stale. This matters to
/// the search, which holds many alternative continuations derived from the
/// same ancestor position and must never corrupt sibling branches.
///
/// Whose turn it is follows from the piece counts (X moves first) and is
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    outcome: Outcome,
    x_threats: Vec<(usize, usize)>,
    o_threats: Vec<(usize, usize)>,
}

impl Board {
    /// Create an empty board with X to move.
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; CELL_COUNT])
    }

    /// Create a board from a row-major sequence of cell symbols.
    ///
    /// The sequence must contain exactly [`CELL_COUNT`] symbols out of
    /// `X`/`x`, `O`/`o` and `_`/space. The piece counts must be reachable
    /// from legal play: X and O differ by at most one, with X never behind.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a wrong length, an invalid symbol or
    /// invalid piece counts.
    pub fn from_symbols(symbols: &str) -> Result<Self> {
        let got = symbols.chars().count();
        if got != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got,
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, c) in symbols.chars().enumerate() {
            cells[i] = Cell::from_char(c).ok_or(Error::InvalidSymbol {
                symbol: c,
                position: i,
            })?;
        }

        let (x_count, o_count) = Self::count_pieces(&cells);
        if o_count > x_count || x_count - o_count > 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(Self::from_cells(cells))
    }

    /// Internal constructor for cell arrays already known to satisfy the
    /// count invariant. Evaluates and caches the outcome and threat map.
    fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        let scan = lines::scan(&cells);
        Board {
            cells,
            outcome: scan.outcome,
            x_threats: scan.x_threats,
            o_threats: scan.o_threats,
        }
    }

    fn count_pieces(cells: &[Cell; CELL_COUNT]) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for cell in cells {
            match cell {
                Cell::X => x_count += 1,
                Cell::O => o_count += 1,
                Cell::Empty => {}
            }
        }
        (x_count, o_count)
    }

    /// Piece counts on the board as `(x_count, o_count)`.
    pub fn counts(&self) -> (usize, usize) {
        Self::count_pieces(&self.cells)
    }

    /// Get the cell at a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..SIZE`. Out-of-range access is
    /// a programming error, not a recoverable game condition, so it is
    /// treated like slice indexing.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < SIZE && col < SIZE,
            "coordinate ({row}, {col}) is out of bounds for the {SIZE}x{SIZE} board"
        );
        self.cells[row * SIZE + col]
    }

    /// The cached outcome of this position.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The player whose turn it is, derived from the piece counts.
    ///
    /// Returns `None` once the game is finished. Construction guarantees the
    /// counts are consistent, so an unfinished board always has a mover.
    pub fn side_to_move(&self) -> Option<Player> {
        if self.outcome.is_finished() {
            return None;
        }
        let (x_count, o_count) = self.counts();
        if x_count == o_count {
            Some(Player::X)
        } else if x_count == o_count + 1 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// All empty coordinates in row-major order.
    ///
    /// The order is deterministic on purpose: the search iterates candidate
    /// moves in this order, which fixes its tie-breaking.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| (i / SIZE, i % SIZE))
            .collect()
    }

    /// Coordinates that would complete a line for `player` if filled.
    ///
    /// Sorted row-major and deduplicated. Only meaningful on an unfinished
    /// board: once a line is won the scan short-circuits and both sets are
    /// empty.
    pub fn winning_moves(&self, player: Player) -> &[(usize, usize)] {
        match player {
            Player::X => &self.x_threats,
            Player::O => &self.o_threats,
        }
    }

    /// Place `player`'s piece at a coordinate, returning the new board.
    ///
    /// The receiver is unchanged. The move is legal iff the game is still
    /// running, the target cell is empty and it is `player`'s turn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for a bad coordinate,
    /// [`Error::GameOver`] when the position is already decided,
    /// [`Error::Occupied`] for a non-empty target cell and
    /// [`Error::OutOfTurn`] when it is the opponent's move.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, row: usize, col: usize, player: Player) -> Result<Board> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::OutOfBounds { row, col });
        }
        if self.outcome.is_finished() {
            return Err(Error::GameOver);
        }
        if self.cells[row * SIZE + col] != Cell::Empty {
            return Err(Error::Occupied { row, col });
        }
        if self.side_to_move() != Some(player) {
            return Err(Error::OutOfTurn { player });
        }

        let mut cells = self.cells;
        cells[row * SIZE + col] = player.to_cell();
        Ok(Self::from_cells(cells))
    }

    /// The board as a row-major symbol sequence, `'_'` for empty cells.
    ///
    /// Round-trips through [`Board::from_symbols`].
    pub fn to_symbols(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(2 * SIZE + 3);
        writeln!(f, "{border}")?;
        for row in 0..SIZE {
            write!(f, "|")?;
            for col in 0..SIZE {
                let c = match self.cells[row * SIZE + col] {
                    Cell::Empty => ' ',
                    cell => cell.to_char(),
                };
                write!(f, " {c}")?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "{border}")
    }
}
