//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};
use crate::types::Fingerprint;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Signed mark used for line sums: X = +1, O = -1, empty = 0
    pub fn signed_value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => -1,
        }
    }

    /// Base-3 digit used by [`Fingerprint`]
    pub(crate) fn digit(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }

    pub(crate) fn from_digit(digit: u32) -> Option<Cell> {
        match digit {
            0 => Some(Cell::Empty),
            1 => Some(Cell::X),
            2 => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X always opens.
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

/// Convert 0-based row and column into a row-major position.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidPosition`] when either coordinate is off the board.
pub fn position_from_coords(row: usize, col: usize) -> Result<usize, crate::Error> {
    if row < BOARD_SIZE && col < BOARD_SIZE {
        Ok(row * BOARD_SIZE + col)
    } else {
        Err(crate::Error::InvalidPosition {
            position: row.saturating_mul(BOARD_SIZE).saturating_add(col),
        })
    }
}

/// Row and column of a row-major position
pub fn coords(position: usize) -> (usize, usize) {
    (position / BOARD_SIZE, position % BOARD_SIZE)
}

/// Complete board state including cells and whose turn it is
///
/// `Copy` keeps scratch boards for one-step lookahead free of allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; CELL_COUNT],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; CELL_COUNT],
            to_move: Player::X,
        }
    }

    /// Build a board from its cells, inferring the side to move from piece counts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] unless X has the same number
    /// of marks as O or exactly one more.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, crate::Error> {
        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();

        let to_move = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        };

        Ok(BoardState { cells, to_move })
    }

    /// Create a board from a string of 9 cells (whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not contain exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts cannot arise with X moving first
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Self::from_cells(cells)
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        pos < CELL_COUNT && self.cells[pos] == Cell::Empty
    }

    /// Empty positions in row-major order; empty when the board is full
    pub fn available_moves(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place `symbol` at `pos` and pass the turn.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board or occupied, or if `symbol` is not
    /// the side to move. Callers choose from [`available_moves`](Self::available_moves).
    pub fn apply_move(&mut self, pos: usize, symbol: Player) {
        assert!(
            self.is_empty(pos),
            "apply_move: position {pos} is not an empty cell"
        );
        assert_eq!(
            symbol, self.to_move,
            "apply_move: {symbol} played out of turn"
        );
        self.cells[pos] = symbol.to_cell();
        self.to_move = symbol.opponent();
    }

    /// Checked variant of [`apply_move`](Self::apply_move) returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] or [`crate::Error::InvalidMove`]
    /// instead of panicking.
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= CELL_COUNT {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.apply_move(pos, self.to_move);
        Ok(next)
    }

    /// Deterministic key for the cell contents
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::from_cells(&self.cells)
    }

    /// Scan rows, columns, then diagonals for a winner; a full board without
    /// one is a draw.
    pub fn evaluate_outcome(&self) -> GameOutcome {
        if let Some(winner) = LineAnalyzer::first_winner(&self.cells) {
            GameOutcome::Win(winner)
        } else if self.occupied_count() == CELL_COUNT {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.evaluate_outcome().is_terminal()
    }

    /// Get the winner if any
    pub fn winner(&self) -> Option<Player> {
        self.evaluate_outcome().winner()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.to_move, Player::X);
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.evaluate_outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_apply_move_flips_turn() {
        let mut board = BoardState::new();
        board.apply_move(4, Player::X);

        assert_eq!(board.get(4), Cell::X);
        assert_eq!(board.to_move, Player::O);
        assert!(!board.available_moves().contains(&4));
    }

    #[test]
    #[should_panic(expected = "not an empty cell")]
    fn test_apply_move_on_occupied_cell_panics() {
        let mut board = BoardState::new();
        board.apply_move(0, Player::X);
        board.apply_move(0, Player::O);
    }

    #[test]
    #[should_panic(expected = "out of turn")]
    fn test_apply_move_out_of_turn_panics() {
        let mut board = BoardState::new();
        board.apply_move(0, Player::O);
    }

    #[test]
    fn test_make_move_reports_errors() {
        let board = BoardState::new().make_move(0).unwrap();
        assert!(matches!(
            board.make_move(0),
            Err(crate::Error::InvalidMove { position: 0 })
        ));
        assert!(matches!(
            board.make_move(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_win_detection_diagonal() {
        let mut board = BoardState::new();
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(1).unwrap(); // O
        board = board.make_move(4).unwrap(); // X
        board = board.make_move(2).unwrap(); // O
        board = board.make_move(8).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = BoardState::new();
        for pos in [0, 1, 2, 4, 3, 6, 5, 8, 7] {
            board = board.make_move(pos).unwrap();
        }

        assert_eq!(board.evaluate_outcome(), GameOutcome::Draw);
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        // X O X
        // O X O
        // O X X  <- X completes the main diagonal with the ninth mark
        let board = BoardState::from_string("XOXOXOOXX").unwrap();
        assert_eq!(board.evaluate_outcome(), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_from_string() {
        let board = BoardState::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.to_move, Player::O);

        assert!(BoardState::from_string("XO").is_err());
        assert!(BoardState::from_string("XOZ......").is_err());
        assert!(BoardState::from_string("XXX......").is_err());
    }

    #[test]
    fn test_coords_roundtrip() {
        assert_eq!(position_from_coords(1, 2).unwrap(), 5);
        assert_eq!(coords(5), (1, 2));
        assert!(position_from_coords(3, 0).is_err());
    }

    #[test]
    fn test_display() {
        let board = BoardState::from_string("X...O....").unwrap();
        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }
}
