//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Player, coords, position_from_coords};
pub use game::GameOutcome;
pub use lines::{LineAnalyzer, WINNING_LINES};
