//! Display port for interactive play

use crate::{Result, tictactoe::BoardState, tictactoe::GameOutcome};

/// Renders boards and results to whoever is playing
pub trait BoardDisplay {
    /// Show the board after a move.
    fn show_board(&mut self, board: &BoardState) -> Result<()>;

    /// Announce a finished game.
    ///
    /// `winner_name` is the name of the winning learner, `None` on a draw.
    fn announce(&mut self, outcome: GameOutcome, winner_name: Option<&str>) -> Result<()>;
}
