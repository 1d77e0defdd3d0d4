//! Console rendering for interactive play.

use std::io::Write;

use crate::{
    Result,
    ports::BoardDisplay,
    tictactoe::{BoardState, Cell, GameOutcome, board::BOARD_SIZE},
};

const SEPARATOR: &str = "-------------";

/// Writes boards as a framed grid to any writer (stdout in the binary).
///
/// ```text
/// -------------
/// | x | o |   |
/// -------------
/// ```
pub struct ConsoleDisplay<W: Write> {
    out: W,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn token(cell: Cell) -> char {
    match cell {
        Cell::X => 'x',
        Cell::O => 'o',
        Cell::Empty => ' ',
    }
}

impl<W: Write> BoardDisplay for ConsoleDisplay<W> {
    fn show_board(&mut self, board: &BoardState) -> Result<()> {
        for row in board.cells.chunks(BOARD_SIZE) {
            writeln!(self.out, "{SEPARATOR}")?;
            let mut line = String::from("| ");
            for &cell in row {
                line.push(token(cell));
                line.push_str(" | ");
            }
            writeln!(self.out, "{}", line.trim_end())?;
        }
        writeln!(self.out, "{SEPARATOR}")?;
        Ok(())
    }

    fn announce(&mut self, outcome: GameOutcome, winner_name: Option<&str>) -> Result<()> {
        match (outcome, winner_name) {
            (GameOutcome::Win(_), Some(name)) => writeln!(self.out, "{name} wins!")?,
            (GameOutcome::Win(player), None) => writeln!(self.out, "{player} wins!")?,
            _ => writeln!(self.out, "tie!")?,
        }
        Ok(())
    }
}
