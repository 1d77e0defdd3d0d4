//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Sum of signed marks along a line (X = +1, O = -1, empty = 0)
    pub fn line_sum(cells: &[Cell; 9], line: &[usize; 3]) -> i8 {
        line.iter().map(|&idx| cells[idx].signed_value()).sum()
    }

    /// First completed line in scan order, if any.
    ///
    /// Two completed lines of opposite marks cannot arise from alternating
    /// play; if a hand-built board has both, the earlier line in
    /// [`WINNING_LINES`] wins.
    pub fn first_winner(cells: &[Cell; 9]) -> Option<Player> {
        WINNING_LINES
            .iter()
            .find_map(|line| match Self::line_sum(cells, line) {
                3 => Some(Player::X),
                -3 => Some(Player::O),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_sum_signs() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::line_sum(&cells, &WINNING_LINES[0]), 1);
        assert_eq!(LineAnalyzer::line_sum(&cells, &WINNING_LINES[1]), 0);
    }

    #[test]
    fn test_every_line_detected_for_both_players() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut cells = [Cell::Empty; 9];
                for idx in line {
                    cells[idx] = player.to_cell();
                }
                assert_eq!(LineAnalyzer::first_winner(&cells), Some(player));
            }
        }
    }

    #[test]
    fn test_conflicting_lines_prefer_scan_order() {
        // O O O
        // . . .
        // X X X
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2] {
            cells[idx] = Cell::O;
        }
        for idx in [6, 7, 8] {
            cells[idx] = Cell::X;
        }

        assert_eq!(LineAnalyzer::first_winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(LineAnalyzer::first_winner(&[Cell::Empty; 9]), None);
    }
}
