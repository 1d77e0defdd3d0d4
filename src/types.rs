//! Newtype wrappers for improved type safety and domain modeling.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Cell, board::CELL_COUNT};

/// Number of distinct cell assignments on a 3x3 board (3^9).
const FINGERPRINT_SPACE: u32 = 19_683;

/// Value-table key for a board's cell contents.
///
/// Cells are read in row-major order as base-3 digits (empty = 0, X = 1,
/// O = 2), so equal boards share a key, distinct boards never do, and keys
/// order the same way as the cell sequences they encode. The encoding does
/// not depend on process state and is safe to persist.
///
/// # Examples
///
/// ```
/// use tictactoe_rl::{tictactoe::BoardState, types::Fingerprint};
///
/// let board = BoardState::from_string("X...O....").unwrap();
/// let key = board.fingerprint();
///
/// assert_eq!(key.to_string(), "X...O....");
/// assert_eq!("X...O....".parse::<Fingerprint>().unwrap(), key);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Fingerprint(u32);

impl Fingerprint {
    /// Encode a full grid
    pub fn from_cells(cells: &[Cell; CELL_COUNT]) -> Self {
        Fingerprint(cells.iter().fold(0, |acc, cell| acc * 3 + cell.digit()))
    }

    /// Decode back into the grid it was built from
    pub fn cells(self) -> [Cell; CELL_COUNT] {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut rest = self.0;
        for cell in cells.iter_mut().rev() {
            // Digits are always 0-2 by construction.
            *cell = Cell::from_digit(rest % 3).unwrap_or(Cell::Empty);
            rest /= 3;
        }
        cells
    }

    /// Raw encoded value
    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Fingerprint {
    type Error = crate::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < FINGERPRINT_SPACE {
            Ok(Fingerprint(value))
        } else {
            Err(crate::Error::InvalidFingerprint { value })
        }
    }
}

impl From<Fingerprint> for u32 {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}

impl FromStr for Fingerprint {
    type Err = crate::Error;

    /// Parse the 9-character cell string produced by `Display`.
    ///
    /// Piece counts are not validated; a key may name any grid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
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
        Ok(Self::from_cells(&cells))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::BoardState;

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(BoardState::new().fingerprint().value(), 0);
    }

    #[test]
    fn test_equal_boards_share_fingerprint() {
        let a = BoardState::new().make_move(0).unwrap().make_move(4).unwrap();
        let b = BoardState::from_string("X...O....").unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_all_grids_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for value in 0..FINGERPRINT_SPACE {
            let fp = Fingerprint::try_from(value).unwrap();
            assert_eq!(Fingerprint::from_cells(&fp.cells()), fp);
            assert!(seen.insert(fp.cells()));
        }
    }

    #[test]
    fn test_fingerprint_is_order_preserving() {
        let earlier: Fingerprint = "X........".parse().unwrap();
        let later: Fingerprint = "O........".parse().unwrap();
        let last_cell: Fingerprint = "........O".parse().unwrap();
        assert!(last_cell < earlier);
        assert!(earlier < later);
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        assert!(Fingerprint::try_from(FINGERPRINT_SPACE).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        assert!("XO".parse::<Fingerprint>().is_err());
        assert!("XOZ......".parse::<Fingerprint>().is_err());
    }
}
