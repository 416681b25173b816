//! A 9×9 grid of optional digits.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};

use crate::{digit::Digit, position::Position};

/// A 9×9 grid of optional digits, stored row-major.
///
/// This is the shape of a puzzle: cells holding `Some(digit)` are givens and
/// cells holding `None` are unknown. It is also the shape of any partially
/// known output.
///
/// # Examples
///
/// ```
/// use bitdoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "53..7....6..195....98....6.8...6...34..8.3..1\
///                        7...2...6.6....28....419..5....8..79"
///     .parse()?;
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// # Ok::<(), bitdoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl DigitGrid {
    /// The grid with every cell unknown.
    pub const EMPTY: Self = Self { cells: [None; 81] };

    /// Creates a grid with every cell unknown.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a grid from rows of numeric values, with 0 marking an unknown
    /// cell.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        let mut grid = Self::EMPTY;
        for (y, row) in (0..).zip(&rows) {
            for (x, &value) in (0..).zip(row) {
                if value != 0 {
                    grid.set(Position::new(x, y), Some(Digit::from_value(value)));
                }
            }
        }
        grid
    }

    /// Returns the digit at a position, or `None` if the cell is unknown.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index() as usize]
    }

    /// Sets or clears the digit at a position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.cell_index() as usize] = digit;
    }

    /// Returns the number of known cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

/// Error returned when parsing a [`DigitGrid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseGridError {
    /// The text does not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {len}")]
    BadLength {
        /// Number of cell characters found.
        len: usize,
    },
    /// A cell character is not a digit, `0`, or `.`.
    #[display("invalid cell character {character:?} at cell {index}")]
    BadCharacter {
        /// Row-major index of the offending cell.
        index: usize,
        /// The offending character.
        character: char,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses 81 cell characters in row-major order. Digits 1-9 are givens;
    /// `0` and `.` mark unknown cells. ASCII whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if cells.len() != 81 {
            return Err(ParseGridError::BadLength { len: cells.len() });
        }
        let mut grid = Self::EMPTY;
        for (index, &character) in cells.iter().enumerate() {
            let digit = match character {
                '0' | '.' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character.to_digit(10).unwrap_or_default() as u8;
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::BadCharacter { index, character }),
            };
            grid.cells[index] = digit;
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    /// Formats the grid as 81 characters in row-major order, with `.` for
    /// unknown cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
