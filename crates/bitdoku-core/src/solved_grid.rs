//! A fully determined 9×9 grid of digits.

use std::fmt::{self, Display};

use crate::{digit::Digit, digit_grid::DigitGrid, digit_set::DigitSet, position::Position};

/// A 9×9 grid with every cell holding a digit, stored row-major.
///
/// This is the shape of a solver result. Constructing one does not by itself
/// guarantee the Sudoku constraints hold; see [`is_valid`](Self::is_valid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    cells: [Digit; 81],
}

impl SolvedGrid {
    /// Creates a solved grid from 81 digits in row-major order.
    #[must_use]
    pub const fn new(cells: [Digit; 81]) -> Self {
        Self { cells }
    }

    /// Returns the digit at a position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Digit {
        self.cells[pos.cell_index() as usize]
    }

    /// Returns the grid as rows of numeric values.
    #[must_use]
    pub fn rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::ALL {
            rows[usize::from(pos.y())][usize::from(pos.x())] = self.get(pos).value();
        }
        rows
    }

    /// Converts to a [`DigitGrid`] with every cell known.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::EMPTY;
        for pos in Position::ALL {
            grid.set(pos, Some(self.get(pos)));
        }
        grid
    }

    /// Returns `true` if every row, column, and 3×3 box contains each digit
    /// 1-9 exactly once.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for i in 0..9 {
            let mut row = DigitSet::EMPTY;
            let mut column = DigitSet::EMPTY;
            let mut box_ = DigitSet::EMPTY;
            for j in 0..9 {
                row.insert(self.get(Position::new(j, i)));
                column.insert(self.get(Position::new(i, j)));
                box_.insert(self.get(Position::from_box(i, j)));
            }
            if row != DigitSet::FULL || column != DigitSet::FULL || box_ != DigitSet::FULL {
                return false;
            }
        }
        true
    }
}

impl Display for SolvedGrid {
    /// Formats the grid as 81 digits in row-major order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.cells {
            Display::fmt(digit, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SolvedGrid {
        let rows = [
            [5, 3, 4, 6, 7, 8, 9, 1, 2],
            [6, 7, 2, 1, 9, 5, 3, 4, 8],
            [1, 9, 8, 3, 4, 2, 5, 6, 7],
            [8, 5, 9, 7, 6, 1, 4, 2, 3],
            [4, 2, 6, 8, 5, 3, 7, 9, 1],
            [7, 1, 3, 9, 2, 4, 8, 5, 6],
            [9, 6, 1, 5, 3, 7, 2, 8, 4],
            [2, 8, 7, 4, 1, 9, 6, 3, 5],
            [3, 4, 5, 2, 8, 6, 1, 7, 9],
        ];
        let mut cells = [Digit::D1; 81];
        for pos in Position::ALL {
            cells[usize::from(pos.cell_index())] =
                Digit::from_value(rows[usize::from(pos.y())][usize::from(pos.x())]);
        }
        SolvedGrid::new(cells)
    }

    #[test]
    fn test_valid_grid_passes() {
        let grid = sample();
        assert!(grid.is_valid());
        assert_eq!(grid.rows()[0], [5, 3, 4, 6, 7, 8, 9, 1, 2]);
    }

    #[test]
    fn test_duplicate_in_row_fails() {
        let mut grid = sample();
        grid.cells[1] = grid.cells[0];
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_to_digit_grid_is_fully_known() {
        let grid = sample();
        assert_eq!(grid.to_digit_grid().given_count(), 81);
    }
}
