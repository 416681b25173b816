//! Board position type.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Equality and hashing are derived structurally, so positions can
/// be used as map keys without relying on tuple semantics.
///
/// # Examples
///
/// ```
/// use bitdoku_core::Position;
///
/// let pos = Position::new(4, 1);
/// assert_eq!(pos.cell_index(), 13);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order (left to right, top to bottom).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a box index (0-8, row-major) and a cell index
    /// within that box (0-8, row-major).
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9);
        Self::new(
            box_index % 3 * 3 + cell_index % 3,
            box_index / 3 * 3 + cell_index / 3,
        )
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index of this position (0-80).
    #[must_use]
    pub const fn cell_index(self) -> u8 {
        self.y * 9 + self.x
    }

    /// Returns the index of the 3×3 box containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns the row-major index of this position within its box (0-8).
    #[must_use]
    pub const fn box_cell_index(self) -> u8 {
        self.y % 3 * 3 + self.x % 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
