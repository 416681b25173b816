//! The candidate grid threaded through a solve attempt.

use crate::{digit_set::DigitSet, position::Position};

/// A 9×9 grid of candidate [`DigitSet`]s.
///
/// This is the working state of a solve attempt: one candidate mask per cell,
/// with accessors for the three region kinds (row, column, 3×3 box) and bulk
/// region updates for propagating eliminations.
///
/// # Invariants
///
/// Callers are expected to maintain the elimination discipline: within one
/// solving attempt, cell masks only lose bits, except for the single-bit
/// assignment of a determined cell through [`set`](Self::set). The only way a
/// mask "grows back" is cloning the whole grid before a speculative branch.
/// A cell holding [`DigitSet::EMPTY`] always signals a contradiction.
///
/// # Examples
///
/// ```
/// use bitdoku_core::{Digit, DigitSet, Position, PossibilityGrid};
///
/// let mut grid = PossibilityGrid::new();
/// let pos = Position::new(3, 0);
///
/// // Eliminate 7 from the whole row containing `pos`.
/// let keep = DigitSet::from_digit(Digit::D7).complement();
/// grid.apply_to_row(pos, |set| set.intersection(keep));
///
/// assert!(!grid.get(Position::new(8, 0)).contains(Digit::D7));
/// assert!(grid.get(Position::new(8, 1)).contains(Digit::D7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibilityGrid {
    cells: [DigitSet; 81],
}

impl Default for PossibilityGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PossibilityGrid {
    /// Creates a grid with nothing eliminated: every cell holds
    /// [`DigitSet::FULL`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Returns the candidate set at a position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> DigitSet {
        self.cells[pos.cell_index() as usize]
    }

    /// Overwrites the candidate set at a position.
    ///
    /// This is the exclusive-owner write used to pin a determined cell to its
    /// singleton mask.
    pub const fn set(&mut self, pos: Position, set: DigitSet) {
        self.cells[pos.cell_index() as usize] = set;
    }

    /// Returns the 9 candidate sets of the row containing `pos`, ordered by
    /// column.
    #[must_use]
    pub fn row_sets(&self, pos: Position) -> [DigitSet; 9] {
        std::array::from_fn(|x| {
            #[expect(clippy::cast_possible_truncation)]
            let x = x as u8;
            self.get(Position::new(x, pos.y()))
        })
    }

    /// Returns the 9 candidate sets of the column containing `pos`, ordered
    /// by row.
    #[must_use]
    pub fn column_sets(&self, pos: Position) -> [DigitSet; 9] {
        std::array::from_fn(|y| {
            #[expect(clippy::cast_possible_truncation)]
            let y = y as u8;
            self.get(Position::new(pos.x(), y))
        })
    }

    /// Returns the 9 candidate sets of the 3×3 box containing `pos`, in
    /// row-major order within the box.
    #[must_use]
    pub fn box_sets(&self, pos: Position) -> [DigitSet; 9] {
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            self.get(Position::from_box(pos.box_index(), i))
        })
    }

    /// Replaces every candidate set in the row containing `pos` with
    /// `f(existing)`.
    pub fn apply_to_row(&mut self, pos: Position, f: impl Fn(DigitSet) -> DigitSet) {
        for x in 0..9 {
            let p = Position::new(x, pos.y());
            self.set(p, f(self.get(p)));
        }
    }

    /// Replaces every candidate set in the column containing `pos` with
    /// `f(existing)`.
    pub fn apply_to_column(&mut self, pos: Position, f: impl Fn(DigitSet) -> DigitSet) {
        for y in 0..9 {
            let p = Position::new(pos.x(), y);
            self.set(p, f(self.get(p)));
        }
    }

    /// Replaces every candidate set in the box containing `pos` with
    /// `f(existing)`.
    pub fn apply_to_box(&mut self, pos: Position, f: impl Fn(DigitSet) -> DigitSet) {
        for i in 0..9 {
            let p = Position::from_box(pos.box_index(), i);
            self.set(p, f(self.get(p)));
        }
    }

    /// Builds a new grid by applying a fallible function to every cell of
    /// this one, in row-major order.
    ///
    /// The operation is atomic: if `f` fails for any cell, the error is
    /// returned and no partial grid escapes.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map_cells<E>(
        &self,
        mut f: impl FnMut(Position, DigitSet) -> Result<DigitSet, E>,
    ) -> Result<Self, E> {
        let mut cells = [DigitSet::EMPTY; 81];
        for pos in Position::ALL {
            cells[usize::from(pos.cell_index())] = f(pos, self.get(pos))?;
        }
        Ok(Self { cells })
    }

    /// Returns the first cell in row-major order whose value is not yet
    /// determined, or `None` if every cell holds a singleton mask.
    ///
    /// Cells holding [`DigitSet::EMPTY`] count as undetermined.
    #[must_use]
    pub fn first_undetermined(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| self.get(pos).as_single().is_none())
    }

    /// Returns `true` if every cell holds a singleton mask.
    #[must_use]
    pub fn is_fully_determined(&self) -> bool {
        self.first_undetermined().is_none()
    }

    /// Returns `true` if any cell holds [`DigitSet::EMPTY`].
    #[must_use]
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|set| set.is_empty())
    }

    /// Returns `true` if the grid represents a valid Sudoku: within every
    /// row, column, and box, the determined (single-bit) cells have pairwise
    /// distinct values.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for i in 0..9 {
            let anchor_row = Position::new(0, i);
            let anchor_column = Position::new(i, 0);
            let anchor_box = Position::from_box(i, 0);
            if !region_is_distinct(&self.row_sets(anchor_row))
                || !region_is_distinct(&self.column_sets(anchor_column))
                || !region_is_distinct(&self.box_sets(anchor_box))
            {
                return false;
            }
        }
        true
    }
}

/// Checks that the determined cells of one region hold pairwise distinct
/// digits.
fn region_is_distinct(sets: &[DigitSet; 9]) -> bool {
    let mut seen = DigitSet::EMPTY;
    for set in sets {
        if let Some(digit) = set.as_single() {
            if seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
    }
    true
}
