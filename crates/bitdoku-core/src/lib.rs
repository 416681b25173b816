//! Core data structures for the Bitdoku Sudoku solver.
//!
//! This crate provides the board representation shared by the solving engine
//! and the command-line tool. It contains no solving logic of its own.
//!
//! # Overview
//!
//! The crate is organized around a handful of small value types:
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`position`]: Board position (x, y) with structural equality and hashing
//! - [`digit_set`]: A set of candidate digits packed into the low 9 bits of a
//!   `u16`, with O(1) set operations
//! - [`digit_grid`]: A 9×9 grid of optional digits, the shape of a puzzle
//! - [`solved_grid`]: A 9×9 grid of digits, the shape of a solution
//! - [`possibility_grid`]: A 9×9 grid of candidate sets with row, column, and
//!   box accessors plus bulk region updates
//!
//! # Examples
//!
//! ```
//! use bitdoku_core::{Digit, DigitSet, Position, PossibilityGrid};
//!
//! let mut grid = PossibilityGrid::new();
//!
//! // Pin a cell to a single digit.
//! grid.set(Position::new(4, 4), DigitSet::from_digit(Digit::D5));
//!
//! // Every other cell still has all nine candidates.
//! assert_eq!(grid.get(Position::new(4, 5)), DigitSet::FULL);
//! ```

pub use self::{
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    digit_set::DigitSet,
    position::Position,
    possibility_grid::PossibilityGrid,
    solved_grid::SolvedGrid,
};

pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod position;
pub mod possibility_grid;
pub mod solved_grid;
