//! Constraint-propagation Sudoku solver with backtracking search.
//!
//! The engine seeds a [`PossibilityGrid`](bitdoku_core::PossibilityGrid) from
//! the puzzle's givens, iterates a hidden-single elimination pass to a fixed
//! point, and falls back to recursive guess-and-check search when deduction
//! stalls. See [`Solver`] for the entry points and [`SolverError`] for the
//! failure taxonomy.
//!
//! # Examples
//!
//! ```
//! use bitdoku_core::DigitGrid;
//! use bitdoku_solver::Solver;
//!
//! let puzzle: DigitGrid = "53..7....6..195....98....6.8...6...34..8.3..1\
//!                          7...2...6.6....28....419..5....8..79"
//!     .parse()?;
//! let solved = Solver::new().solve(&puzzle)?;
//! assert_eq!(solved.rows()[0], [5, 3, 4, 6, 7, 8, 9, 1, 2]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    elimination::MAX_PASSES,
    error::SolverError,
    solver::{SolveStats, Solver},
};

mod elimination;
mod error;
mod solver;
