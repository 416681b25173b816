//! Solver failure classification.

use derive_more::{Display, Error};

/// Errors produced while solving a puzzle.
///
/// Two variants are *local-recovery signals* consumed by the enclosing guess
/// loop during search: [`EliminationInconsistency`] and [`GuessingFailure`]
/// mean "this branch is unsatisfiable, try the next guess" and never surface
/// past the top-level solve call. The remaining variants are terminal and
/// reach the caller unchanged.
///
/// [`EliminationInconsistency`]: SolverError::EliminationInconsistency
/// [`GuessingFailure`]: SolverError::GuessingFailure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// The seeded grid already violates the Sudoku constraints: two givens
    /// conflict, or a given leaves some cell with no candidate. No search is
    /// attempted.
    #[display("the given digits conflict with each other")]
    InvalidInput,
    /// A deduction pass derived a contradiction: a cell's mask reached zero,
    /// a region excluded two or more digits from every other cell, or two
    /// determined cells in a region hold the same value.
    #[display("a deduction pass reached a contradiction")]
    EliminationInconsistency,
    /// Every candidate at a branch point led to a contradiction.
    #[display("every guess at a branch point led to a contradiction")]
    GuessingFailure,
    /// No fully determined grid was produced. This is also how the top level
    /// reports an unsatisfiable puzzle.
    #[display("no solution exists for this puzzle")]
    NoSolutionFound,
    /// A supposedly solved grid failed final validation. Input validity is
    /// checked before search begins, so this indicates a solver bug.
    #[display("a solved grid failed final validation")]
    InternalInconsistency,
    /// The deduction fixed-point loop exceeded its pass cap. Unreachable on a
    /// well-formed 9×9 board; indicates a solver bug.
    #[display("the deduction loop exceeded its iteration cap")]
    MaxIterationsExceeded,
}

impl SolverError {
    /// Returns `true` for the local-recovery signals that a guess loop
    /// consumes by moving on to the next candidate.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(
            self,
            Self::EliminationInconsistency | Self::GuessingFailure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_split() {
        assert!(SolverError::EliminationInconsistency.is_recoverable());
        assert!(SolverError::GuessingFailure.is_recoverable());
        assert!(!SolverError::InvalidInput.is_recoverable());
        assert!(!SolverError::NoSolutionFound.is_recoverable());
        assert!(!SolverError::InternalInconsistency.is_recoverable());
        assert!(!SolverError::MaxIterationsExceeded.is_recoverable());
    }
}
