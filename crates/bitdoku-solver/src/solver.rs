//! Fixed-point deduction and backtracking search.

use bitdoku_core::{Digit, DigitGrid, DigitSet, Position, PossibilityGrid, SolvedGrid};
use tinyvec::ArrayVec;

use crate::{
    SolverError,
    elimination::{self, MAX_PASSES},
};

/// Counters describing a solve run.
///
/// Useful for asserting the solver's termination bounds:
/// `max_passes_per_loop` never exceeds [`MAX_PASSES`] and `max_depth` never
/// exceeds the 81 cells of the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Deduction passes executed, summed over every branch.
    pub passes: usize,
    /// Most passes any single fixed-point loop executed.
    pub max_passes_per_loop: usize,
    /// Guesses attempted during the search.
    pub guesses: usize,
    /// Deepest branch level reached (0 when deduction alone solved the
    /// puzzle).
    pub max_depth: usize,
}

/// Constraint-propagation Sudoku solver with backtracking.
///
/// The solver seeds a [`PossibilityGrid`] from the puzzle's givens, applies
/// the hidden-single elimination pass until a fixed point, and branches on
/// the first undetermined cell when deduction stalls. Each branch operates on
/// its own clone of the grid, so speculative guesses never corrupt the
/// caller's state. The first solution found wins; puzzles with multiple
/// solutions silently return one of them.
///
/// # Examples
///
/// ```
/// use bitdoku_core::DigitGrid;
/// use bitdoku_solver::Solver;
///
/// let puzzle: DigitGrid = "53..7....6..195....98....6.8...6...34..8.3..1\
///                          7...2...6.6....28....419..5....8..79"
///     .parse()?;
/// let solved = Solver::new().solve(&puzzle)?;
/// assert!(solved.is_valid());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Solver {}

impl Solver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Solves a puzzle, returning the first fully determined valid grid
    /// found.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] if the givens conflict before
    /// any deduction runs, [`SolverError::NoSolutionFound`] if the puzzle is
    /// unsatisfiable, and the defensive
    /// [`SolverError::InternalInconsistency`] /
    /// [`SolverError::MaxIterationsExceeded`] kinds on solver bugs.
    pub fn solve(&self, puzzle: &DigitGrid) -> Result<SolvedGrid, SolverError> {
        self.solve_with_stats(puzzle).map(|(solved, _)| solved)
    }

    /// Solves a puzzle and reports the counters of the run.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_with_stats(
        &self,
        puzzle: &DigitGrid,
    ) -> Result<(SolvedGrid, SolveStats), SolverError> {
        let grid = seed(puzzle)?;
        let mut stats = SolveStats::default();

        let solved = match solve_grid(grid, 0, &mut stats) {
            Ok(grid) => grid,
            // Recoverable signals reaching the top level mean the puzzle
            // itself is unsatisfiable.
            Err(err) if err.is_recoverable() => return Err(SolverError::NoSolutionFound),
            Err(err) => return Err(err),
        };

        let solved = extract(&solved)?;
        log::debug!(
            "solved after {} passes, {} guesses, depth {}",
            stats.passes,
            stats.guesses,
            stats.max_depth
        );
        Ok((solved, stats))
    }
}

/// Seeds a possibility grid from the puzzle's givens.
///
/// Each given goes through the shared propagation primitive, so seeding and
/// later in-search determinations follow one code path. A zero mask or a
/// region-distinctness violation at this point means the givens themselves
/// conflict.
fn seed(puzzle: &DigitGrid) -> Result<PossibilityGrid, SolverError> {
    let mut grid = PossibilityGrid::new();
    for pos in Position::ALL {
        if let Some(digit) = puzzle.get(pos) {
            elimination::place_known(&mut grid, pos, DigitSet::from_digit(digit));
        }
    }
    if grid.has_empty_cell() || !grid.is_valid() {
        return Err(SolverError::InvalidInput);
    }
    Ok(grid)
}

/// Recursively solves a grid: deduction to a fixed point, then branching on
/// the first undetermined cell.
fn solve_grid(
    grid: PossibilityGrid,
    depth: usize,
    stats: &mut SolveStats,
) -> Result<PossibilityGrid, SolverError> {
    stats.max_depth = stats.max_depth.max(depth);

    let grid = run_to_fixed_point(grid, stats)?;
    let Some(pos) = grid.first_undetermined() else {
        return Ok(grid);
    };

    for guess in disjoint_singletons(grid.get(pos)) {
        stats.guesses += 1;
        log::trace!("guessing {guess} at {pos} (depth {depth})");
        let mut branch = grid.clone();
        branch.set(pos, guess);
        match solve_grid(branch, depth + 1, stats) {
            Ok(solved) => return Ok(solved),
            // This guess was wrong; try the next candidate.
            Err(err) if err.is_recoverable() => {}
            Err(err) => return Err(err),
        }
    }
    Err(SolverError::GuessingFailure)
}

/// Runs elimination passes until a pass changes nothing, bounded by
/// [`MAX_PASSES`].
fn run_to_fixed_point(
    mut grid: PossibilityGrid,
    stats: &mut SolveStats,
) -> Result<PossibilityGrid, SolverError> {
    for pass in 1..=MAX_PASSES {
        let next = elimination::eliminate_pass(&grid)?;
        stats.passes += 1;
        stats.max_passes_per_loop = stats.max_passes_per_loop.max(pass);
        if next == grid {
            return Ok(next);
        }
        grid = next;
    }
    Err(SolverError::MaxIterationsExceeded)
}

/// Decomposes a mask into disjoint singleton guesses, in ascending digit
/// order.
///
/// Each candidate is isolated as the lowest remaining bit and re-masked
/// against the digits already chosen, so the guesses are guaranteed disjoint
/// and cover exactly the original mask.
fn disjoint_singletons(set: DigitSet) -> ArrayVec<[DigitSet; 9]> {
    let mut out = ArrayVec::new();
    let mut remaining = set;
    let mut chosen = DigitSet::EMPTY;
    while !remaining.is_empty() {
        let lowest = remaining.lowest_single();
        remaining = remaining.difference(lowest);
        let single = lowest.difference(chosen);
        if single.is_empty() {
            continue;
        }
        chosen |= single;
        out.push(single);
    }
    out
}

/// Converts a fully determined grid into digits, re-validating the result.
fn extract(grid: &PossibilityGrid) -> Result<SolvedGrid, SolverError> {
    let mut cells = [Digit::D1; 81];
    for pos in Position::ALL {
        let Some(digit) = grid.get(pos).as_single() else {
            return Err(SolverError::NoSolutionFound);
        };
        cells[usize::from(pos.cell_index())] = digit;
    }
    let solved = SolvedGrid::new(cells);
    if !solved.is_valid() {
        return Err(SolverError::InternalInconsistency);
    }
    Ok(solved)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// The canonical puzzle with row 0 = 5 3 _ _ 7 _ _ _ _.
    const CLASSIC: &str = "53..7....6..195....98....6.8...6...34..8.3..1\
                           7...2...6.6....28....419..5....8..79";

    const CLASSIC_SOLUTION: [[u8; 9]; 9] = [
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

    fn classic_puzzle() -> DigitGrid {
        CLASSIC.parse().unwrap()
    }

    #[test]
    fn test_solves_classic_puzzle_exactly() {
        let solved = Solver::new().solve(&classic_puzzle()).unwrap();
        assert!(solved.is_valid());
        assert_eq!(solved.rows(), CLASSIC_SOLUTION);
    }

    #[test]
    fn test_solved_grid_round_trips() {
        let solution = DigitGrid::from_rows(CLASSIC_SOLUTION);
        let solved = Solver::new().solve(&solution).unwrap();
        assert_eq!(solved.rows(), CLASSIC_SOLUTION);
    }

    #[test]
    fn test_duplicate_given_is_invalid_input() {
        let mut puzzle = DigitGrid::EMPTY;
        puzzle.set(Position::new(0, 0), Some(Digit::D5));
        puzzle.set(Position::new(3, 0), Some(Digit::D5));
        assert_eq!(
            Solver::new().solve(&puzzle),
            Err(SolverError::InvalidInput)
        );
    }

    #[test]
    fn test_given_with_no_home_is_invalid_input() {
        // Row 0 holds 1-8; column 8 holds 8 and 9 below, so (8, 0) has no
        // candidate left after seeding.
        let mut puzzle = DigitGrid::EMPTY;
        for x in 0..8 {
            puzzle.set(Position::new(x, 0), Some(Digit::from_value(x + 1)));
        }
        puzzle.set(Position::new(8, 3), Some(Digit::D8));
        puzzle.set(Position::new(8, 4), Some(Digit::D9));
        assert_eq!(
            Solver::new().solve(&puzzle),
            Err(SolverError::InvalidInput)
        );
    }

    #[test]
    fn test_unsatisfiable_puzzle_needs_search_to_fail() {
        // Column 0 gives 3-9 from row 2 down, column 1 gives everything but
        // 1 from row 1 down. The givens are pairwise consistent, but column
        // 0 must place 1 and 2 at rows 0-1 while (1, 0) is pinned to 1 by
        // its column: either arrangement collides with it in the shared row
        // or box, which only the search can discover.
        let mut puzzle = DigitGrid::EMPTY;
        for (y, value) in (2..9).zip([3, 4, 5, 6, 7, 8, 9]) {
            puzzle.set(Position::new(0, y), Some(Digit::from_value(value)));
        }
        for (y, value) in (1..9).zip([4, 5, 7, 8, 9, 2, 3, 6]) {
            puzzle.set(Position::new(1, y), Some(Digit::from_value(value)));
        }
        assert_eq!(
            Solver::new().solve(&puzzle),
            Err(SolverError::NoSolutionFound)
        );
    }

    #[test]
    fn test_empty_puzzle_terminates_with_valid_grid() {
        let (solved, stats) = Solver::new()
            .solve_with_stats(&DigitGrid::EMPTY)
            .unwrap();
        assert!(solved.is_valid());
        assert!(stats.max_depth <= 81);
        assert!(stats.max_passes_per_loop <= MAX_PASSES);
    }

    #[test]
    fn test_search_stays_within_bounds() {
        // Top three rows given, the remaining 54 cells left to the search.
        let mut rows = CLASSIC_SOLUTION;
        for row in rows.iter_mut().skip(3) {
            *row = [0; 9];
        }
        let puzzle = DigitGrid::from_rows(rows);

        let (solved, stats) = Solver::new().solve_with_stats(&puzzle).unwrap();
        assert!(solved.is_valid());
        assert_eq!(solved.rows()[0], CLASSIC_SOLUTION[0]);
        assert!(stats.max_depth <= 81, "depth {} too deep", stats.max_depth);
        assert!(
            stats.max_passes_per_loop <= MAX_PASSES,
            "a fixed-point loop ran {} passes",
            stats.max_passes_per_loop
        );
        assert!(stats.guesses > 0, "expected the search to branch");
    }

    #[test]
    fn test_disjoint_singletons_cover_mask() {
        let mask = DigitSet::from_iter([Digit::D2, Digit::D5, Digit::D9]);
        let singles: Vec<_> = disjoint_singletons(mask).into_iter().collect();
        assert_eq!(singles.len(), 3);

        let mut union = DigitSet::EMPTY;
        for single in &singles {
            assert_eq!(single.len(), 1);
            assert!(union.intersection(*single).is_empty());
            union |= *single;
        }
        assert_eq!(union, mask);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn any_subset_of_a_solution_solves_to_a_valid_grid(
            kept in prop::collection::vec(any::<bool>(), 81),
        ) {
            let solution = DigitGrid::from_rows(CLASSIC_SOLUTION);
            let mut puzzle = DigitGrid::EMPTY;
            for (pos, &keep) in Position::ALL.iter().zip(&kept) {
                if keep {
                    puzzle.set(*pos, solution.get(*pos));
                }
            }

            let solved = Solver::new().solve(&puzzle).unwrap();
            prop_assert!(solved.is_valid());
            for pos in Position::ALL {
                if let Some(given) = puzzle.get(pos) {
                    prop_assert_eq!(solved.get(pos), given);
                }
            }
        }
    }
}
