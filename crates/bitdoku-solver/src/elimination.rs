//! Deduction passes over the possibility grid.
//!
//! Two elimination rules share one propagation primitive:
//!
//! 1. [`place_known`] removes a newly determined digit from every peer of the
//!    cell. Seeding the grid from the puzzle's givens and forcing a deduced
//!    cell both go through this function.
//! 2. [`eliminate_pass`] runs the hidden-single rule: a digit excluded from
//!    every other cell of a region is forced into the remaining cell.

use bitdoku_core::{DigitSet, Position, PossibilityGrid};

use crate::SolverError;

/// Cap on fixed-point passes per solve attempt. A 9×9 grid converges in far
/// fewer; exceeding this indicates a bug rather than a malformed puzzle.
pub const MAX_PASSES: usize = 1000;

/// Records a digit as known at `pos`: eliminates it from the cell's entire
/// row, column, and box, then pins the cell to the singleton mask.
///
/// `single` must hold exactly one digit.
pub(crate) fn place_known(grid: &mut PossibilityGrid, pos: Position, single: DigitSet) {
    debug_assert_eq!(single.len(), 1);
    let keep = single.complement();
    grid.apply_to_row(pos, |set| set.intersection(keep));
    grid.apply_to_column(pos, |set| set.intersection(keep));
    grid.apply_to_box(pos, |set| set.intersection(keep));
    grid.set(pos, single);
}

/// Runs one hidden-single pass and returns the updated grid.
///
/// The scan reads only the pre-pass grid; all discovered determinations are
/// applied afterwards through [`place_known`], so no cell's update depends on
/// another update from the same pass. The resulting grid is then checked for
/// empty cells and region-distinctness; a contradictory guess that produced
/// no updates is rejected here as well.
pub(crate) fn eliminate_pass(grid: &PossibilityGrid) -> Result<PossibilityGrid, SolverError> {
    let targets = grid.try_map_cells(|pos, set| hidden_single_target(grid, pos, set))?;

    let mut next = grid.clone();
    for pos in Position::ALL {
        let target = targets.get(pos);
        if target != grid.get(pos) {
            log::trace!("hidden single {target} at {pos}");
            place_known(&mut next, pos, target);
        }
    }

    if next.has_empty_cell() || !next.is_valid() {
        return Err(SolverError::EliminationInconsistency);
    }
    Ok(next)
}

/// Computes the post-pass mask for one cell against the pre-pass grid.
///
/// Determined cells are left untouched. For an undetermined cell, the row is
/// checked first, then the column, then the box; the first region forcing a
/// singleton wins. A region excluding two or more digits from all of its
/// other cells is contradictory.
fn hidden_single_target(
    grid: &PossibilityGrid,
    pos: Position,
    set: DigitSet,
) -> Result<DigitSet, SolverError> {
    if set.as_single().is_some() {
        return Ok(set);
    }

    let regions = [
        (grid.row_sets(pos), pos.x()),
        (grid.column_sets(pos), pos.y()),
        (grid.box_sets(pos), pos.box_cell_index()),
    ];
    for (sets, own) in regions {
        let forced = other_cells_union(&sets, own).complement();
        match forced.len() {
            0 => {}
            1 => return Ok(forced),
            _ => return Err(SolverError::EliminationInconsistency),
        }
    }
    Ok(set)
}

/// Unions the masks of a region's cells, excluding the cell at index `own`.
fn other_cells_union(sets: &[DigitSet; 9], own: u8) -> DigitSet {
    let mut union = DigitSet::EMPTY;
    for (i, set) in (0..).zip(sets) {
        if i != own {
            union |= *set;
        }
    }
    union
}
