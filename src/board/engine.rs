// Board engine - generation, cross toggles and the win check
//
// Pure functions over Grid values. Nothing here keeps state between calls;
// the only side effect is consuming draws from the supplied random source.

use crate::board::errors::{validate_chance, validate_difficulty, validate_dimensions, BoardResult};
use crate::board::grid::Grid;
use crate::board::random::RandomSource;
use log::debug;

/// Offsets of the cross affected by one toggle: center, up, down, left, right
const CROSS_OFFSETS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Create a board where each cell is independently lit with probability
/// `chance_lit_at_start`. A cell is lit iff its draw is below the chance, so
/// 0 gives an all-off board and 1 an all-lit one.
pub fn create_random_grid<R>(
    rows: usize,
    cols: usize,
    chance_lit_at_start: f64,
    rng: &mut R,
) -> BoardResult<Grid>
where
    R: RandomSource + ?Sized,
{
    validate_dimensions(rows, cols)?;
    validate_chance(chance_lit_at_start)?;

    let grid = Grid::from_fn(rows, cols, |_, _| rng.next_unit() < chance_lit_at_start)?;
    debug!(
        "created random {}x{} grid (chance {}), {} lit",
        rows,
        cols,
        chance_lit_at_start,
        grid.lit_count()
    );
    Ok(grid)
}

/// Create a board solvable in at most `difficulty` moves by applying that many
/// random cross toggles to an all-off board.
///
/// Random toggles can cancel each other out, so the real minimum number of
/// moves may be lower than `difficulty`.
pub fn create_solvable_grid<R>(
    rows: usize,
    cols: usize,
    difficulty: i64,
    rng: &mut R,
) -> BoardResult<Grid>
where
    R: RandomSource + ?Sized,
{
    validate_dimensions(rows, cols)?;
    validate_difficulty(difficulty)?;

    let mut grid = Grid::all_off(rows, cols)?;
    for _ in 0..difficulty {
        let row = rng.next_index(rows) as isize;
        let col = rng.next_index(cols) as isize;
        grid = toggle_around(&grid, row, col);
    }

    debug!(
        "created solvable {}x{} grid (difficulty {}), {} lit",
        rows,
        cols,
        difficulty,
        grid.lit_count()
    );
    Ok(grid)
}

/// Return a copy of `grid` with the cell at (row, col) and its four orthogonal
/// neighbours inverted. Any part of the cross that falls off the board is
/// skipped, so this never fails for any coordinate.
pub fn toggle_around(grid: &Grid, row: isize, col: isize) -> Grid {
    let cells = affected_cells(grid.rows(), grid.cols(), row, col);
    let mut next = grid.clone();
    for &(r, c) in &cells {
        next.flip(r, c);
    }
    debug!("toggle around ({}, {}) flipped {} cells", row, col, cells.len());
    next
}

/// True iff every cell is unlit
pub fn has_won(grid: &Grid) -> bool {
    grid.as_rows().iter().all(|row| row.iter().all(|&lit| !lit))
}

/// Cells a toggle at (row, col) would flip on a board of the given size
pub fn affected_cells(rows: usize, cols: usize, row: isize, col: isize) -> Vec<(usize, usize)> {
    CROSS_OFFSETS
        .iter()
        .map(|&(dr, dc)| (row.saturating_add(dr), col.saturating_add(dc)))
        .filter(|&(r, c)| r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols)
        .map(|(r, c)| (r as usize, c as usize))
        .collect()
}
