// Grid - the complete board state, rows x cols lit/unlit cells

use crate::board::errors::{validate_dimensions, BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rectangular board of boolean cells (`true` = lit).
///
/// Dimensions are fixed at creation. A `Grid` is a plain value: the engine
/// never mutates one it has handed out, every toggle produces a fresh copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    /// All cells unlit
    pub fn all_off(rows: usize, cols: usize) -> BoardResult<Self> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![false; cols]; rows],
        })
    }

    /// Build a grid from explicit rows, rejecting empty or ragged input
    pub fn from_rows(cells: Vec<Vec<bool>>) -> BoardResult<Self> {
        let rows = cells.len();
        let cols = cells.first().map(Vec::len).unwrap_or(0);
        validate_dimensions(rows, cols)?;

        if let Some((index, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(BoardError::invalid(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                cols
            )));
        }

        Ok(Self { rows, cols, cells })
    }

    /// Build a grid by evaluating `lit` for every coordinate
    pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut lit: F) -> BoardResult<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        validate_dimensions(rows, cols)?;
        let cells = (0..rows)
            .map(|row| (0..cols).map(|col| lit(row, col)).collect())
            .collect();
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Cell state, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Whether a signed coordinate lies on the board
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Read-only view of the rows
    pub fn as_rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    pub fn lit_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&lit| lit)
            .count()
    }

    /// Invert one on-board cell. Only used on private copies inside the engine.
    pub(crate) fn flip(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = !*cell;
        }
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = BoardError;

    fn try_from(cells: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Grid::from_rows(cells)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let line: Vec<&str> = row.iter().map(|&lit| if lit { "O" } else { "." }).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
