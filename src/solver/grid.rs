use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};

/// The plain grid-of-values handoff shared with the parsing and reporting
/// layers outside the core.
///
/// Cells are stored row-major; `0` means blank, `1..=side` is a given. The
/// block shape is `block_rows x block_cols` cells per block, with
/// `block_rows * block_cols == side` (3x3 for classic Sudoku, 2x3 for a 6x6
/// grid, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    side: usize,
    block_rows: usize,
    block_cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Builds a grid from a block shape and row-major cell values, validating
    /// the shape, cell count, and value range.
    pub fn new(block_rows: usize, block_cols: usize, cells: Vec<i32>) -> Result<Self> {
        let side = block_rows * block_cols;
        if block_rows == 0 || block_cols == 0 {
            return Err(SolverError::InvalidBlockShape {
                block_rows,
                block_cols,
                side,
            }
            .into());
        }
        if cells.len() != side * side {
            return Err(SolverError::WrongCellCount {
                actual: cells.len(),
                expected: side * side,
            }
            .into());
        }
        if let Some(&value) = cells.iter().find(|&&v| v < 0 || v > side as i32) {
            return Err(SolverError::ValueOutOfRange { value, side }.into());
        }
        Ok(Self {
            side,
            block_rows,
            block_cols,
            cells,
        })
    }

    /// An all-blank grid of the given block shape.
    pub fn empty(block_rows: usize, block_cols: usize) -> Result<Self> {
        let side = block_rows * block_cols;
        Self::new(block_rows, block_cols, vec![0; side * side])
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn block_rows(&self) -> usize {
        self.block_rows
    }

    pub fn block_cols(&self) -> usize {
        self.block_cols
    }

    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.cells[row * self.side + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.cells[row * self.side + col] = value;
    }

    /// True when no cell is blank.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.side {
            if row > 0 && row % self.block_rows == 0 {
                let dashes = vec!["-"; self.block_cols].join(" ");
                let rule = vec![dashes; self.side / self.block_cols].join(" + ");
                writeln!(f, "{}", rule)?;
            }
            for col in 0..self.side {
                if col > 0 && col % self.block_cols == 0 {
                    write!(f, "| ")?;
                }
                match self.get(row, col) {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{} ", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
