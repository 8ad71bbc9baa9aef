//! Grid module - the maze occupancy map
//!
//! The grid is an N x N square where each cell is either open or a wall.
//! Uses a flat vector in row-major order (`row * size + col`).
//! Queries outside `[0, size)` return [`GridError::OutOfBounds`] rather than
//! panicking; movement code treats such positions as walls.

use crate::error::{ConfigError, GridError};
use crate::types::{CellState, Position, MIN_GRID_SIZE};

/// The maze grid - `size` x `size` cells using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Flat vector of cells, row-major order (row * size + col)
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with every cell open
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size,
                min: MIN_GRID_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![CellState::Open; size * size],
        })
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Result<usize, GridError> {
        if pos.row >= self.size || pos.col >= self.size {
            return Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        Ok(pos.row * self.size + pos.col)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell state at `pos`
    pub fn cell_at(&self, pos: Position) -> Result<CellState, GridError> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set the cell state at `pos`
    pub fn set_cell(&mut self, pos: Position, state: CellState) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Check if `pos` is inside the grid and open
    pub fn is_open(&self, pos: Position) -> bool {
        matches!(self.cell_at(pos), Ok(CellState::Open))
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Check if `pos` lies on the outer ring
    pub fn is_border(&self, pos: Position) -> bool {
        self.in_bounds(pos)
            && (pos.row == 0 || pos.col == 0 || pos.row == self.size - 1 || pos.col == self.size - 1)
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    pub fn open_count(&self) -> usize {
        self.cells.len() - self.wall_count()
    }

    /// Build a grid from text rows for tests: `#` is a wall, anything else is open.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|r| r.chars().count() == size));
        let cells = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|ch| if ch == '#' { CellState::Wall } else { CellState::Open })
            .collect();
        Self { size, cells }
    }
}
