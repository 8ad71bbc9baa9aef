//! Error types for grid access and maze construction.

use thiserror::Error;

/// A grid query or write outside `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// Invalid parameters for building a maze.
///
/// These are programming errors (the CLI clamps sizes before they get here),
/// so construction fails fast instead of building a degenerate grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {size} is too small (minimum is {min})")]
    GridTooSmall { size: usize, min: usize },
}
