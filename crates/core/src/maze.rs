//! Maze generation - border, random walls, guaranteed corridor
//!
//! Generation runs in three steps over a freshly allocated open grid:
//!
//! 1. [`stamp_border`] turns the outer ring into walls.
//! 2. [`scatter_walls`] makes `size * size / 4` random placements in the
//!    interior. Draws that land on the start or exit cell are skipped without a
//!    retry, so the wall count is a target, not a guarantee. Draws may also hit
//!    a cell that is already a wall.
//! 3. [`carve_corridor`] opens an L-shaped route: down the start column to the
//!    exit row, then right along the exit row to the exit. It runs last and
//!    overrides any wall placed on it.
//!
//! The random source is owned by [`MazeGenerator`], so callers decide how it is
//! seeded (wall clock for play, fixed seed for tests).

use log::debug;
use rand::Rng;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::types::{exit_position, CellState, Position, START_POSITION, WALL_DENSITY_DIVISOR};

/// Result of the random wall scatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallStats {
    /// Placements drawn (`size * size / 4`)
    pub attempted: usize,
    /// Draws that landed on the start or exit cell and were dropped
    pub skipped: usize,
}

impl WallStats {
    /// Draws that wrote a wall (possibly onto an existing wall)
    pub fn placed(&self) -> usize {
        self.attempted - self.skipped
    }
}

/// A generated maze: the grid plus its fixed endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Position,
    exit: Position,
    walls: WallStats,
}

impl Maze {
    /// Wrap an existing grid, using the standard start and exit cells.
    ///
    /// No carving happens here; this is for hand-built layouts.
    pub fn from_grid(grid: Grid) -> Self {
        let exit = exit_position(grid.size());
        Self {
            grid,
            start: START_POSITION,
            exit,
            walls: WallStats::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn wall_stats(&self) -> WallStats {
        self.walls
    }
}

/// Builds mazes from an owned random number generator
#[derive(Debug, Clone)]
pub struct MazeGenerator<R> {
    rng: R,
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `size` x `size` maze
    pub fn generate(&mut self, size: usize) -> Result<Maze, ConfigError> {
        let mut grid = Grid::new(size)?;
        let start = START_POSITION;
        let exit = exit_position(size);

        stamp_border(&mut grid);
        let walls = scatter_walls(&mut grid, &mut self.rng, start, exit);
        carve_corridor(&mut grid, start, exit);

        debug!(
            "generated {size}x{size} maze: {} wall draws, {} skipped, {} walls total",
            walls.attempted,
            walls.skipped,
            grid.wall_count()
        );

        Ok(Maze {
            grid,
            start,
            exit,
            walls,
        })
    }
}

/// Turn every cell of the outer ring into a wall
pub fn stamp_border(grid: &mut Grid) {
    let last = grid.size() - 1;
    for i in 0..grid.size() {
        for pos in [
            Position::new(0, i),
            Position::new(last, i),
            Position::new(i, 0),
            Position::new(i, last),
        ] {
            // Indices are all within [0, size).
            let _ = grid.set_cell(pos, CellState::Wall);
        }
    }
}

/// Scatter `size * size / 4` random interior walls, skipping `start` and `exit`
pub fn scatter_walls<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    start: Position,
    exit: Position,
) -> WallStats {
    let size = grid.size();
    let attempted = size * size / WALL_DENSITY_DIVISOR;
    let mut skipped = 0;

    for _ in 0..attempted {
        let pos = Position::new(rng.random_range(1..=size - 2), rng.random_range(1..=size - 2));
        if pos == start || pos == exit {
            skipped += 1;
            continue;
        }
        let _ = grid.set_cell(pos, CellState::Wall);
    }

    WallStats { attempted, skipped }
}

/// Open the L-shaped route from `start` to `exit`.
///
/// Runs down `start.col` from `start.row` to `exit.row`, then along `exit.row`
/// from `start.col` to `exit.col`, both inclusive.
pub fn carve_corridor(grid: &mut Grid, start: Position, exit: Position) {
    for row in start.row..=exit.row {
        let _ = grid.set_cell(Position::new(row, start.col), CellState::Open);
    }
    for col in start.col..=exit.col {
        let _ = grid.set_cell(Position::new(exit.row, col), CellState::Open);
    }
}

/// Positions along the carved corridor, in walking order from start to exit
pub fn corridor_cells(start: Position, exit: Position) -> impl Iterator<Item = Position> {
    let down = (start.row..=exit.row).map(move |row| Position::new(row, start.col));
    let across = (start.col + 1..=exit.col).map(move |col| Position::new(exit.row, col));
    down.chain(across)
}
