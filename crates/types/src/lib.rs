//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Maze Dimensions
//!
//! The maze is always square. Coordinates are `(row, col)` with `row` growing
//! downwards and `col` growing to the right.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_MAZE_SIZE` | 8 | Smallest size the CLI accepts (smaller answers are clamped up) |
//! | `MAX_MAZE_SIZE` | 20 | Largest size the CLI accepts (larger answers are clamped down) |
//! | `MIN_GRID_SIZE` | 3 | Smallest grid that still has an interior |
//! | `WALL_DENSITY_DIVISOR` | 4 | `N*N / 4` random wall placements per maze |
//!
//! The player always starts at [`START_POSITION`] `(1, 1)` and the exit of an
//! `N x N` maze sits at `(N - 2, N - 2)`.
//!
//! # Examples
//!
//! ```
//! use maze_escape_types::{clamp_maze_size, Direction, Position, START_POSITION};
//!
//! // Sizes outside the playable range are clamped
//! assert_eq!(clamp_maze_size(5), 8);
//! assert_eq!(clamp_maze_size(37), 20);
//!
//! // Directions map from the classic WASD keys
//! assert_eq!(Direction::from_char('d'), Some(Direction::Right));
//!
//! // Stepping from the start cell
//! let next = START_POSITION.step(Direction::Right);
//! assert_eq!(next, Some(Position::new(1, 2)));
//! ```

/// Smallest maze size accepted from the player
pub const MIN_MAZE_SIZE: usize = 8;

/// Largest maze size accepted from the player
pub const MAX_MAZE_SIZE: usize = 20;

/// Smallest grid the generator can build (border plus one interior cell)
pub const MIN_GRID_SIZE: usize = 3;

/// Random wall placements per maze are `size * size / WALL_DENSITY_DIVISOR`
pub const WALL_DENSITY_DIVISOR: usize = 4;

/// Fixed start cell of every maze
pub const START_POSITION: Position = Position::new(1, 1);

/// Clamp a requested maze size into `[MIN_MAZE_SIZE, MAX_MAZE_SIZE]`.
///
/// Takes a signed value so negative answers typed at the prompt clamp too.
pub fn clamp_maze_size(requested: i64) -> usize {
    requested.clamp(MIN_MAZE_SIZE as i64, MAX_MAZE_SIZE as i64) as usize
}

/// Exit cell of a maze of the given size.
pub fn exit_position(size: usize) -> Position {
    Position::new(size.saturating_sub(2), size.saturating_sub(2))
}


/// A cell coordinate inside the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring position one step in `direction`.
    ///
    /// Returns `None` when the step would go above row 0 or left of column 0.
    /// The upper bound depends on the grid and is checked there.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

/// State of a single maze cell
///
/// - **Open**: the player may stand here
/// - **Wall**: blocks movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Open,
    Wall,
}

impl CellState {
    pub fn is_open(self) -> bool {
        matches!(self, CellState::Open)
    }

    pub fn is_wall(self) -> bool {
        matches!(self, CellState::Wall)
    }
}

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a WASD key to a direction (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_escape_types::Direction;
    ///
    /// assert_eq!(Direction::from_char('w'), Some(Direction::Up));
    /// assert_eq!(Direction::from_char('S'), Some(Direction::Down));
    /// assert_eq!(Direction::from_char('x'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit `(row, col)` offset
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A command typed at the move prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Try to move one cell
    Move(Direction),
    /// End the session immediately
    Quit,
    /// Any other character; reported as an invalid move
    Unknown(char),
}

/// Outcome of a single move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The player moved; the game continues
    Accepted,
    /// Blocked by a wall, the grid edge, or an unrecognized command. Nothing changed.
    Rejected,
    /// The player stepped onto the exit
    Won,
    /// The game was already won; nothing changed
    AlreadyOver,
}

/// Lifecycle stage of a game
///
/// `InProgress -> Won` happens exactly once. `Won` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
}
