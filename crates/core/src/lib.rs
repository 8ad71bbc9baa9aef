//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the maze rules, state management, and move logic.
//! It has **zero dependencies** on the terminal or on stdin/stdout, making it:
//!
//! - **Deterministic**: Same seed produces identical mazes
//! - **Testable**: Unit tests for every generation step and move rule
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`grid`]: N x N occupancy map with bounds-checked accessors
//! - [`maze`]: border stamping, random wall scatter, and corridor carving
//! - [`player`]: the player's current position
//! - [`game_state`]: the move engine and `InProgress -> Won` state machine
//! - [`rng`]: seeding helpers for the generator's random number source
//! - [`snapshot`]: read-only view handed to presentation code
//! - [`error`]: grid and configuration errors
//!
//! # Game Rules
//!
//! - **Border**: every edge cell is a wall
//! - **Walls**: `N*N/4` random placements in the interior, never on start or exit
//! - **Corridor**: an L-shaped route down column 1 then along row `N-2` is always open
//! - **Moves**: one cell up/down/left/right, only onto open cells inside the grid
//! - **Victory**: reaching `(N-2, N-2)` ends the game
//!
//! # Example
//!
//! ```
//! use maze_escape_core::{rng, MazeGame};
//! use maze_escape_types::{Direction, GameStatus, MoveResult};
//!
//! let mut game = MazeGame::new(8, rng::seeded(7)).unwrap();
//!
//! // Walk the guaranteed corridor: down to the exit row, then right.
//! for _ in 1..6 {
//!     assert_eq!(game.attempt_move(Direction::Down), MoveResult::Accepted);
//! }
//! for _ in 1..5 {
//!     assert_eq!(game.attempt_move(Direction::Right), MoveResult::Accepted);
//! }
//! assert_eq!(game.attempt_move(Direction::Right), MoveResult::Won);
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

pub mod error;
pub mod game_state;
pub mod grid;
pub mod maze;
pub mod player;
pub mod rng;
pub mod snapshot;

pub use maze_escape_types as types;

// Re-export commonly used types for convenience
pub use error::{ConfigError, GridError};
pub use game_state::MazeGame;
pub use grid::Grid;
pub use maze::{
    carve_corridor, corridor_cells, scatter_walls, stamp_border, Maze, MazeGenerator, WallStats,
};
pub use player::Player;
pub use snapshot::MazeSnapshot;
