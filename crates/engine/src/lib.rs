//! Game engine module - the turn loop.
//!
//! Wires the crates together: reads text through [`crate::input`], drives a
//! [`MazeGame`](crate::core::MazeGame), and draws through [`crate::term`].
//! Everything is generic over `BufRead`/`Write`, so whole sessions can be
//! scripted in tests without a terminal.

pub mod config;
pub mod session;

pub use maze_escape_core as core;
pub use maze_escape_input as input;
pub use maze_escape_term as term;
pub use maze_escape_types as types;

pub use config::GameConfig;
pub use session::{Outcome, Session};
