//! Maze Escape (workspace facade crate).
//!
//! Re-exports the workspace members as `maze_escape::{core,engine,input,term,types}`
//! and holds the command-line option parser used by the binary.

pub mod options;

pub use maze_escape_core as core;
pub use maze_escape_engine as engine;
pub use maze_escape_input as input;
pub use maze_escape_term as term;
pub use maze_escape_types as types;
