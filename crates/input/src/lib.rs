//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any terminal library. It maps
//! typed text into [`crate::types::Command`]s and maze-size answers; reading
//! the text is the engine's job.

pub mod map;

pub use maze_escape_types as types;

pub use map::{commands_from_line, map_char, parse_size_answer, should_quit, SizeAnswer};
