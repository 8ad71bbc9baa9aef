//! Terminal "game renderer" module.
//!
//! This is a small rendering layer for the line-oriented maze game.
//! It renders a read-only [`MazeSnapshot`](crate::core::MazeSnapshot) into a
//! simple framebuffer that can be flushed to any `Write` sink, either as plain
//! text or with crossterm colour escapes.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Never hold or mutate game state; rendering is a pure function of the snapshot
//! - Two characters per maze cell to compensate for terminal glyph aspect ratio

pub mod fb;
pub mod maze_view;
pub mod messages;
pub mod renderer;

pub use maze_escape_core as core;
pub use maze_escape_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use maze_view::MazeView;
pub use renderer::{encode_plain_into, encode_styled_into, TerminalRenderer};
