//! Player module - where the player currently stands.
//!
//! This is a plain value holder. Legality of a move is decided by
//! [`MazeGame`](crate::game_state::MazeGame) before `move_to` is called.

use crate::types::{Position, START_POSITION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    position: Position,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Overwrite the position unconditionally
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(START_POSITION)
    }
}
