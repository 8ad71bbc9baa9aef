//! Runtime settings for one session.

use crate::types::clamp_maze_size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Requested maze size; `None` asks the player at startup.
    pub size: Option<i64>,
    /// Generator seed; `None` seeds from the wall clock.
    pub seed: Option<u64>,
    /// Colour escapes in board output.
    pub color: bool,
}

impl GameConfig {
    /// Requested size clamped into the playable range, if one was given
    pub fn clamped_size(&self) -> Option<usize> {
        self.size.map(clamp_maze_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: None,
            seed: None,
            color: true,
        }
    }
}
