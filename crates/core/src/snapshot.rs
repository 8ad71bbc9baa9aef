//! Read-only view of a game for presentation code.

use crate::grid::Grid;
use crate::types::{GameStatus, Position};

/// Everything a renderer needs, borrowed from a [`MazeGame`](crate::MazeGame)
#[derive(Debug, Clone, Copy)]
pub struct MazeSnapshot<'a> {
    pub grid: &'a Grid,
    pub player: Position,
    pub exit: Position,
    pub status: GameStatus,
    pub moves: u32,
}

impl<'a> MazeSnapshot<'a> {
    pub fn new(grid: &'a Grid, player: Position, exit: Position) -> Self {
        Self {
            grid,
            player,
            exit,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }
}
