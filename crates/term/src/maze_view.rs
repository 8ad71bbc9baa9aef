//! MazeView: maps a `core::MazeSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::MazeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellState, Position};

const PLAYER_STYLE: CellStyle = CellStyle::new(Rgb::new(240, 220, 80), true);
const EXIT_STYLE: CellStyle = CellStyle::new(Rgb::new(100, 220, 120), true);
const WALL_STYLE: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), false);
const OPEN_STYLE: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), false);

/// What a maze cell shows as, in drawing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Player,
    Exit,
    Wall,
    Open,
}

impl Tile {
    /// Classify `pos`. The player is drawn over the exit once it gets there.
    pub fn at(snap: &MazeSnapshot<'_>, pos: Position) -> Self {
        if pos == snap.player {
            Tile::Player
        } else if pos == snap.exit {
            Tile::Exit
        } else {
            match snap.grid.cell_at(pos) {
                Ok(CellState::Wall) => Tile::Wall,
                _ => Tile::Open,
            }
        }
    }
}

/// A text renderer for the maze board.
#[derive(Debug, Clone, Copy)]
pub struct MazeView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
}

impl Default for MazeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl MazeView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_w
    }

    /// Render the board: one framebuffer row per maze row, `cell_w` columns per cell.
    pub fn render(&self, snap: &MazeSnapshot<'_>) -> FrameBuffer {
        let size = snap.size() as u16;
        let mut fb = FrameBuffer::new(size * self.cell_w, size);

        for row in 0..size {
            for col in 0..size {
                let tile = Tile::at(snap, Position::new(row as usize, col as usize));
                self.draw_tile(&mut fb, col * self.cell_w, row, tile);
            }
        }
        fb
    }

    /// Key explaining the board glyphs
    pub fn legend(&self) -> String {
        format!(
            "P = Player, E = Exit, {} = Wall",
            "█".repeat(self.cell_w as usize)
        )
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: Tile) {
        let (lead, fill, style) = match tile {
            Tile::Player => ('P', ' ', PLAYER_STYLE),
            Tile::Exit => ('E', ' ', EXIT_STYLE),
            Tile::Wall => ('█', '█', WALL_STYLE),
            Tile::Open => (' ', ' ', OPEN_STYLE),
        };
        fb.set(x, y, style.into_cell(lead));
        for dx in 1..self.cell_w {
            fb.set(x + dx, y, style.into_cell(fill));
        }
    }
}
