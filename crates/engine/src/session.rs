//! Session: the prompt/turn loop over one input/output pair.
//!
//! Input is consumed as a stream of non-whitespace characters, one command
//! each. A line holding several commands plays them in order, redrawing the
//! board between them; blank lines are skipped without a new prompt.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::GameConfig;
use crate::core::{rng, MazeGame};
use crate::input::{commands_from_line, parse_size_answer, SizeAnswer};
use crate::term::{messages, MazeView, TerminalRenderer};
use crate::types::{Command, MoveResult, MIN_MAZE_SIZE};

/// How a session ended. Every variant maps to exit code 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player reached the exit
    Escaped { moves: u32 },
    /// The player typed `q`
    Quit,
    /// Input ran out before the game was won
    InputClosed,
}

pub struct Session<R: BufRead, W: Write> {
    input: R,
    term: TerminalRenderer<W>,
    view: MazeView,
    line: String,
    pending: VecDeque<Command>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, term: TerminalRenderer<W>) -> Self {
        Self {
            input,
            term,
            view: MazeView::default(),
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    /// Print the banner, obtain a size, generate the maze and play it.
    pub fn run(&mut self, config: &GameConfig) -> Result<Outcome> {
        for line in messages::welcome() {
            self.term.line(line)?;
        }

        let size = match config.clamped_size() {
            Some(size) => size,
            None => match self.read_maze_size()? {
                SizeAnswer::Size(size) => size,
                SizeAnswer::Quit => {
                    self.term.line(messages::QUIT)?;
                    info!("session ended at the size prompt");
                    return Ok(Outcome::Quit);
                }
            },
        };

        let (seed, rng) = rng::seed_or_clock(config.seed);
        info!("starting {size}x{size} maze with seed {seed}");
        let mut game = MazeGame::new(size, rng).context("failed to build maze")?;

        let outcome = self.play(&mut game)?;
        info!("session ended: {outcome:?}");
        Ok(outcome)
    }

    /// Ask for the maze size. End of input counts as a malformed answer.
    pub fn read_maze_size(&mut self) -> Result<SizeAnswer> {
        self.term.prompt(messages::SIZE_PROMPT)?;
        loop {
            if !self.read_line()? {
                debug!("input closed at the size prompt");
                self.term.line("")?;
                return Ok(SizeAnswer::Size(MIN_MAZE_SIZE));
            }
            if !self.line.trim().is_empty() {
                return Ok(parse_size_answer(&self.line));
            }
        }
    }

    /// Run the turn loop until the game is won, the player quits, or input ends.
    pub fn play(&mut self, game: &mut MazeGame) -> Result<Outcome> {
        while !game.is_over() {
            self.draw(game)?;
            self.term.prompt(messages::MOVE_PROMPT)?;

            let Some(command) = self.next_command()? else {
                self.term.line("")?;
                return Ok(Outcome::InputClosed);
            };

            let result = match command {
                Command::Quit => {
                    self.term.line(messages::QUIT)?;
                    return Ok(Outcome::Quit);
                }
                Command::Move(direction) => game.attempt_move(direction),
                Command::Unknown(ch) => game.attempt_command(ch),
            };

            match result {
                MoveResult::Rejected => self.term.line(messages::INVALID_MOVE)?,
                MoveResult::Won => {
                    self.term.line(messages::VICTORY)?;
                    self.term.line(&messages::escaped_in(game.moves()))?;
                }
                MoveResult::Accepted | MoveResult::AlreadyOver => {}
            }
        }

        self.draw(game)?;
        self.term.line(messages::END)?;
        Ok(Outcome::Escaped {
            moves: game.moves(),
        })
    }

    pub fn into_renderer(self) -> TerminalRenderer<W> {
        self.term
    }

    fn draw(&mut self, game: &MazeGame) -> Result<()> {
        let fb = self.view.render(&game.snapshot());
        self.term.draw(&fb, &self.view.legend())
    }

    /// Next queued command, reading more lines as needed. `None` on end of input.
    fn next_command(&mut self) -> Result<Option<Command>> {
        loop {
            if let Some(command) = self.pending.pop_front() {
                return Ok(Some(command));
            }
            if !self.read_line()? {
                debug!("input closed at the move prompt");
                return Ok(None);
            }
            self.pending.extend(commands_from_line(&self.line));
        }
    }

    /// Read one line into `self.line`. Returns `false` at end of input.
    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        let n = self
            .input
            .read_line(&mut self.line)
            .context("failed to read from input")?;
        Ok(n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Maze};
    use crate::types::{CellState, Position};
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(
            Cursor::new(input.as_bytes().to_vec()),
            TerminalRenderer::new(Vec::new(), false),
        )
    }

    fn output(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_renderer().into_inner()).unwrap()
    }

    /// Bordered 5x5 maze with an open interior: start (1,1), exit (3,3).
    fn open_game() -> MazeGame {
        let mut grid = Grid::new(5).unwrap();
        for i in 0..5 {
            for pos in [
                Position::new(0, i),
                Position::new(4, i),
                Position::new(i, 0),
                Position::new(i, 4),
            ] {
                grid.set_cell(pos, CellState::Wall).unwrap();
            }
        }
        MazeGame::from_maze(Maze::from_grid(grid))
    }

    #[test]
    fn size_prompt_skips_blank_lines() {
        let mut s = session("\n  \n12\n");
        assert_eq!(s.read_maze_size().unwrap(), SizeAnswer::Size(12));
    }

    #[test]
    fn size_prompt_eof_uses_minimum() {
        let mut s = session("");
        assert_eq!(s.read_maze_size().unwrap(), SizeAnswer::Size(MIN_MAZE_SIZE));
    }

    #[test]
    fn quit_stops_without_winning() {
        let mut game = open_game();
        let mut s = session("q\n");
        assert_eq!(s.play(&mut game).unwrap(), Outcome::Quit);
        assert!(!game.is_over());
        assert!(output(s).contains(messages::QUIT));
    }

    #[test]
    fn several_commands_on_one_line() {
        let mut game = open_game();
        let mut s = session("ssdd\n");
        assert_eq!(s.play(&mut game).unwrap(), Outcome::Escaped { moves: 4 });
        let out = output(s);
        assert_eq!(out.matches(messages::MOVE_PROMPT).count(), 4);
        assert!(out.contains(messages::VICTORY));
        assert!(out.contains("You escaped in 4 moves."));
        assert!(out.trim_end().ends_with(messages::END));
    }

    #[test]
    fn invalid_moves_are_reported_and_loop_continues() {
        let mut game = open_game();
        let mut s = session("w\nx\ns\n");
        assert_eq!(s.play(&mut game).unwrap(), Outcome::InputClosed);
        assert_eq!(game.player_position(), Position::new(2, 1));
        assert_eq!(output(s).matches(messages::INVALID_MOVE).count(), 2);
    }

    #[test]
    fn commands_after_quit_are_ignored() {
        let mut game = open_game();
        let mut s = session("sqd\n");
        assert_eq!(s.play(&mut game).unwrap(), Outcome::Quit);
        assert_eq!(game.player_position(), Position::new(2, 1));
    }
}
