//! Game state module - the move engine
//!
//! `MazeGame` owns the maze, the player and the game status. It is the only
//! thing that moves the player. A move is a pure function of the current
//! position, the requested direction and the grid.

use log::trace;
use rand::Rng;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::maze::{Maze, MazeGenerator};
use crate::player::Player;
use crate::snapshot::MazeSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct MazeGame {
    maze: Maze,
    player: Player,
    status: GameStatus,
    /// Committed moves (accepted or winning). Display only.
    moves: u32,
}

impl MazeGame {
    /// Generate a `size` x `size` maze from `rng` and start a game on it
    pub fn new<R: Rng>(size: usize, rng: R) -> Result<Self, ConfigError> {
        let maze = MazeGenerator::new(rng).generate(size)?;
        Ok(Self::from_maze(maze))
    }

    /// Start a game on an already built maze
    pub fn from_maze(maze: Maze) -> Self {
        let player = Player::new(maze.start());
        Self {
            maze,
            player,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    /// Try to move the player one cell in `direction`
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        if self.is_over() {
            return MoveResult::AlreadyOver;
        }

        let from = self.player.position();
        let Some(to) = from.step(direction).filter(|&p| self.maze.grid().is_open(p)) else {
            trace!("move {} from {:?} rejected", direction.as_str(), from);
            return MoveResult::Rejected;
        };

        self.player.move_to(to);
        self.moves += 1;

        if to == self.maze.exit() {
            self.status = GameStatus::Won;
            trace!("move {} reached the exit at {:?}", direction.as_str(), to);
            return MoveResult::Won;
        }

        trace!("move {} to {:?}", direction.as_str(), to);
        MoveResult::Accepted
    }

    /// Apply a raw command character.
    ///
    /// `w`/`a`/`s`/`d` move; any other character is rejected without touching
    /// state. Quitting is the caller's business.
    pub fn attempt_command(&mut self, ch: char) -> MoveResult {
        if self.is_over() {
            return MoveResult::AlreadyOver;
        }
        match Direction::from_char(ch) {
            Some(direction) => self.attempt_move(direction),
            None => MoveResult::Rejected,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn player_position(&self) -> Position {
        self.player.position()
    }

    pub fn start(&self) -> Position {
        self.maze.start()
    }

    pub fn exit(&self) -> Position {
        self.maze.exit()
    }

    pub fn grid(&self) -> &Grid {
        self.maze.grid()
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Borrow a read-only view for rendering
    pub fn snapshot(&self) -> MazeSnapshot<'_> {
        MazeSnapshot {
            grid: self.maze.grid(),
            player: self.player.position(),
            exit: self.maze.exit(),
            status: self.status,
            moves: self.moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 6x6 maze, start (1,1), exit (4,4):
    ///
    /// ```text
    /// ######
    /// #..#.#
    /// #.##.#
    /// #....#
    /// #.#..#
    /// ######
    /// ```
    fn small_game() -> MazeGame {
        let grid = Grid::from_rows(&[
            "######", //
            "#..#.#", //
            "#.##.#", //
            "#....#", //
            "#.#..#", //
            "######", //
        ]);
        MazeGame::from_maze(Maze::from_grid(grid))
    }

    #[test]
    fn test_initial_state() {
        let game = small_game();
        assert_eq!(game.player_position(), Position::new(1, 1));
        assert_eq!(game.exit(), Position::new(4, 4));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_accepted_move_commits() {
        let mut game = small_game();
        assert_eq!(game.attempt_move(Direction::Right), MoveResult::Accepted);
        assert_eq!(game.player_position(), Position::new(1, 2));
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_wall_rejects_without_mutation() {
        let mut game = small_game();
        game.attempt_move(Direction::Right);
        assert_eq!(game.attempt_move(Direction::Right), MoveResult::Rejected);
        assert_eq!(game.attempt_move(Direction::Down), MoveResult::Rejected);
        assert_eq!(game.player_position(), Position::new(1, 2));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_off_grid_is_rejected() {
        // Open grid with no border, so the only thing stopping the player is the edge.
        let mut game = MazeGame::from_maze(Maze::from_grid(Grid::new(4).unwrap()));

        assert_eq!(game.attempt_move(Direction::Up), MoveResult::Accepted);
        assert_eq!(game.attempt_move(Direction::Up), MoveResult::Rejected);
        assert_eq!(game.attempt_move(Direction::Left), MoveResult::Accepted);
        assert_eq!(game.attempt_move(Direction::Left), MoveResult::Rejected);
        assert_eq!(game.player_position(), Position::new(0, 0));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let mut game = small_game();
        for ch in ['x', 'q', ' ', '1', 'é'] {
            assert_eq!(game.attempt_command(ch), MoveResult::Rejected);
        }
        assert_eq!(game.player_position(), Position::new(1, 1));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let mut game = small_game();
        assert_eq!(game.attempt_command('S'), MoveResult::Accepted);
        assert_eq!(game.attempt_command('w'), MoveResult::Accepted);
        assert_eq!(game.player_position(), Position::new(1, 1));
    }

    #[test]
    fn test_win_then_already_over() {
        let mut game = small_game();
        for ch in ['s', 's', 'd', 'd', 'd'] {
            assert_eq!(game.attempt_command(ch), MoveResult::Accepted);
        }
        assert_eq!(game.player_position(), Position::new(3, 4));
        assert_eq!(game.attempt_command('s'), MoveResult::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_over());

        let at_exit = game.player_position();
        assert_eq!(game.attempt_move(Direction::Up), MoveResult::AlreadyOver);
        assert_eq!(game.attempt_command('a'), MoveResult::AlreadyOver);
        assert_eq!(game.attempt_command('x'), MoveResult::AlreadyOver);
        assert_eq!(game.player_position(), at_exit);
        assert_eq!(game.moves(), 6);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut game = small_game();
        game.attempt_move(Direction::Down);
        let snap = game.snapshot();
        assert_eq!(snap.player, Position::new(2, 1));
        assert_eq!(snap.exit, Position::new(4, 4));
        assert_eq!(snap.status, GameStatus::InProgress);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.size(), 6);
    }
}
