//! Fixed text shown around the board.

pub const TITLE: &str = "======= MAZE ESCAPE GAME =======";
pub const GOAL: &str = "Find your way to the exit (E)!";
pub const CONTROLS: &str = "Controls: w (up), s (down), a (left), d (right), q (quit)";

pub const SIZE_PROMPT: &str = "Enter maze size (8-20): ";
pub const MOVE_PROMPT: &str = "Enter your move: ";

pub const VICTORY: &str = "Congratulations! You escaped the maze!";
pub const INVALID_MOVE: &str = "Invalid move! Try again.";
pub const QUIT: &str = "Quitting game. Thanks for playing!";
pub const END: &str = "Thanks for playing!";

/// Banner lines printed once at startup
pub fn welcome() -> [&'static str; 3] {
    [TITLE, GOAL, CONTROLS]
}

/// Move count line printed after the victory message
pub fn escaped_in(moves: u32) -> String {
    match moves {
        1 => "You escaped in 1 move.".to_string(),
        n => format!("You escaped in {n} moves."),
    }
}
