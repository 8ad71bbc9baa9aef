//! Key mapping from typed text to game commands.

use crate::types::{clamp_maze_size, Command, Direction};

/// Map a single typed character to a command.
pub fn map_char(ch: char) -> Command {
    if should_quit(ch) {
        return Command::Quit;
    }
    match Direction::from_char(ch) {
        Some(direction) => Command::Move(direction),
        None => Command::Unknown(ch),
    }
}

/// Check if a character should quit the game.
pub fn should_quit(ch: char) -> bool {
    matches!(ch, 'q' | 'Q')
}

/// Every non-whitespace character of `line` as a command, in typing order.
///
/// Input is read as a stream of characters, so `"dds"` is three moves and a
/// blank line is none.
pub fn commands_from_line(line: &str) -> impl Iterator<Item = Command> + '_ {
    line.chars().filter(|c| !c.is_whitespace()).map(map_char)
}

/// Answer to the maze size prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeAnswer {
    Size(usize),
    Quit,
}

/// Interpret a line typed at the size prompt.
///
/// `q` quits. Otherwise the leading integer is clamped into the playable range;
/// anything that does not start with an integer counts as 0 and clamps to the
/// minimum.
pub fn parse_size_answer(line: &str) -> SizeAnswer {
    let trimmed = line.trim();
    if trimmed.chars().next().is_some_and(should_quit) {
        return SizeAnswer::Quit;
    }
    SizeAnswer::Size(clamp_maze_size(leading_integer(trimmed)))
}

/// Parse an optional sign followed by digits; stops at the first non-digit.
fn leading_integer(text: &str) -> i64 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -value
    } else {
        value
    }
}
