//! Terminal maze escape runner (default binary).
//!
//! Line-oriented: prompts on stdout, answers read from stdin. Set
//! `MAZE_ESCAPE_LOG` (e.g. `MAZE_ESCAPE_LOG=debug`) to get logs on stderr.

use std::io::{self, IsTerminal};

use anyhow::Result;

use maze_escape::engine::{Outcome, Session};
use maze_escape::options;
use maze_escape::term::TerminalRenderer;

fn main() -> Result<()> {
    if std::env::var("MAZE_ESCAPE_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("MAZE_ESCAPE_LOG")
            .write_style("MAZE_ESCAPE_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let config = match options::parse_from(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };
    log::debug!("options: {config:?}");

    // Colour only makes sense when a terminal is reading the escapes.
    let color = config.color && io::stdout().is_terminal();

    let mut session = Session::new(io::stdin().lock(), TerminalRenderer::stdout(color));
    match session.run(&config)? {
        Outcome::Escaped { moves } => log::info!("escaped after {moves} moves"),
        Outcome::Quit => log::info!("player quit"),
        Outcome::InputClosed => log::info!("input closed before the exit was reached"),
    }
    Ok(())
}
