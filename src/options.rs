//! Parsing Options.
//! `--size {n}` or `-n`, `--seed {u64}`, `--no-color`

use std::ffi::OsString;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::engine::GameConfig;

fn make_options_parser() -> Command {
    Command::new("maze-escape")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find your way out of a randomly generated maze")
        .arg(
            Arg::new("size")
                .short('n')
                .long("size")
                .value_name("N")
                .help("Maze size; skips the size prompt (clamped to 8-20)")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for the maze generator (default: current time)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Draw the board without colour")
                .action(ArgAction::SetTrue),
        )
}

/// Parse command-line arguments (including the binary name) into a config.
pub fn parse_from<I, T>(args: I) -> Result<GameConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = make_options_parser().try_get_matches_from(args)?;
    Ok(GameConfig {
        size: matches.get_one::<i64>("size").copied(),
        seed: matches.get_one::<u64>("seed").copied(),
        color: !matches.get_flag("no-color"),
    })
}
