//! # Sushi Go CLI Library
//!
//! Command-line access to the `sushigo-engine` rules library: hand sizes,
//! shuffled decks, seeded deals, and scoring of played cards read from JSON.
//! Every command is a single stateless call into the engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code.
//!
//! ```
//! use std::io;
//! let code = sushigo_cli::run(["sushigo", "hand-size", "--players", "4"], &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `hand-size`: Cards per player for a 2 to 5 player table
//! - `deck`: Print a shuffled deck
//! - `deal`: Deal hands from a seeded deck
//! - `score`: Combo breakdown for one played sequence
//! - `round`: Maki majorities plus combos for every player
//! - `puddings`: End-of-game pudding bonuses and penalties
//! - `cfg`: Show the resolved configuration

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, SushiGoCli, COMMANDS};
use commands::{
    handle_cfg_command, handle_deal_command, handle_deck_command, handle_hand_size_command,
    handle_puddings_command, handle_round_command, handle_score_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SushiGoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// Runs one parsed command. Flags given on the command line win over the
/// layered configuration.
fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::HandSize { players } => handle_hand_size_command(players, out),
        Commands::Cfg => handle_cfg_command(out),
        Commands::Deck { seed } => {
            let cfg = config::load()?;
            handle_deck_command(seed.or(cfg.seed), out)
        }
        Commands::Deal { players, seed } => {
            let cfg = config::load()?;
            handle_deal_command(players.unwrap_or(cfg.players), seed.or(cfg.seed), out)
        }
        Commands::Score { input, pretty } => {
            let cfg = config::load()?;
            handle_score_command(&input, pretty || cfg.pretty, out)
        }
        Commands::Round { input, pretty } => {
            let cfg = config::load()?;
            handle_round_command(&input, pretty || cfg.pretty, out, err)
        }
        Commands::Puddings { input, pretty } => {
            let cfg = config::load()?;
            handle_puddings_command(&input, pretty || cfg.pretty, out, err)
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            let _ = writeln!(err, "{}", e);
            let _ = writeln!(err, "Sushi Go CLI");
            let _ = writeln!(err, "Usage: sushigo <command> [options]\n");
            let _ = writeln!(err, "Commands:");
            for c in COMMANDS {
                let _ = writeln!(err, "  {}", c);
            }
            let _ = writeln!(err, "\nFor full help, run: sushigo --help");
            exit_code::ERROR
        }
    }
}
