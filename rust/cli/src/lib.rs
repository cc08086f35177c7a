//! # Sixmax CLI Library
//!
//! Command-line front end for the six-max hold'em engine. The binary is a
//! thin wrapper around [`run`], which parses the arguments and dispatches to
//! one of the subcommands:
//!
//! - `sim`: play a number of hands between policies and optionally append
//!   the histories to a text or JSONL log
//! - `deal`: play one seeded hand and print its history
//! - `eval`: score cards with the hand evaluator
//! - `cfg`: show the resolved configuration and the source of each value
//!
//! ```no_run
//! use std::io;
//! let args = vec!["sixmax", "sim", "--hands", "10", "--seed", "42"];
//! let code = sixmax_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod hand_log;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, SixmaxCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["sim", "deal", "eval", "cfg"];

/// Parses `args` and runs the chosen subcommand.
///
/// Normal output goes to `out`, errors and warnings to `err`. Returns the
/// process exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`].
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SixmaxCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let result = match &cli.cmd {
        Commands::Sim {
            table,
            output,
            format,
        } => handle_sim_command(table, output.as_deref(), *format, out, err),
        Commands::Deal { table } => handle_deal_command(table, out, err),
        Commands::Eval { cards, board } => handle_eval_command(cards, board.as_deref(), out),
        Commands::Cfg { table } => handle_cfg_command(table, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // configuration problems are already reported by the handler
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err);
    let _ = writeln!(err, "Sixmax hold'em CLI");
    let _ = writeln!(err, "Usage: sixmax <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: sixmax --help");
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_args(&["sixmax", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("sim"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, out, err) = run_args(&["sixmax", "fly"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}\n", c)), "missing {c}");
        }
    }

    #[test]
    fn eval_dispatches() {
        let (code, out, _) = run_args(&["sixmax", "eval", "As", "Ad", "--board", "Ac 7d 7h"]);
        assert_eq!(code, 0);
        assert!(out.contains("Full house"));
    }

    #[test]
    fn handler_errors_are_printed_once() {
        let (code, _, err) = run_args(&["sixmax", "eval", "As", "As", "Kd", "Qh", "Jc"]);
        assert_eq!(code, 2);
        assert_eq!(err.matches("Error:").count(), 1);
        assert!(err.contains("duplicate card As"));
    }
}
