//! clib - package manager for the C programming language
//!
//! `clib <command> [args...]` runs the executable `clib-<command>`.

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    if let Some(first) = std::env::args_os().nth(1) {
        let first = first.to_string_lossy();
        if is_unknown_long_option(&first) {
            eprintln!("Unknown option: \"{}\"", first);
            return Ok(1);
        }
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return Ok(parse_error(e)),
    };

    clib::util::logging::init(false);

    match cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(0)
        }
        Some(Commands::Help { command, .. }) => commands::help::execute(command),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
        Some(Commands::External(args)) => commands::external::execute(args),
    }
}

/// A leading `--word` other than `--help` and `--version`, including a bare
/// `--`, which clap would otherwise take as the end of options.
fn is_unknown_long_option(arg: &str) -> bool {
    arg.starts_with("--") && arg != "--help" && arg != "--version"
}

/// Report a parse failure and pick the exit code.
fn parse_error(e: clap::Error) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            0
        }
        ErrorKind::UnknownArgument => {
            match e.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => eprintln!("Unknown option: \"{}\"", arg),
                _ => {
                    let _ = e.print();
                }
            }
            1
        }
        _ => {
            let _ = e.print();
            1
        }
    }
}
