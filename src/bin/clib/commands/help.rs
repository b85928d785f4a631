//! `clib help <command>`
//!
//! Runs `clib-<command> --help`.

use anyhow::Result;

use super::external;

pub fn execute(command: Option<String>) -> Result<i32> {
    match command {
        Some(command) if !command.trim().is_empty() => {
            external::dispatch(command.trim(), vec!["--help".into()])
        }
        _ => {
            eprintln!("Help command required.");
            Ok(1)
        }
    }
}
