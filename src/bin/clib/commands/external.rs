//! `clib <command>` for any command without a built-in implementation.

use std::ffi::OsString;

use anyhow::{Context, Result};
use clib::ops;

pub fn execute(mut args: Vec<OsString>) -> Result<i32> {
    if args.is_empty() {
        return Ok(1);
    }
    let command = args.remove(0).to_string_lossy().into_owned();

    dispatch(&command, args)
}

/// Run `clib-<command>` with `args`, returning its exit code.
pub fn dispatch(command: &str, args: Vec<OsString>) -> Result<i32> {
    let exe_dir = ops::current_exe_dir();
    let Some(program) = ops::locate_command(command, exe_dir.as_deref()) else {
        eprintln!("Unsupported command \"{}\"", command);
        return Ok(1);
    };

    ops::run_command(&program, &args)
        .with_context(|| format!("failed to run `{}`", program.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_command() {
        let args = vec!["surely-not-installed-anywhere".into(), "x".into()];
        assert_eq!(execute(args).unwrap(), 1);
    }

    #[test]
    fn test_path_like_command_is_unsupported() {
        assert_eq!(dispatch("../bin/sh", Vec::new()).unwrap(), 1);
    }
}
