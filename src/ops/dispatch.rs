//! Implementation of the `clib <command>` dispatcher.
//!
//! `clib install` runs the executable `clib-install`, found first next to the
//! running `clib` binary and then on `PATH`.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::util::fs::is_executable;
use crate::util::process::ProcessBuilder;

/// Prefix of sub-command executables.
pub const COMMAND_PREFIX: &str = "clib-";

/// Executable name for a sub-command.
pub fn command_binary_name(command: &str) -> String {
    format!("{}{}{}", COMMAND_PREFIX, command, std::env::consts::EXE_SUFFIX)
}

/// Directory containing the running executable.
pub fn current_exe_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Locate the executable for `command`.
///
/// Names containing path separators are never resolved.
pub fn locate_command(command: &str, exe_dir: Option<&Path>) -> Option<PathBuf> {
    let command = command.trim();
    if command.is_empty() || command.contains(['/', '\\']) {
        return None;
    }

    let name = command_binary_name(command);

    if let Some(dir) = exe_dir {
        let candidate = dir.join(&name);
        if is_executable(&candidate) {
            tracing::debug!("found `{}` beside clib", candidate.display());
            return Some(candidate);
        }
    }

    let found = which::which(&name).ok();
    if let Some(path) = &found {
        tracing::debug!("found `{}` on PATH", path.display());
    }
    found
}

/// Run a sub-command with inherited stdio and return its exit code.
pub fn run_command<I, S>(program: &Path, args: I) -> io::Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let cmd = ProcessBuilder::new(program).args(args);
    tracing::debug!("exec: {}", cmd.display_command());

    let status = cmd.status()?;
    tracing::debug!("returned {}", status);
    Ok(exit_code(status))
}

/// Map a child's status onto our exit code: codes outside 0-255 and signal
/// deaths become 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) if (0..=255).contains(&code) => code,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_binary_name() {
        let expected = format!("clib-search{}", std::env::consts::EXE_SUFFIX);
        assert_eq!(command_binary_name("search"), expected);
    }

    #[test]
    fn test_locate_rejects_paths() {
        assert_eq!(locate_command("../search", None), None);
        assert_eq!(locate_command("a\\b", None), None);
        assert_eq!(locate_command("   ", None), None);
    }

    #[test]
    fn test_locate_unknown_command() {
        assert_eq!(locate_command("surely-not-installed-anywhere", None), None);
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::os::unix::process::ExitStatusExt;
        use tempfile::TempDir;

        fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
            let path = dir.join(name);
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_locate_beside_exe() {
            let tmp = TempDir::new().unwrap();
            let path = script(tmp.path(), "clib-frobnicate-test", "exit 0");

            assert_eq!(
                locate_command(" frobnicate-test ", Some(tmp.path())),
                Some(path)
            );
        }

        #[test]
        fn test_locate_ignores_non_executable_beside_exe() {
            let tmp = TempDir::new().unwrap();
            fs::write(tmp.path().join("clib-frobnicate-test"), "").unwrap();

            assert_eq!(locate_command("frobnicate-test", Some(tmp.path())), None);
        }

        #[test]
        fn test_run_command_exit_code() {
            let tmp = TempDir::new().unwrap();
            let path = script(tmp.path(), "clib-exit", r#"exit "$1""#);

            assert_eq!(run_command(&path, ["0"]).unwrap(), 0);
            assert_eq!(run_command(&path, ["3"]).unwrap(), 3);
        }

        #[test]
        fn test_run_command_passes_args_verbatim() {
            let tmp = TempDir::new().unwrap();
            let out = tmp.path().join("args");
            let path = script(
                tmp.path(),
                "clib-args",
                &format!(r#"printf '%s\n' "$@" > '{}'"#, out.display()),
            );

            run_command(&path, ["two words", "$HOME;"]).unwrap();
            assert_eq!(fs::read_to_string(&out).unwrap(), "two words\n$HOME;\n");
        }

        #[test]
        fn test_exit_code_signal() {
            // Raw wait status for termination by SIGKILL
            assert_eq!(exit_code(ExitStatus::from_raw(9)), 1);
            assert_eq!(exit_code(ExitStatus::from_raw(2 << 8)), 2);
        }
    }
}
