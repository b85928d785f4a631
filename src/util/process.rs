//! Subprocess execution utilities.
//!
//! Programs are always spawned directly with an argument vector; nothing is
//! routed through a shell.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output, Stdio};

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<OsString>,
    capture_stderr: bool,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            capture_stderr: true,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_os_string()));
        self
    }

    /// Let the child write its diagnostics straight to our stderr.
    pub fn inherit_stderr(mut self) -> Self {
        self.capture_stderr = false;
        self
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Execute the command and wait for completion, capturing stdout.
    ///
    /// Captured pipes are drained while the child runs, so a child writing
    /// more than a pipe buffer's worth of output cannot stall.
    pub fn exec(&self) -> io::Result<Output> {
        let mut cmd = self.build_command();
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(if self.capture_stderr {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });

        cmd.spawn()?.wait_with_output()
    }

    /// Execute with inherited stdio and return the exit status only.
    pub fn status(&self) -> io::Result<ExitStatus> {
        self.build_command().status()
    }

    /// Display the command for messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_process_builder() {
        let output = ProcessBuilder::new("echo").arg("hello").exec().unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_large_output_does_not_stall() {
        // Well past the 64 KiB pipe buffer
        let output = ProcessBuilder::new("sh")
            .args(["-c", "head -c 1048576 /dev/zero"])
            .exec()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(output.stdout.len(), 1_048_576);
    }

    #[test]
    fn test_spawn_failure() {
        let err = ProcessBuilder::new("definitely-not-a-real-program-xyz")
            .exec()
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_display_command() {
        let pb = ProcessBuilder::new("clib-search-github").args(["-c", "--url", "http://x"]);

        assert_eq!(pb.display_command(), "clib-search-github -c --url http://x");
    }
}
