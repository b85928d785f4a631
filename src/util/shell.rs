//! Diagnostic output for the command-line tools.
//!
//! Everything the Shell prints goes to stderr. Stdout is reserved for
//! command results (search matches, provider JSON), so diagnostics never
//! interleave with machine-readable output.

use std::error::Error;
use std::fmt::Display;
use std::io::{self, IsTerminal};

use indicatif::{ProgressBar, ProgressStyle};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Default: status messages + progress bars
    #[default]
    Normal,
    /// Status messages, no progress bars
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Never use ANSI colors.
    Never,
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // In-progress (cyan)
    Fetching,
    Searching,

    // Success (green)
    Finished,

    // Info (blue)
    Info,

    // Warning (yellow)
    Skipped,
    Warning,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Fetching => "Fetching",
            Status::Searching => "Searching",
            Status::Finished => "Finished",
            Status::Info => "Info",
            Status::Skipped => "Skipped",
            Status::Warning => "Warning",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Status::Fetching | Status::Searching => "\x1b[1;36m",
            Status::Finished => "\x1b[1;32m",
            Status::Info => "\x1b[1;34m",
            Status::Skipped | Status::Warning => "\x1b[1;33m",
        }
    }

    /// Width for right alignment.
    fn width(&self) -> usize {
        12
    }
}

/// Central handle for diagnostic output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    /// Create a new shell.
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
        }
    }

    /// Create a shell from the `--verbose` flag.
    pub fn from_flags(verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Shell::new(verbosity, color)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Print a status message as `{status:>12} {message}`.
    pub fn status(&self, status: Status, msg: impl Display) {
        eprintln!("{} {}", self.format_status(status), msg);
    }

    /// Print an info message.
    pub fn note(&self, msg: impl Display) {
        self.status(Status::Info, msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: impl Display) {
        self.status(Status::Warning, msg);
    }

    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();
        let width = status.width();

        if self.use_color {
            format!("{}{:>width$}\x1b[0m", status.color_code(), text, width = width)
        } else {
            format!("{:>width$}", text, width = width)
        }
    }

    /// Create a progress bar on stderr.
    ///
    /// Hidden in verbose mode, when stderr is not a terminal, and
    /// for fewer than two items.
    pub fn progress(&self, total: u64, msg: impl Display) -> Progress {
        let pb = if self.verbosity != Verbosity::Normal
            || total < 2
            || !io::stderr().is_terminal()
        {
            None
        } else {
            let pb = ProgressBar::new(total);
            if let Ok(style) =
                ProgressStyle::default_bar().template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb.set_message(msg.to_string());
            Some(pb)
        };

        Progress { pb }
    }
}

/// Progress bar wrapper that respects shell mode.
pub struct Progress {
    pb: Option<ProgressBar>,
}

impl Progress {
    /// Advance the bar.
    pub fn inc(&self, delta: u64) {
        if let Some(pb) = &self.pb {
            pb.inc(delta);
        }
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.finish_and_clear();
        }
    }
}

/// Render an error and its chain of causes on one line.
pub fn error_chain(err: &dyn Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_formatting() {
        let shell = Shell::new(Verbosity::Normal, ColorChoice::Never);

        let formatted = shell.format_status(Status::Skipped);
        assert_eq!(formatted.trim(), "Skipped");
        assert_eq!(formatted.len(), 12);

        let colored = Shell {
            verbosity: Verbosity::Normal,
            use_color: true,
        };
        assert!(colored.format_status(Status::Warning).starts_with("\x1b[1;33m"));
        assert!(colored.format_status(Status::Finished).starts_with("\x1b[1;32m"));
    }

    #[test]
    fn test_from_flags() {
        assert!(!Shell::from_flags(false, ColorChoice::Never).is_verbose());
        assert!(Shell::from_flags(true, ColorChoice::Never).is_verbose());
    }

    #[test]
    fn test_progress_hidden_when_not_normal() {
        let shell = Shell::new(Verbosity::Verbose, ColorChoice::Never);
        let progress = shell.progress(10, "Searching");
        progress.inc(3);
        progress.finish();
        assert!(progress.pb.is_none());
    }

    #[test]
    fn test_error_chain() {
        let inner = io::Error::new(io::ErrorKind::NotFound, "no such file");
        assert_eq!(error_chain(&Wrapper(inner)), "wrapped: no such file");
    }

    #[derive(Debug)]
    struct Wrapper(io::Error);

    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wrapped")
        }
    }

    impl Error for Wrapper {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }
}
