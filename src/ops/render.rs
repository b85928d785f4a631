//! Rendering of search matches.

use std::io::{self, Write};

use crate::core::package::Package;

/// Text colors for human-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    highlight: &'static str,
    text: &'static str,
    reset: &'static str,
}

impl Palette {
    /// Dark cyan package names, dark gray details.
    pub const COLORED: Palette = Palette {
        highlight: "\x1b[36m",
        text: "\x1b[90m",
        reset: "\x1b[0m",
    };

    /// No escape codes.
    pub const PLAIN: Palette = Palette {
        highlight: "",
        text: "",
        reset: "",
    };

    pub fn new(color: bool) -> Self {
        if color {
            Palette::COLORED
        } else {
            Palette::PLAIN
        }
    }
}

/// Write each package as a three-line block followed by a blank line.
pub fn render_text<W: Write>(out: &mut W, packages: &[Package], palette: Palette) -> io::Result<()> {
    let Palette {
        highlight,
        text,
        reset,
    } = palette;

    for pkg in packages {
        writeln!(out, "  {highlight}{}{reset}", pkg.repo)?;
        writeln!(out, "  url: {text}{}{reset}", pkg.url)?;
        writeln!(out, "  desc: {text}{}{reset}", pkg.desc)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write the packages as a single JSON array of `{repo,url,desc}` objects.
pub fn render_json<W: Write>(out: &mut W, packages: &[Package]) -> io::Result<()> {
    serde_json::to_writer(&mut *out, packages)?;
    writeln!(out)
}
