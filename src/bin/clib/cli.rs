//! CLI definitions using clap.

use std::ffi::OsString;

use clap::{ArgAction, Args, Parser, Subcommand};

const AFTER_HELP: &str = "\
Sub-commands:
  install [name...]    Install one or more packages
  search [query]       Search for packages
  help <cmd>           Display help for cmd

Any other command runs the executable `clib-<command>`.";

/// clib - package manager for the C programming language
#[derive(Parser)]
#[command(name = "clib")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true, disable_help_subcommand = true)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Output version number
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display help for a command
    Help {
        /// Command to describe
        command: Option<String>,

        /// Ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        _rest: Vec<String>,
    },

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Run `clib-<command>`
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
