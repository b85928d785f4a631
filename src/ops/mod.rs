//! High-level operations.
//!
//! This module contains the implementation of the clib commands.

pub mod dispatch;
pub mod render;
pub mod search;

pub use dispatch::{current_exe_dir, exit_code, locate_command, run_command};
pub use render::{render_json, render_text, Palette};
pub use search::{aggregate, filter, search, search_providers, SearchOptions, SearchResults};
