//! Command implementations

pub mod completions;
pub mod external;
pub mod help;
