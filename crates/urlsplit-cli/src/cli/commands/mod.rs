//! CLI command handlers. Each command is in its own file.

mod about;
mod parse;

pub use about::run_about;
pub use parse::{run_parse, ParseFlags};
