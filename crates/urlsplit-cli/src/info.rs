//! Parser metadata shown by `urlsplit about`.

use serde::Serialize;

/// Static description of the URL parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParserInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    /// Values of `std::env::consts::OS` the parser is known to work on.
    pub compatible: &'static [&'static str],
}

pub const INFO: ParserInfo = ParserInfo {
    name: "url",
    version: env!("CARGO_PKG_VERSION"),
    description: "URL string parser",
    author: "urlsplit contributors",
    compatible: &["linux", "macos", "windows", "freebsd", "aix"],
};
