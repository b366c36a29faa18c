//! Platform compatibility warning.

use crate::info::ParserInfo;

pub fn is_compatible(os: &str, compatible: &[&str]) -> bool {
    compatible.contains(&os)
}

/// Warns when the current OS is not in `info.compatible`. Never fails; the
/// stderr line is suppressed when `quiet` is set.
pub fn check_compatibility(info: &ParserInfo, quiet: bool) -> bool {
    let os = std::env::consts::OS;
    if is_compatible(os, info.compatible) {
        return true;
    }
    tracing::warn!(os, parser = info.name, "platform not in compatible list");
    if !quiet {
        eprintln!(
            "urlsplit warning: the '{}' parser is not compatible with your OS ({})",
            info.name, os
        );
    }
    false
}
