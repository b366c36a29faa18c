//! The decomposed URL record.

use serde::Serialize;

use super::query::QueryMap;

/// Decomposed and normalized view of a single URL.
///
/// Serializes to a JSON object with every field present, `null` for absent
/// values. Field order is part of the output format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    /// Normalized URL with path and query percent-encoded.
    pub quoted: Option<String>,
    /// Normalized URL with path and query percent-decoded.
    pub unquoted: Option<String>,
    pub scheme: Option<String>,
    /// Raw authority, `user:pass@host:port`.
    pub netloc: Option<String>,
    /// Decoded path with repeated slashes collapsed.
    pub path: Option<String>,
    pub path_list: Option<Vec<String>>,
    pub query: Option<QueryMap>,
    /// One `[key, value]` per occurrence.
    pub query_list: Option<Vec<(String, String)>>,
    pub fragment: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
}

impl UrlRecord {
    /// True when no field carries a value, as for empty input.
    pub fn is_empty(&self) -> bool {
        *self == UrlRecord::default()
    }
}

/// Turns an empty string into `None`.
pub(super) fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Turns an empty vector into `None`.
pub(super) fn non_empty_vec<T>(v: Vec<T>) -> Option<Vec<T>> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}
