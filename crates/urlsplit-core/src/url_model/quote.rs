//! Percent-encoding passes for paths and query strings.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and `_.-~` gets escaped.
const ALWAYS_SAFE_ONLY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

const PATH_ESCAPE: &AsciiSet = &ALWAYS_SAFE_ONLY.remove(b'/');

/// `+` passes through untouched, so a literal `+` and an encoded space look
/// the same in the quoted query.
const QUERY_ESCAPE: &AsciiSet = &ALWAYS_SAFE_ONLY.remove(b'+').remove(b' ');

/// Percent-encodes a path, keeping `/` literal. A `%` is escaped too, so an
/// already-encoded path is encoded a second time.
pub fn quote_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_ESCAPE).to_string()
}

/// Percent-encodes a query string with spaces as `+`. `=` and `&` are escaped.
pub fn quote_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ESCAPE)
        .to_string()
        .replace(' ', "+")
}

/// Decodes `%XX` escapes. Invalid escapes are kept, invalid UTF-8 is replaced.
pub fn unquote(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

/// Like [`unquote`] but decodes `+` to a space first.
pub fn unquote_plus(text: &str) -> String {
    unquote(&text.replace('+', " "))
}
