//! Path normalization and segment extraction.

/// Collapses every run of consecutive `/` into a single `/`.
pub fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

/// Splits a collapsed path into segments after removing one leading `/`.
///
/// Returns `None` for `/` and the empty path. A trailing slash yields a
/// trailing empty segment.
pub fn path_segments(path: &str) -> Option<Vec<String>> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        return None;
    }
    Some(rest.split('/').map(str::to_string).collect())
}
