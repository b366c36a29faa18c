//! Removal of `<...>` and `URL:` wrappers around a URL.

/// Strips the `<URL:...>` style wrappers found in text and mail headers.
///
/// Accepts `scheme://host/path`, `URL:scheme://host/path`,
/// `<scheme://host/path>` and `<URL:scheme://host/path>`. The `URL:` marker
/// is case-sensitive. Surrounding whitespace is trimmed at every layer.
pub fn unwrap_url(input: &str) -> &str {
    let mut url = input.trim();
    if url.len() >= 2 && url.starts_with('<') && url.ends_with('>') {
        url = url[1..url.len() - 1].trim();
    }
    if let Some(rest) = url.strip_prefix("URL:") {
        url = rest.trim();
    }
    url
}
