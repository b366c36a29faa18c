//! Splitting a URL string into its five components and joining them back.

use std::net::Ipv6Addr;

use crate::error::AuthorityError;

/// Schemes that carry an explicit authority. `unsplit_url` restores an empty
/// `//` for these so the normalized form keeps its shape.
const USES_NETLOC: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https",
    "shttp", "snews", "prospero", "rtsp", "rtsps", "rtspu", "rsync", "svn", "svn+ssh", "sftp",
    "nfs", "git", "git+ssh", "ws", "wss", "itms-services",
];

/// The five components of a URL. An absent component is the empty string,
/// which `unsplit_url` drops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitUrl {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl SplitUrl {
    /// Copy of `self` with the path and query replaced.
    pub fn with_path_and_query(&self, path: String, query: String) -> SplitUrl {
        SplitUrl {
            path,
            query,
            ..self.clone()
        }
    }

    /// Rebuilds the URL string, see [`unsplit_url`].
    pub fn to_url_string(&self) -> String {
        unsplit_url(self)
    }
}

/// Splits `input` into scheme, netloc, path, query and fragment.
///
/// Leading C0 controls and spaces are dropped, as are tabs and line breaks
/// anywhere in the string. The scheme is lower-cased. Any string splits;
/// the only failures come from bracketed hosts in the netloc.
pub fn split_url(input: &str) -> Result<SplitUrl, AuthorityError> {
    let mut url: String = input
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|&c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let mut scheme = String::new();
    if let Some(i) = url.find(':') {
        if is_scheme(&url[..i]) {
            scheme = url[..i].to_ascii_lowercase();
            url.drain(..=i);
        }
    }

    let mut netloc = String::new();
    if url.starts_with("//") {
        let end = url[2..]
            .find(|c: char| matches!(c, '/' | '?' | '#'))
            .map_or(url.len(), |pos| pos + 2);
        netloc = url[2..end].to_string();
        url.drain(..end);
        check_netloc_brackets(&netloc)?;
    }

    let mut fragment = String::new();
    if let Some(i) = url.find('#') {
        fragment = url[i + 1..].to_string();
        url.truncate(i);
    }

    let mut query = String::new();
    if let Some(i) = url.find('?') {
        query = url[i + 1..].to_string();
        url.truncate(i);
    }

    Ok(SplitUrl {
        scheme,
        netloc,
        path: url,
        query,
        fragment,
    })
}

/// Joins split components back into a URL string.
///
/// Empty query and fragment are dropped together with their `?`/`#`.
pub fn unsplit_url(parts: &SplitUrl) -> String {
    let mut url = parts.path.clone();

    if !parts.netloc.is_empty() {
        if !url.is_empty() && !url.starts_with('/') {
            url.insert(0, '/');
        }
        url = format!("//{}{}", parts.netloc, url);
    } else if url.starts_with("//")
        || (!parts.scheme.is_empty()
            && USES_NETLOC.contains(&parts.scheme.as_str())
            && (url.is_empty() || url.starts_with('/')))
    {
        url.insert_str(0, "//");
    }

    if !parts.scheme.is_empty() {
        url = format!("{}:{}", parts.scheme, url);
    }
    if !parts.query.is_empty() {
        url.push('?');
        url.push_str(&parts.query);
    }
    if !parts.fragment.is_empty() {
        url.push('#');
        url.push_str(&parts.fragment);
    }
    url
}

fn is_scheme(prefix: &str) -> bool {
    let mut bytes = prefix.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        }
        _ => false,
    }
}

fn check_netloc_brackets(netloc: &str) -> Result<(), AuthorityError> {
    let open = netloc.contains('[');
    let close = netloc.contains(']');
    if open != close {
        return Err(AuthorityError::UnbalancedBrackets(netloc.to_string()));
    }
    if open {
        let after_open = netloc.split_once('[').map_or("", |(_, rest)| rest);
        let host = after_open.split_once(']').map_or(after_open, |(host, _)| host);
        if !is_valid_bracketed_host(host) {
            return Err(AuthorityError::InvalidBracketedHost(host.to_string()));
        }
    }
    Ok(())
}

/// IPv6 (with optional `%zone`) or IPvFuture (`v1.anything`).
fn is_valid_bracketed_host(host: &str) -> bool {
    if let Some(rest) = host.strip_prefix('v') {
        return match rest.split_once('.') {
            Some((version, tail)) => {
                !version.is_empty()
                    && version.bytes().all(|b| b.is_ascii_hexdigit())
                    && !tail.is_empty()
            }
            None => false,
        };
    }
    match host.split_once('%') {
        Some((addr, zone)) => {
            !zone.is_empty() && !zone.contains('%') && addr.parse::<Ipv6Addr>().is_ok()
        }
        None => host.parse::<Ipv6Addr>().is_ok(),
    }
}
