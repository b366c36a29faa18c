//! Extraction of username, password, hostname and port from a netloc.

use crate::error::AuthorityError;

/// The parts of a `user:pass@host:port` authority. Empty parts are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authority {
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
}

impl Authority {
    /// Parses a raw netloc. Only the port can make this fail.
    pub fn parse(netloc: &str) -> Result<Self, AuthorityError> {
        let (userinfo, hostinfo) = match netloc.rsplit_once('@') {
            Some((userinfo, hostinfo)) => (Some(userinfo), hostinfo),
            None => (None, netloc),
        };

        let (username, password) = match userinfo {
            Some(info) => match info.split_once(':') {
                Some((user, pass)) => (non_empty(user), non_empty(pass)),
                None => (non_empty(info), None),
            },
            None => (None, None),
        };

        let (host, port) = split_host_port(hostinfo);

        Ok(Authority {
            username,
            password,
            hostname: non_empty(host).as_deref().map(lowercase_host),
            port: port.filter(|p| !p.is_empty()).map(parse_port).transpose()?,
        })
    }
}

fn split_host_port(hostinfo: &str) -> (&str, Option<&str>) {
    match hostinfo.split_once('[') {
        Some((_, bracketed)) => {
            let (host, after) = bracketed.split_once(']').unwrap_or((bracketed, ""));
            (host, after.split_once(':').map(|(_, port)| port))
        }
        None => match hostinfo.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (hostinfo, None),
        },
    }
}

/// Lower-cases the host but leaves an IPv6 zone id (`%eth0`) alone.
fn lowercase_host(host: &str) -> String {
    match host.split_once('%') {
        Some((addr, zone)) => format!("{}%{}", addr.to_lowercase(), zone),
        None => host.to_lowercase(),
    }
}

fn parse_port(port: &str) -> Result<u16, AuthorityError> {
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AuthorityError::InvalidPort(port.to_string()));
    }
    port.parse::<u16>()
        .map_err(|_| AuthorityError::PortOutOfRange(port.to_string()))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
