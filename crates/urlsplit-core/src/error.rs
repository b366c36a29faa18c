//! Error types for URL decomposition.

use thiserror::Error;

/// Failure to parse a URL. Everything except a malformed authority yields a
/// best-effort record, so this is the only way a parse can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed authority: {0}")]
    MalformedAuthority(#[from] AuthorityError),
}

/// What was wrong with the `user:pass@host:port` component.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    /// The port is present but is not made of ASCII digits.
    #[error("invalid port {0:?}: could not be cast to an integer")]
    InvalidPort(String),

    /// The port is numeric but does not fit in 0-65535.
    #[error("invalid port {0}: out of range 0-65535")]
    PortOutOfRange(String),

    /// `[` without `]` or the other way round.
    #[error("invalid IPv6 URL: unbalanced brackets in {0:?}")]
    UnbalancedBrackets(String),

    /// Bracketed host that is neither an IPv6 address nor an IPvFuture literal.
    #[error("invalid bracketed host {0:?}")]
    InvalidBracketedHost(String),
}

impl ParseError {
    /// True when the failure is about the port subcomponent.
    pub fn is_port_error(&self) -> bool {
        matches!(
            self,
            ParseError::MalformedAuthority(
                AuthorityError::InvalidPort(_) | AuthorityError::PortOutOfRange(_)
            )
        )
    }
}
