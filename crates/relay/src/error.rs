use thiserror::Error;

/// Failure classification carried into the error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Inbound body was not parseable JSON, or `message` was absent.
    Malformed,
    /// The generation call failed at the transport level or returned non-2xx.
    UpstreamUnavailable,
    /// The generation call succeeded but yielded no usable text.
    InvalidUpstreamResponse,
    /// Anything outside the taxonomy above.
    Unexpected,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "Malformed",
            Self::UpstreamUnavailable => "UpstreamUnavailable",
            Self::InvalidUpstreamResponse => "InvalidUpstreamResponse",
            Self::Unexpected => "Unexpected",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Malformed(String),

    #[error(transparent)]
    Upstream(#[from] parrot_inference::Error),

    #[error("{0}")]
    Unexpected(String),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Malformed(_) => ErrorKind::Malformed,
            Self::Upstream(parrot_inference::Error::InvalidResponse { .. }) => {
                ErrorKind::InvalidUpstreamResponse
            },
            Self::Upstream(_) => ErrorKind::UpstreamUnavailable,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// `"<Kind>: <detail>"` — the string the failure envelope carries.
    #[must_use]
    pub fn envelope_message(&self) -> String {
        format!("{}: {self}", self.kind())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
