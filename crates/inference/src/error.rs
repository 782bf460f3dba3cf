use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint could not be reached at the transport level.
    #[error("inference request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered, but with a non-2xx status.
    #[error("inference endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx reply whose body did not yield a non-empty generated text.
    #[error("invalid inference response: {reason}")]
    InvalidResponse { reason: String },
}

impl Error {
    #[must_use]
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
