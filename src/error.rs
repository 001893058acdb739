use thiserror::Error;

use crate::constants::UNKNOWN_ERROR;

/// Why a user fetch did not produce a user list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Server answered, but not with a success status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request could not complete (connect, read or decode failure)
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    /// Transport failure from an underlying description; an empty one
    /// falls back to a fixed message.
    pub fn transport(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.trim().is_empty() {
            FetchError::Transport(UNKNOWN_ERROR.to_string())
        } else {
            FetchError::Transport(description)
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if !status.is_success() => FetchError::Http {
                status: status.as_u16(),
            },
            _ => FetchError::transport(err.to_string()),
        }
    }
}
