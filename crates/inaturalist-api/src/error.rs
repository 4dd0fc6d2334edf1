//! Error types for the iNaturalist API client

use std::fmt;

/// Errors that can occur when interacting with the iNaturalist API
#[derive(Debug)]
pub enum InatError {
    /// The API kept answering 429 after every allowed retry
    RateLimitExceeded { context: String, retries: u32 },
    /// Non-success status other than 429
    Http {
        status: reqwest::StatusCode,
        context: String,
    },
    /// Transport or body decoding failure
    Request(reqwest::Error),
    /// Request URL could not be built
    InvalidUrl(url::ParseError),
}

impl InatError {
    /// HTTP status associated with the error, if any
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::RateLimitExceeded { .. } => Some(reqwest::StatusCode::TOO_MANY_REQUESTS),
            Self::Http { status, .. } => Some(*status),
            Self::Request(e) => e.status(),
            Self::InvalidUrl(_) => None,
        }
    }
}

impl fmt::Display for InatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimitExceeded { context, retries } => write!(
                f,
                "iNaturalist rate limit exceeded after {} retries for {}",
                retries, context
            ),
            Self::Http { status, context } => {
                write!(f, "iNaturalist returned status {} for {}", status, context)
            }
            Self::Request(e) => write!(f, "iNaturalist request error: {}", e),
            Self::InvalidUrl(e) => write!(f, "Invalid iNaturalist URL: {}", e),
        }
    }
}

impl std::error::Error for InatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            Self::InvalidUrl(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for InatError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<url::ParseError> for InatError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e)
    }
}

/// Result type for iNaturalist API operations
pub type Result<T> = std::result::Result<T, InatError>;
