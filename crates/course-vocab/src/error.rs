//! Error types for the vocabulary builder

use std::fmt;

#[derive(Debug)]
pub enum VocabError {
    /// iNaturalist API error (rate limit exhausted, bad status, transport)
    Inat(inaturalist_api::InatError),
    /// Writing the output file failed
    Io(std::io::Error),
    /// Serializing the catalog failed
    Json(serde_json::Error),
    /// Configuration error
    Config(String),
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inat(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for VocabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Inat(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<inaturalist_api::InatError> for VocabError {
    fn from(e: inaturalist_api::InatError) -> Self {
        Self::Inat(e)
    }
}

impl From<std::io::Error> for VocabError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for VocabError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for VocabError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;
