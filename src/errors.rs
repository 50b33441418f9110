//! Error types for event detail decoding

use thiserror::Error;

use crate::events::DetailType;

/// Errors that can occur while decoding an event envelope or its detail
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The envelope's detail type is not in the registry
    #[error("Unrecognized detail type: {0:?}")]
    UnrecognizedDetailType(String),

    /// The detail payload is not valid JSON or does not fit the schema
    #[error("Failed to decode \"{detail_type}\" detail: {source}")]
    Detail {
        detail_type: DetailType,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope document itself could not be parsed
    #[error("Malformed envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// A record could not be encoded back to JSON
    #[error("Failed to encode event detail: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    fn json(&self) -> Option<&serde_json::Error> {
        match self {
            DecodeError::UnrecognizedDetailType(_) => None,
            DecodeError::Detail { source, .. } => Some(source),
            DecodeError::Envelope(source) | DecodeError::Encode(source) => Some(source),
        }
    }

    /// One-based line of the JSON diagnostic, if there is one
    pub fn line(&self) -> Option<usize> {
        self.json().map(serde_json::Error::line)
    }

    /// One-based column of the JSON diagnostic, if there is one
    pub fn column(&self) -> Option<usize> {
        self.json().map(serde_json::Error::column)
    }

    /// True when the payload was not well-formed JSON (including truncation)
    pub fn is_syntax(&self) -> bool {
        self.json().is_some_and(|e| e.is_syntax() || e.is_eof())
    }

    /// True when the JSON was well-formed but a value had the wrong type
    pub fn is_data(&self) -> bool {
        self.json().is_some_and(serde_json::Error::is_data)
    }
}
