//! Unified error type for the entry form.
//!
//! Every fallible operation in this crate and in the frontend's transport
//! returns [`EntryError`], so callers can use `?` and still hand a readable
//! message to the user.

use thiserror::Error;

use crate::record::Field;

/// Unified error type for form edits, validation and transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Date input that is neither empty nor `YYYY-MM-DD`
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Required fields left empty at submission time
    #[error("Missing required fields: {}", join_labels(.0))]
    MissingFields(Vec<Field>),

    /// Selector value that the reference lists do not offer
    #[error("{field} '{value}' is not a known option")]
    NotInReferenceList { field: Field, value: String },

    /// A write is already in flight
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// The request never completed (network failure, CORS rejection, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("HTTP error: {0}")]
    Http(u16),

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The record could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl EntryError {
    /// Create a transport error from any debuggable cause
    pub fn transport(cause: impl std::fmt::Debug) -> Self {
        EntryError::Transport(format!("{:?}", cause))
    }

    /// Create a decode error from any debuggable cause
    pub fn decode(cause: impl std::fmt::Debug) -> Self {
        EntryError::Decode(format!("{:?}", cause))
    }

    /// True when the failure happened on the wire rather than in the form
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            EntryError::Transport(_) | EntryError::Http(_) | EntryError::Decode(_)
        )
    }
}

impl From<serde_json::Error> for EntryError {
    fn from(err: serde_json::Error) -> Self {
        EntryError::Encode(err.to_string())
    }
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for entry operations
pub type EntryResult<T> = Result<T, EntryError>;
