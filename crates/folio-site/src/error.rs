//! Error types for the portfolio site.
//!
//! None of these reach the visitor verbatim. Storage failures degrade to an
//! unpersisted preference and relay failures fold into the generic error
//! banner of the contact form.

use thiserror::Error;

use crate::state::ContactField;

/// Errors from the preference store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform offers no persistent storage (private mode, no window, ...)
    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),

    /// I/O error while reading or writing the preference file
    #[error("I/O error: {0}")]
    Io(String),

    /// The preference file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl StorageError {
    /// Create a new Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Errors from the hosted email relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Service id, template id or public key is missing
    #[error("Email relay is not configured")]
    NotConfigured,

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be read
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            RelayError::Decode(err.to_string())
        } else {
            RelayError::Transport(err.to_string())
        }
    }
}

/// Local guards that stop a contact submission before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A required field is blank
    #[error("{0} is required")]
    MissingField(ContactField),

    /// The email field does not look like an address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// A submission is already in flight
    #[error("A message is already being sent")]
    AlreadySubmitting,
}
