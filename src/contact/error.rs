use thiserror::Error;

use crate::i18n::TranslationKey;

/// Defines errors that may occur while sending the request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Error when the request could not be completed (offline, DNS, CORS, ...)
    #[error("Request could not be completed: {0}")]
    Failed(String),
}

/// Defines the ways a contact form submission can end without success
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Error when required fields are missing or empty; no request is sent
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// Error when the endpoint answers with a non-success status
    #[error("Form endpoint rejected the submission with status {status}")]
    Rejected { status: u16 },
    /// Error when the request could not be completed
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Status message shown to the user for this error.
    #[must_use]
    pub const fn status_key(&self) -> TranslationKey {
        match self {
            Self::MissingFields(_) => TranslationKey::FormRequired,
            Self::Rejected { .. } => TranslationKey::FormFailed,
            Self::Transport(_) => TranslationKey::FormOffline,
        }
    }
}
