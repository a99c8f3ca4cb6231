use thiserror::Error;

/// Defines errors that stop the page from starting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Error when a required element is not present in the markup
    #[error("Required element not found: '{selector}'")]
    MissingElement { selector: String },
    /// Error when a browser API call fails
    #[error("Browser API call failed: {0}")]
    Browser(String),
}

impl PageError {
    #[must_use]
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}
