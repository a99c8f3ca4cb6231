//! 言語設定の永続化

use std::fmt::Debug;

use thiserror::Error;

/// Errors raised by a preference store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing storage does not exist (e.g. disabled by the browser).
    #[error("Preference storage is unavailable")]
    Unavailable,
    /// The write was rejected (e.g. quota exceeded, private mode).
    #[error("Failed to write preference '{key}': {message}")]
    WriteFailed { key: String, message: String },
}

/// Key/value store for user preferences (browser local storage in production).
///
/// Values are stored as plain strings.
pub trait PreferenceStore: Debug {
    /// Reads `key`, `None` when absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`.
    ///
    /// # Errors
    /// - The storage is unavailable or rejects the write
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
