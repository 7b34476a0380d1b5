//! Error types for the Roster plugin.
//!
//! This module defines the centralized error type [`RosterError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The directory load is the only fallible user-facing operation. Its causes are
//! kept apart here for logging, but the UI collapses every one of them into the
//! same generic "failed to load" indicator.

use thiserror::Error;

/// The main error type for Roster plugin operations.
///
/// # Examples
///
/// ```
/// use roster::domain::RosterError;
///
/// let err = RosterError::Status(503);
/// assert_eq!(err.to_string(), "Directory request failed with status 503");
/// assert!(err.is_load_failure());
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// The directory endpoint answered with a non-2xx status.
    ///
    /// Zellij also reports transport failures (DNS, refused connection) as a
    /// non-2xx status, so this variant covers network failure too.
    #[error("Directory request failed with status {0}")]
    Status(u16),

    /// The response body is not a JSON array of user records.
    #[error("Directory response could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The load could not complete for a reason reported as text.
    ///
    /// Used for causes relayed back from the worker thread and for a denied
    /// web access permission.
    #[error("Directory load failed: {0}")]
    Load(String),

    /// Communication with background worker failed.
    ///
    /// Occurs when a worker message or response cannot be (de)serialized.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl RosterError {
    /// Returns `true` for the causes that count as "data load failed".
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        matches!(self, Self::Status(_) | Self::Parse(_) | Self::Load(_) | Self::Worker(_))
    }
}

/// A specialized `Result` type for Roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
