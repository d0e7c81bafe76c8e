//! Error types for table loading, preference storage and configuration.

use crate::locale::Locale;
use thiserror::Error;

/// Errors raised while building a translation table.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Locale payload was not valid JSON.
    #[error("invalid translation payload for locale {locale}")]
    InvalidPayload {
        /// Locale being loaded.
        locale: Locale,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// Locale payload was valid JSON but not a flat object.
    #[error("translation payload for locale {locale} must be a JSON object")]
    NotAnObject {
        /// Locale being loaded.
        locale: Locale,
    },
    /// A translation value was not a string.
    #[error("translation {key} for locale {locale} is not a string")]
    NonStringEntry {
        /// Locale being loaded.
        locale: Locale,
        /// Offending key.
        key: String,
    },
}

/// Errors raised by preference backends.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Storage could not be reached or read.
    #[error("failed to read preference {key}: {detail}")]
    Read {
        /// Storage key.
        key: String,
        /// Backend detail.
        detail: String,
    },
    /// Storage rejected the write (quota, private mode).
    #[error("failed to write preference {key}: {detail}")]
    Write {
        /// Storage key.
        key: String,
        /// Backend detail.
        detail: String,
    },
}

/// Errors raised when validating [`crate::config::SiteConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A required string field was empty.
    #[error("configuration field {field} must not be empty")]
    EmptyField {
        /// Name of the empty field.
        field: &'static str,
    },
    /// Numeric field was outside its accepted range.
    #[error("configuration field {field} is out of range")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value rendered for diagnostics.
        value: String,
    },
}
