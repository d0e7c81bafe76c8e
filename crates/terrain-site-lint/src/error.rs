//! Error types for site lint runs.

use std::path::PathBuf;
use terrain_site_i18n::I18nError;
use thiserror::Error;

/// Result alias for lint operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Errors that abort a lint run (findings are reported, not raised).
#[derive(Debug, Error)]
pub enum LintError {
    /// The site root does not exist on disk.
    #[error("site root {} does not exist", .path.display())]
    SiteRootMissing {
        /// Missing site root.
        path: PathBuf,
    },
    /// Failed to read a markup file.
    #[error("failed to read markup {}", .path.display())]
    ReadMarkup {
        /// Markup file path.
        path: PathBuf,
        /// IO error.
        #[source]
        source: std::io::Error,
    },
    /// Failed to read a translation file.
    #[error("failed to read translations {}", .path.display())]
    ReadTable {
        /// Translation file path.
        path: PathBuf,
        /// IO error.
        #[source]
        source: std::io::Error,
    },
    /// A translation file was malformed.
    #[error(transparent)]
    Table(#[from] I18nError),
    /// An attribute pattern failed to compile.
    #[error("invalid attribute pattern for {attribute}")]
    Pattern {
        /// Attribute the pattern was built for.
        attribute: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}
