#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Localization core for the JAXA terrain generator site.
//!
//! Owns the bilingual translation table, the active language and the render
//! pass that keeps every `data-i18n` element in sync with it. The crate is
//! DOM-free: the browser adapter lives in `terrain-site-ui`, and
//! [`MemoryDocument`] / [`MemoryPreferences`] stand in for the page and
//! `localStorage` in tests and tooling.

pub mod config;
pub mod document;
pub mod error;
pub mod locale;
pub mod preferences;
pub mod store;
pub mod table;

pub use config::{CopyConfig, ScrollConfig, SiteConfig};
pub use document::{
    Binding, Content, Document, ElementContent, ElementId, ElementKind, MemoryDocument,
    discover_bindings,
};
pub use error::{ConfigError, I18nError, PreferenceError};
pub use locale::{DEFAULT_LOCALE, LanguageTag, Locale};
pub use preferences::{MemoryPreferences, PreferenceStore};
pub use store::{LocalizationStore, RenderReport};
pub use table::{MissingKey, TranslationTable};
