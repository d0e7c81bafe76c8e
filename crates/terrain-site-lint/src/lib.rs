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

//! Translation coverage lint for the terrain site.
//!
//! # Design
//! - Pure library surface (`lint`) used by the thin CLI entrypoint.
//! - Reads only the site root and optional table directory supplied by the caller.
//! - Markup is scanned with attribute patterns, not parsed; the binder only needs attribute values.

use crate::error::{LintError, Result};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use terrain_site_i18n::{Locale, SiteConfig, TranslationTable};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

pub mod error;
pub mod logging;

const SKIPPED_DIRS: [&str; 4] = ["target", "node_modules", ".git", "dist"];

/// Inputs for one lint run.
#[derive(Clone, Debug)]
pub struct LintOptions {
    /// Directory scanned for `*.html` files.
    pub site_root: PathBuf,
    /// Directory holding `<code>.json` locale files; bundled tables when `None`.
    pub table_dir: Option<PathBuf>,
    /// Attribute carrying translation keys.
    pub key_attribute: String,
    /// Attribute carrying toggle languages.
    pub toggle_attribute: String,
}

impl LintOptions {
    /// Options using the site's default markup contract.
    #[must_use]
    pub fn new(site_root: impl Into<PathBuf>) -> Self {
        let config = SiteConfig::default();
        Self {
            site_root: site_root.into(),
            table_dir: None,
            key_attribute: config.key_attribute,
            toggle_attribute: config.toggle_attribute,
        }
    }
}

/// One problem found by the lint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A key is translated in one locale but absent or empty in another.
    MissingTranslation {
        /// Locale lacking the key.
        locale: Locale,
        /// Translation key.
        key: String,
    },
    /// Markup references a key some locale does not translate.
    UnknownKey {
        /// File containing the reference.
        file: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Referenced key.
        key: String,
        /// Locales lacking the key.
        missing_in: Vec<Locale>,
    },
    /// A toggle control selects a language the table does not carry.
    UnsupportedToggle {
        /// File containing the control.
        file: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Declared language.
        language: String,
    },
}

/// Result of a lint run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    /// Number of markup files scanned.
    pub files_scanned: usize,
    /// Findings in discovery order.
    pub findings: Vec<Finding>,
}

impl LintReport {
    /// Whether the run produced no findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Attribute reference found in markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeRef {
    /// 1-based line number.
    pub line: usize,
    /// Attribute value.
    pub value: String,
}

/// Extracts the values of one attribute from markup text.
#[derive(Clone, Debug)]
pub struct AttributeScanner {
    pattern: Regex,
}

impl AttributeScanner {
    /// Scanner for `attribute="value"` (single or double quotes).
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute produces an invalid pattern.
    pub fn new(attribute: &str) -> Result<Self> {
        let raw = format!(
            r#"(?:^|[\s<])({})\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
            regex::escape(attribute)
        );
        let pattern = Regex::new(&raw).map_err(|source| LintError::Pattern {
            attribute: attribute.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Every value of the attribute in `source`, in order.
    #[must_use]
    pub fn scan(&self, source: &str) -> Vec<AttributeRef> {
        source
            .lines()
            .enumerate()
            .flat_map(|(index, line)| {
                self.pattern.captures_iter(line).filter_map(move |captures| {
                    let value = captures.get(2).or_else(|| captures.get(3))?;
                    Some(AttributeRef {
                        line: index + 1,
                        value: value.as_str().to_string(),
                    })
                })
            })
            .collect()
    }
}

/// Load locale tables from `dir/<code>.json`, or the bundled tables when `dir` is `None`.
///
/// # Errors
///
/// Returns an error if a file is unreadable or malformed.
pub fn load_table(dir: Option<&Path>) -> Result<TranslationTable> {
    let Some(dir) = dir else {
        return Ok(TranslationTable::bundled()?);
    };
    let mut table = TranslationTable::new();
    for locale in Locale::all() {
        let path = dir.join(format!("{}.json", locale.code()));
        let raw = fs::read_to_string(&path).map_err(|source| LintError::ReadTable {
            path: path.clone(),
            source,
        })?;
        table.insert_json(locale, &raw)?;
    }
    Ok(table)
}

/// Run the lint over `options.site_root`.
///
/// # Errors
///
/// Returns an error if the site root is missing or an input cannot be read.
pub fn lint(options: &LintOptions) -> Result<LintReport> {
    if !options.site_root.exists() {
        return Err(LintError::SiteRootMissing {
            path: options.site_root.clone(),
        });
    }

    let table = load_table(options.table_dir.as_deref())?;
    let keys = AttributeScanner::new(&options.key_attribute)?;
    let toggles = AttributeScanner::new(&options.toggle_attribute)?;

    let mut report = LintReport::default();
    report
        .findings
        .extend(table.coverage().into_iter().map(|missing| Finding::MissingTranslation {
            locale: missing.locale,
            key: missing.key,
        }));

    for path in markup_files(&options.site_root) {
        let source = fs::read_to_string(&path).map_err(|source| LintError::ReadMarkup {
            path: path.clone(),
            source,
        })?;
        report.files_scanned += 1;
        check_markup(&table, &path, &source, &keys, &toggles, &mut report.findings);
    }

    info!(
        files = report.files_scanned,
        findings = report.findings.len(),
        "site lint complete"
    );
    Ok(report)
}

fn check_markup(
    table: &TranslationTable,
    path: &Path,
    source: &str,
    keys: &AttributeScanner,
    toggles: &AttributeScanner,
    findings: &mut Vec<Finding>,
) {
    for reference in keys.scan(source) {
        let missing_in: Vec<Locale> = Locale::all()
            .into_iter()
            .filter(|locale| !table.has_translation(*locale, &reference.value))
            .collect();
        if !missing_in.is_empty() {
            findings.push(Finding::UnknownKey {
                file: path.to_path_buf(),
                line: reference.line,
                key: reference.value,
                missing_in,
            });
        }
    }

    for reference in toggles.scan(source) {
        let supported = Locale::from_lang_tag(&reference.value)
            .is_some_and(|locale| locale.code() == reference.value.trim().to_ascii_lowercase());
        if !supported {
            findings.push(Finding::UnsupportedToggle {
                file: path.to_path_buf(),
                line: reference.line,
                language: reference.value,
            });
        }
    }
}

fn markup_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry))
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        })
        .collect();
    files.sort();
    debug!(count = files.len(), "markup files discovered");
    files
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}
