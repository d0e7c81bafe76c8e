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

//! Thin CLI entrypoint that delegates to the library implementation.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use terrain_site_lint::logging::{DEFAULT_LOG_LEVEL, LogFormat, init_logging};
use terrain_site_lint::{Finding, LintOptions, LintReport, lint};

/// Check translation coverage for the terrain site.
#[derive(Debug, Parser)]
#[command(name = "terrain-site-lint", version)]
struct Cli {
    /// Directory scanned for HTML files.
    #[arg(long, default_value = ".")]
    site_root: PathBuf,
    /// Directory with `ja.json` / `en.json`; the bundled tables are used when omitted.
    #[arg(long)]
    table_dir: Option<PathBuf>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, env = "TERRAIN_SITE_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    /// Log output format; pretty in debug builds, JSON in release builds.
    #[arg(long, value_enum, env = "TERRAIN_SITE_LOG_FORMAT", default_value_t = LogFormat::infer())]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point: exits non-zero when the lint reports findings.
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format)?;

    let mut options = LintOptions::new(cli.site_root);
    options.table_dir = cli.table_dir;
    let report = lint(&options).context("site lint failed")?;

    match cli.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_text(report: &LintReport) {
    for finding in &report.findings {
        match finding {
            Finding::MissingTranslation { locale, key } => {
                println!("table: key `{key}` missing for locale {locale}");
            }
            Finding::UnknownKey {
                file,
                line,
                key,
                missing_in,
            } => {
                let locales: Vec<&str> = missing_in.iter().map(|locale| locale.code()).collect();
                println!(
                    "{}:{line}: key `{key}` missing for {}",
                    file.display(),
                    locales.join(", ")
                );
            }
            Finding::UnsupportedToggle {
                file,
                line,
                language,
            } => {
                println!(
                    "{}:{line}: toggle selects unsupported language `{language}`",
                    file.display()
                );
            }
        }
    }
    println!(
        "{} file(s) scanned, {} finding(s)",
        report.files_scanned,
        report.findings.len()
    );
}
