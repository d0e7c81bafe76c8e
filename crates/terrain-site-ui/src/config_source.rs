//! Resolve the site configuration from the optional inline JSON block.
//!
//! Pages may embed `<script type="application/json" id="terrain-site-config">`
//! to override markup hooks or timings; absent blocks mean defaults.

use terrain_site_i18n::{ConfigError, SiteConfig};
use thiserror::Error;

/// Element id of the inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "terrain-site-config";

/// Failures while reading the inline configuration.
#[derive(Debug, Error)]
pub enum ConfigSourceError {
    /// Block content was not valid configuration JSON.
    #[error("site configuration is not valid JSON")]
    Parse(#[from] serde_json::Error),
    /// Block parsed but failed validation.
    #[error("site configuration rejected")]
    Invalid(#[from] ConfigError),
}

/// Build the configuration from the inline block's text, if any.
///
/// # Errors
///
/// Returns an error when the block is present but malformed or invalid.
pub fn resolve_config(raw: Option<&str>) -> Result<SiteConfig, ConfigSourceError> {
    let config = match raw.map(str::trim) {
        None | Some("") => SiteConfig::default(),
        Some(raw) => SiteConfig::from_json(raw)?,
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain_site_i18n::Locale;

    #[test]
    fn missing_or_blank_block_yields_defaults() -> Result<(), ConfigSourceError> {
        assert_eq!(resolve_config(None)?, SiteConfig::default());
        assert_eq!(resolve_config(Some("  \n "))?, SiteConfig::default());
        Ok(())
    }

    #[test]
    fn override_is_applied() -> Result<(), ConfigSourceError> {
        let config = resolve_config(Some(r#"{"default_language":"en"}"#))?;
        assert_eq!(config.default_language, Locale::En);
        Ok(())
    }

    #[test]
    fn malformed_and_invalid_blocks_are_rejected() {
        assert!(matches!(
            resolve_config(Some("{ nope")),
            Err(ConfigSourceError::Parse(_))
        ));
        assert!(matches!(
            resolve_config(Some(r#"{"storage_key":""}"#)),
            Err(ConfigSourceError::Invalid(ConfigError::EmptyField { field: "storage_key" }))
        ));
    }
}
