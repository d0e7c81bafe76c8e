//! Site configuration: markup contract, storage key and collaborator tuning.
//!
//! Every field has a default matching the published site, so an override only
//! needs to name the fields it changes.

use crate::error::ConfigError;
use crate::locale::{DEFAULT_LOCALE, Locale};
use serde::{Deserialize, Serialize};

/// Top-level site configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Local storage key holding the language preference.
    pub storage_key: String,
    /// Language used when no usable preference exists.
    pub default_language: Locale,
    /// Attribute carrying an element's translation key.
    pub key_attribute: String,
    /// Attribute carrying the language a toggle control selects.
    pub toggle_attribute: String,
    /// Class marking the toggle of the active language.
    pub active_class: String,
    /// Selector for in-page anchors that scroll smoothly.
    pub anchor_selector: String,
    /// Code copy buttons.
    pub copy: CopyConfig,
    /// Header and reveal effects.
    pub scroll: ScrollConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "lang".to_string(),
            default_language: DEFAULT_LOCALE,
            key_attribute: "data-i18n".to_string(),
            toggle_attribute: "data-lang".to_string(),
            active_class: "active".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            copy: CopyConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Copy-to-clipboard buttons next to code blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// Copy buttons.
    pub button_selector: String,
    /// Ancestor block shared by a button and its code.
    pub block_selector: String,
    /// Code element inside the block.
    pub code_selector: String,
    /// Translation key for the success label.
    pub copied_key: String,
    /// Success label when the key is missing for the active language.
    pub fallback_label: String,
    /// How long the success label stays before reverting.
    pub feedback_ms: u32,
    /// Colour applied to the button while the success label shows.
    pub success_color: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            button_selector: ".code-block-copy".to_string(),
            block_selector: ".code-block".to_string(),
            code_selector: "pre code".to_string(),
            copied_key: "code-copied".to_string(),
            fallback_label: "Copied!".to_string(),
            feedback_ms: 2000,
            success_color: "var(--color-success)".to_string(),
        }
    }
}

/// Sticky-header and reveal-on-scroll effects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Fixed header element.
    pub header_selector: String,
    /// Class set on the header once scrolled past the threshold.
    pub scrolled_class: String,
    /// Vertical offset in CSS pixels past which the header counts as scrolled.
    pub threshold_px: f64,
    /// Elements revealed when they enter the viewport.
    pub reveal_selector: String,
    /// Class added on reveal.
    pub reveal_class: String,
    /// Visible fraction that triggers a reveal.
    pub reveal_threshold: f64,
    /// Observer root margin.
    pub reveal_root_margin: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_selector: ".header".to_string(),
            scrolled_class: "scrolled".to_string(),
            threshold_px: 50.0,
            reveal_selector: ".card, .feature-card, .step".to_string(),
            reveal_class: "fade-in".to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl ScrollConfig {
    /// Whether the header should carry the scrolled class at `offset`.
    #[must_use]
    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset > self.threshold_px
    }
}

impl SiteConfig {
    /// Parse a JSON override; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Check the fields the binder and collaborators rely on.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("key_attribute", &self.key_attribute),
            ("toggle_attribute", &self.toggle_attribute),
            ("active_class", &self.active_class),
            ("copy.button_selector", &self.copy.button_selector),
            ("copy.block_selector", &self.copy.block_selector),
            ("copy.code_selector", &self.copy.code_selector),
            ("scroll.header_selector", &self.scroll.header_selector),
            ("scroll.reveal_selector", &self.scroll.reveal_selector),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::EmptyField { field: *field });
        }
        if self.copy.feedback_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "copy.feedback_ms",
                value: "0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.scroll.reveal_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "scroll.reveal_threshold",
                value: self.scroll.reveal_threshold.to_string(),
            });
        }
        if !self.scroll.threshold_px.is_finite() || self.scroll.threshold_px < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "scroll.threshold_px",
                value: self.scroll.threshold_px.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_site() {
        let config = SiteConfig::default();
        assert_eq!(config.storage_key, "lang");
        assert_eq!(config.default_language, Locale::Ja);
        assert_eq!(config.key_attribute, "data-i18n");
        assert_eq!(config.copy.feedback_ms, 2000);
        assert_eq!(config.scroll.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_override_keeps_defaults() -> Result<(), serde_json::Error> {
        let config = SiteConfig::from_json(
            r#"{ "default_language": "en", "copy": { "feedback_ms": 1500 } }"#,
        )?;
        assert_eq!(config.default_language, Locale::En);
        assert_eq!(config.copy.feedback_ms, 1500);
        assert_eq!(config.copy.fallback_label, "Copied!");
        assert_eq!(config.storage_key, "lang");
        Ok(())
    }

    #[test]
    fn unknown_language_in_override_is_rejected() {
        assert!(SiteConfig::from_json(r#"{ "default_language": "fr" }"#).is_err());
    }

    #[test]
    fn validate_flags_empty_and_out_of_range_fields() {
        let mut config = SiteConfig::default();
        config.key_attribute = " ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyField { field: "key_attribute" })
        );

        let mut config = SiteConfig::default();
        config.copy.feedback_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "copy.feedback_ms", .. })
        ));

        let mut config = SiteConfig::default();
        config.scroll.reveal_threshold = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "scroll.reveal_threshold", .. })
        ));
    }

    #[test]
    fn header_scroll_threshold_is_exclusive() {
        let scroll = ScrollConfig::default();
        assert!(!scroll.is_scrolled(0.0));
        assert!(!scroll.is_scrolled(50.0));
        assert!(scroll.is_scrolled(50.5));
    }
}
