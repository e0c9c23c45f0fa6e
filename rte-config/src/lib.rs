//! Shared configuration loader for the rte toolchain.
//!
//! `defaults/rte.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RteConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use rte_babel::formats::markdown::MarkdownRules;
use rte_babel::HighlightRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rte.default.toml");

/// Top-level configuration consumed by rte applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RteConfig {
    pub highlight: HighlightConfig,
    pub convert: ConvertConfig,
}

/// Mirrors the knobs exposed by the highlight injector, plus the class used
/// for single-color highlighting.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub class: String,
    pub utility_classes: String,
    pub fallback_classes: String,
    pub default_text_color: String,
}

impl From<HighlightConfig> for HighlightRules {
    fn from(config: HighlightConfig) -> Self {
        HighlightRules {
            utility_classes: config.utility_classes,
            fallback_classes: config.fallback_classes,
            default_text_color: config.default_text_color,
        }
    }
}

impl From<&HighlightConfig> for HighlightRules {
    fn from(config: &HighlightConfig) -> Self {
        HighlightRules {
            utility_classes: config.utility_classes.clone(),
            fallback_classes: config.fallback_classes.clone(),
            default_text_color: config.default_text_color.clone(),
        }
    }
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub markdown: MarkdownStyleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownStyleConfig {
    pub unordered_marker: char,
}

impl From<MarkdownStyleConfig> for MarkdownRules {
    fn from(config: MarkdownStyleConfig) -> Self {
        MarkdownRules {
            unordered_marker: config.unordered_marker,
        }
    }
}

impl From<&MarkdownStyleConfig> for MarkdownRules {
    fn from(config: &MarkdownStyleConfig) -> Self {
        MarkdownRules {
            unordered_marker: config.unordered_marker,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RteConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RteConfig, ConfigError> {
    Loader::new().build()
}
