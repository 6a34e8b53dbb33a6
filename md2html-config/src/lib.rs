//! Shared configuration loader for md2html.
//!
//! `defaults/md2html.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`Md2HtmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use md2html_core::HtmlOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/md2html.default.toml");

/// Top-level configuration consumed by md2html applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Md2HtmlConfig {
    pub convert: ConvertConfig,
}

/// Conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Default output format name.
    pub to: String,
    pub html: HtmlConfig,
}

/// Options for the `html` output format.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub lang: String,
    pub fallback_title: String,
}

impl From<HtmlConfig> for HtmlOptions {
    fn from(config: HtmlConfig) -> Self {
        HtmlOptions::new(config.lang, config.fallback_title)
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
    pub fn build(self) -> Result<Md2HtmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Md2HtmlConfig, ConfigError> {
    Loader::new().build()
}
