//! Shared configuration loader for the richtext toolchain.
//!
//! `defaults/richtext.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`RichtextConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use richtext_babel::formats::html::HtmlOptions;
use richtext_babel::formats::text::TextOptions;
use richtext_babel::formats::treeviz::TreevizOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/richtext.default.toml");

/// Top-level configuration consumed by richtext applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RichtextConfig {
    pub render: RenderConfig,
    pub inspect: InspectConfig,
}

/// Output-format knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub html: HtmlRenderConfig,
    pub text: TextRenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlRenderConfig {
    pub escape_text: bool,
    pub safe_links: bool,
    /// `0` disables the nesting limit.
    pub max_depth: usize,
}

impl From<&HtmlRenderConfig> for HtmlOptions {
    fn from(config: &HtmlRenderConfig) -> Self {
        HtmlOptions {
            escape_text: config.escape_text,
            safe_links: config.safe_links,
            max_depth: (config.max_depth > 0).then_some(config.max_depth),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextRenderConfig {
    /// `0` keeps the full text.
    pub max_chars: usize,
}

impl From<&TextRenderConfig> for TextOptions {
    fn from(config: &TextRenderConfig) -> Self {
        TextOptions {
            max_chars: (config.max_chars > 0).then_some(config.max_chars),
        }
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub treeviz: TreevizConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_formats: bool,
}

impl From<&TreevizConfig> for TreevizOptions {
    fn from(config: &TreevizConfig) -> Self {
        TreevizOptions {
            show_formats: config.show_formats,
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
    pub fn build(self) -> Result<RichtextConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RichtextConfig, ConfigError> {
    Loader::new().build()
}
