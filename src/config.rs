//! Configuration loader for moditext.
//!
//! `defaults/moditext.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync. The binary layers the file named by
//! `MODITEXT_CONFIG` on top of those defaults via [`Loader`] before
//! deserializing into [`ModitextConfig`].

use crate::document::LineSeparator;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/moditext.default.toml");

/// Environment variable naming an optional user configuration file.
pub const CONFIG_ENV: &str = "MODITEXT_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModitextConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub line_separator: LineSeparatorSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineSeparatorSetting {
    Platform,
    Lf,
    Crlf,
}

impl LineSeparatorSetting {
    pub fn resolve(self) -> LineSeparator {
        match self {
            LineSeparatorSetting::Platform => LineSeparator::platform(),
            LineSeparatorSetting::Lf => LineSeparator::Lf,
            LineSeparatorSetting::Crlf => LineSeparator::CrLf,
        }
    }
}

impl ModitextConfig {
    pub fn line_separator(&self) -> LineSeparator {
        self.output.line_separator.resolve()
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ModitextConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ModitextConfig, ConfigError> {
    Loader::new().build()
}

/// Defaults plus the file named by [`CONFIG_ENV`], when that variable is set.
pub fn load_from_env() -> Result<ModitextConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Loader::new().with_file(path).build(),
        None => load_defaults(),
    }
}
