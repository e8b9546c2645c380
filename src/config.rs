//! Configuration file support
//!
//! Loads settings from ~/.lexlight.toml (or %USERPROFILE%\.lexlight.toml
//! on Windows). Every key is optional.
//!
//! Example:
//! ```toml
//! # lexlight configuration
//! data-dir = "/usr/share/lexlight"
//! default-language = "python"
//! single-quote = "closed"
//! enabled = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{HighlightError, Result};
use crate::syntax::{CompileOptions, DirSource, LanguageId, SingleQuoteMode, SyntaxManager};

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root directory holding manifest.json, highlight.json and the
    /// per-language word lists. Relative paths in a config file are
    /// taken relative to that file.
    pub data_dir: PathBuf,
    /// Language used when nothing else matches
    pub default_language: String,
    /// How single-quoted strings are matched
    pub single_quote: SingleQuoteMode,
    /// Whether highlighting is enabled
    pub enabled: bool,
}

/// Keys present in a config file; absent keys leave defaults alone
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct Settings {
    data_dir: Option<PathBuf>,
    default_language: Option<String>,
    single_quote: Option<SingleQuoteMode>,
    enabled: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            default_language: LanguageId::DEFAULT.to_string(),
            single_quote: SingleQuoteMode::default(),
            enabled: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".lexlight.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".lexlight.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file gives the defaults; an unreadable or invalid one is
    /// reported and also gives the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut settings = Self::parse(&contents).map_err(|source| HighlightError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(data_dir), Some(base)) = (&settings.data_dir, path.parent()) {
            if data_dir.is_relative() {
                settings.data_dir = Some(base.join(data_dir));
            }
        }

        let mut config = Config::default();
        config.apply(settings);
        Ok(config)
    }

    /// Parse config file contents into the settings they name
    fn parse(contents: &str) -> std::result::Result<Settings, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Apply settings from a parsed config
    fn apply(&mut self, settings: Settings) {
        if let Some(data_dir) = settings.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(language) = settings.default_language {
            self.default_language = language;
        }
        if let Some(mode) = settings.single_quote {
            self.single_quote = mode;
        }
        if let Some(enabled) = settings.enabled {
            self.enabled = enabled;
        }
    }

    /// The fallback language
    pub fn default_language(&self) -> LanguageId {
        LanguageId::new(self.default_language.clone())
    }

    /// Rule compilation options
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            single_quote: self.single_quote,
        }
    }

    /// The resource source this configuration names
    pub fn source(&self) -> DirSource {
        DirSource::new(&self.data_dir)
    }

    /// Build a syntax manager from this configuration
    pub fn manager(&self) -> SyntaxManager {
        let mut manager = SyntaxManager::new(
            Arc::new(self.source()),
            self.default_language(),
            self.compile_options(),
        );
        manager.enabled = self.enabled;
        manager
    }
}
