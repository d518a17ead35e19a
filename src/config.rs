//! Indexer configuration.
//!
//! All settings are optional. Defaults reproduce the plain layout:
//! `library/` scanned into `library.json`, both next to `library.toml`.
//!
//! ## Config File Location
//!
//! ```text
//! project/
//! ├── library.toml             # Optional config
//! ├── library.json             # Generated manifest
//! └── library/
//!     └── 2023/
//!         └── Arc1/
//!             └── ArtistX/
//!                 └── a.png
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! library = "library"        # Library directory, relative to the project root
//! output = "library.json"    # Manifest path, relative to the project root
//! layout = "artist"          # "artist" (Artist/ holds images)
//!                            # or "collection" (Artist/Collection/ holds images)
//! untitled = "Untitled"      # Default title in the artist layout
//! extensions = ["png", "jpg", "jpeg", "gif", "svg"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::DEFAULT_IMAGE_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "library.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Which directory level holds the images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `Year/Arc/Artist/<images>`; one collection per artist per arc.
    #[default]
    Artist,
    /// `Year/Arc/Artist/Collection/<images>`; collection folders name the title.
    Collection,
}

/// Indexer configuration loaded from `library.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexerConfig {
    /// Library directory, relative to the project root.
    pub library: String,
    /// Manifest path, relative to the project root.
    pub output: String,
    /// Hierarchy depth.
    pub layout: Layout,
    /// Title given to new collections in the artist layout.
    pub untitled: String,
    /// Image file extensions, matched case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            library: "library".to_string(),
            output: "library.json".to_string(),
            layout: Layout::default(),
            untitled: "Untitled".to_string(),
            extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl IndexerConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.library.trim().is_empty() {
            return Err(ConfigError::Validation("library must not be empty".into()));
        }
        if !is_servable_relative(&self.library) {
            return Err(ConfigError::Validation(format!(
                "library {:?} must be a relative path inside the project root",
                self.library
            )));
        }
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.contains('.'))
        {
            return Err(ConfigError::Validation(format!(
                "extension {bad:?} must be a bare extension like \"png\""
            )));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the file values, then validate.
    pub fn apply_overrides(
        mut self,
        library: Option<String>,
        output: Option<String>,
        layout: Option<Layout>,
    ) -> Result<Self, ConfigError> {
        if let Some(library) = library {
            self.library = library;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(layout) = layout {
            self.layout = layout;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Whether `path` stays under the project root, so image paths built from it
/// can be served as-is: no leading separator, no drive prefix, no `..`.
fn is_servable_relative(path: &str) -> bool {
    let normalized = path.replace('\\', "/");
    !normalized.starts_with('/')
        && !Path::new(path).is_absolute()
        && !normalized.split('/').next().is_some_and(|first| first.ends_with(':'))
        && normalized.split('/').all(|seg| seg != "..")
}

/// Load `library.toml` from the project root.
///
/// Returns defaults if the file doesn't exist.
/// Returns `Err` if the file exists but is invalid TOML or fails validation.
pub fn load_config(root: &Path) -> Result<IndexerConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(IndexerConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: IndexerConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented `library.toml` with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r#"# Library indexer configuration. All options are optional.

# Library directory, relative to this file.
library = "library"

# Manifest written on every run, relative to this file.
output = "library.json"

# Which level holds the images:
#   "artist"     - library/YYYY/ArcN/Artist/<images>
#   "collection" - library/YYYY/ArcN/Artist/Collection/<images>
layout = "artist"

# Title for new collections in the "artist" layout. Edit titles in the
# manifest afterwards; they are kept on the next run.
untitled = "Untitled"

# Image file extensions (case-insensitive).
extensions = ["png", "jpg", "jpeg", "gif", "svg"]
"#
}
