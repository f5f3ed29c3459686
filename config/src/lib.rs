//! Settings for acejump, loaded from `config.toml`.
//!
//! Every option is optional. A missing key falls back to [`Config::default`], which
//! mirrors the repository's `config.toml`, so a session can start with no configuration
//! on disk.
//!
//! # Loading
//!
//! [`Config::load_with_overrides`] picks the path: CLI override > discovered > embedded
//! defaults. Syntax errors are reported with [`ariadne`] against the offending span.

mod error;

pub use error::format_toml_error;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Default label alphabet: lowercase then uppercase Latin letters.
pub const DEFAULT_LABELS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default highlight style for the label region group.
pub const DEFAULT_LABELS_SCOPE: &str = "invalid";

/// Neutral grammar installed on every pane while labels are shown.
pub const DEFAULT_OVERLAY_SYNTAX: &str = "Packages/Text/Plain text.tmLanguage";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Label glyphs in assignment order, one `char` each.
    pub labels: String,

    /// Highlight style name used when marking labeled positions.
    pub labels_scope: String,

    pub search_case_sensitivity: bool,

    /// In char mode, force landing after a matched character that ends its line.
    pub jump_behind_last_characters: bool,

    /// Pane settings snapshotted, disabled while labels are shown, then restored.
    pub view_settings: Vec<String>,

    pub overlay_syntax: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.to_string(),
            labels_scope: DEFAULT_LABELS_SCOPE.to_string(),
            search_case_sensitivity: true,
            jump_behind_last_characters: false,
            view_settings: Vec::new(),
            overlay_syntax: DEFAULT_OVERLAY_SYNTAX.to_string(),
        }
    }
}

impl Config {
    /// Read a config file. Keys it leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read acejump config {}", path.display()))?;
        Self::parse(&source)
            .with_context(|| format!("Invalid acejump config {}", path.display()))
    }

    /// Deserialize a config from TOML source.
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| anyhow!(format_toml_error(source, &err)))
    }

    /// Pick the first available source: `cli_override`, then `discovered_path`, then the
    /// embedded defaults. A path that is given but unreadable is an error, not a fallback.
    pub fn load_with_overrides(
        cli_override: Option<&Path>,
        discovered_path: Option<&Path>,
    ) -> Result<Self> {
        match cli_override.or(discovered_path) {
            Some(path) => Self::load(path),
            None => Self::parse(include_str!("../../config.toml"))
                .context("Embedded default config.toml is invalid"),
        }
    }
}
