//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`ROSEGEN_TEMPLATES_DIR`)
//! 3. Config file (`--config FILE`, or the default location if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Environment override for the templates directory.
pub const TEMPLATES_DIR_ENV: &str = "ROSEGEN_TEMPLATES_DIR";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for scaffold runs.
    pub defaults: Defaults,
    /// Template resolution settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Project root used when the scaffold commands get no PATH argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,
    /// Overwrite pre-existing output files without requiring `--force`.
    pub overwrite: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<Key>.cs.txt` files; when unset the built-in templates
    /// are used.  `--templates-dir` wins over this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Allow coloured output (still subject to `--no-color` and TTY checks).
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `--config` path must exist and parse.  Without one, the
    /// default location is read if present, otherwise built-in defaults
    /// apply.  Environment overrides are applied last either way.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::read_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::read_file(&default_path).with_context(|| {
                        format!("failed to load config from {}", default_path.display())
                    })?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.rosegen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "rosegen", "rosegen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".rosegen.toml"))
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.templates.dir = Some(PathBuf::from(dir));
            }
        }
    }
}
