//! Unified path management for Ad Fontes configuration files.
//!
//! All persistent data lives as TOML files under the platform config
//! directory, one file per concern:
//!
//! ```text
//! ~/.config/adfontes/          # Config directory (XDG on Linux/macOS)
//! ├── prompts.toml             # Prompt templates (insertion order)
//! ├── sites.toml               # Per-domain site configs
//! └── state.toml               # Last-active prompt id + scratchpad fields
//! ```

use std::path::{Path, PathBuf};

use adfontes_core::{AdFontesError, Result};

const APP_DIR: &str = "adfontes";

/// Resolves paths for the application's config files.
///
/// A custom base directory can be supplied for tests; otherwise the platform
/// config directory is used.
pub struct AdFontesPaths {
    base_dir: Option<PathBuf>,
}

impl AdFontesPaths {
    /// Creates a path resolver. `base_dir` overrides the platform default
    /// (used by tests with a temp directory).
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(|p| p.to_path_buf()),
        }
    }

    /// Returns the application config directory, creating nothing.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| AdFontesError::config("Cannot find config directory"))
    }

    /// Path to the prompt store.
    pub fn prompts_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("prompts.toml"))
    }

    /// Path to the site config store.
    pub fn sites_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("sites.toml"))
    }

    /// Path to the app state store.
    pub fn state_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("state.toml"))
    }
}

impl Default for AdFontesPaths {
    fn default() -> Self {
        Self::new(None)
    }
}
