//! Unified path management for stallion configuration files.
//!
//! All configuration and secrets live under a single per-user config
//! directory so every storage mechanism resolves files the same way.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/stallion/          # Config directory
//! ├── profile.toml             # User profile
//! └── secret.toml              # API keys
//! ```

use std::path::PathBuf;

use stallion_core::{Result, StallionError};

/// Unified path management for stallion.
pub struct StallionPaths;

impl StallionPaths {
    /// Returns the stallion configuration directory
    /// (e.g. `~/.config/stallion/`).
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the platform config directory
    /// cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|base| base.join("stallion"))
            .ok_or_else(|| StallionError::config("Cannot find config directory"))
    }

    /// Returns the path to the persisted user profile.
    pub fn profile_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("profile.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to
    /// prevent unauthorized access.
    pub fn secret_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("secret.toml"))
    }
}
