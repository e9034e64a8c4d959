//! File-based profile repository.
//!
//! Stores the user profile as a TOML file in the stallion config
//! directory.
//!
//! File location: `{config_dir}/profile.toml`

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use stallion_core::error::Result;
use stallion_core::profile::{ProfileRepository, UserProfile};
use stallion_core::StallionError;

use crate::paths::StallionPaths;

/// TOML-file-backed profile repository.
pub struct TomlProfileRepository {
    /// Directory holding the profile file.
    base_dir: PathBuf,
}

impl TomlProfileRepository {
    const PROFILE_FILENAME: &'static str = "profile.toml";

    /// Creates a repository rooted at the default config directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_dir: StallionPaths::config_dir()?,
        })
    }

    /// Creates a repository rooted at a custom directory (for testing).
    pub fn with_base_path(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn profile_path(&self) -> PathBuf {
        self.base_dir.join(Self::PROFILE_FILENAME)
    }
}

#[async_trait]
impl ProfileRepository for TomlProfileRepository {
    async fn load(&self) -> Result<UserProfile> {
        let path = self.profile_path();

        if !path.exists() {
            debug!(path = %path.display(), "no stored profile, using defaults");
            return Ok(UserProfile::default());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| StallionError::io(format!("Failed to read profile: {}", e)))?;

        let profile = toml::from_str(&content)?;
        Ok(profile)
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        let path = self.profile_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StallionError::io(format!("Failed to create directory: {}", e)))?;
        }

        let serialized = toml::to_string_pretty(profile)?;

        fs::write(&path, serialized)
            .await
            .map_err(|e| StallionError::io(format!("Failed to write profile: {}", e)))?;

        Ok(())
    }
}
