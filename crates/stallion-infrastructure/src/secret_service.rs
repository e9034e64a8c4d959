//! Secret configuration loading.
//!
//! API keys live in `secret.toml` under the stallion config directory,
//! never in the main profile file.
//!
//! # Security Note
//!
//! Error messages from this module must not contain secret values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::fs;

use stallion_core::error::Result;
use stallion_core::StallionError;

use crate::paths::StallionPaths;

/// Root of the secret configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    /// Gemini API credentials, when configured.
    pub gemini: Option<GeminiSecret>,
}

/// Gemini API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSecret {
    /// API key for the generative language API.
    pub api_key: String,
    /// Optional model override.
    #[serde(default)]
    pub model: Option<String>,
}

/// Loads secret configuration from the config directory.
pub struct SecretService {
    base_dir: PathBuf,
}

impl SecretService {
    const SECRET_FILENAME: &'static str = "secret.toml";

    /// Creates a service rooted at the default config directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_dir: StallionPaths::config_dir()?,
        })
    }

    /// Creates a service rooted at a custom directory (for testing).
    pub fn with_base_path(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn secret_path(&self) -> PathBuf {
        self.base_dir.join(Self::SECRET_FILENAME)
    }

    /// Loads the secret configuration.
    ///
    /// A missing file yields the empty default so environment-only
    /// setups still work.
    pub async fn load_secrets(&self) -> Result<SecretConfig> {
        let path = self.secret_path();

        if !path.exists() {
            return Ok(SecretConfig::default());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| StallionError::io(format!("Failed to read secret file: {}", e)))?;

        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Checks if the secret file exists.
    pub async fn secret_file_exists(&self) -> bool {
        self.secret_path().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        let service = SecretService::with_base_path(temp_dir.path().to_path_buf());

        assert!(!service.secret_file_exists().await);
        let config = service.load_secrets().await.unwrap();
        assert!(config.gemini.is_none());
    }

    #[tokio::test]
    async fn test_load_gemini_credentials() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.toml");
        std::fs::write(
            &path,
            "[gemini]\napi_key = \"test-key\"\nmodel = \"gemini-3-flash-preview\"\n",
        )
        .unwrap();

        let service = SecretService::with_base_path(temp_dir.path().to_path_buf());
        let config = service.load_secrets().await.unwrap();

        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "test-key");
        assert_eq!(gemini.model.as_deref(), Some("gemini-3-flash-preview"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("secret.toml"), "not toml [").unwrap();

        let service = SecretService::with_base_path(temp_dir.path().to_path_buf());
        let err = service.load_secrets().await.unwrap_err();
        assert!(matches!(err, StallionError::Serialization { .. }));
    }
}
