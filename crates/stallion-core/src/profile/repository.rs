//! Profile repository trait.

use async_trait::async_trait;

use super::model::UserProfile;
use crate::error::Result;

/// Repository trait for user profile persistence.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Loads the stored profile. Returns the default profile if none
    /// has been saved yet.
    async fn load(&self) -> Result<UserProfile>;

    /// Saves the profile, replacing any previous one.
    async fn save(&self, profile: &UserProfile) -> Result<()>;
}
