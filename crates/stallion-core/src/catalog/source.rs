//! Catalog source trait.

use async_trait::async_trait;

use super::model::{Announcement, Course};
use crate::error::Result;

/// Read-only source of catalog data.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns all course offerings, in catalog order.
    async fn courses(&self) -> Result<Vec<Course>>;

    /// Returns all announcements, newest first.
    async fn announcements(&self) -> Result<Vec<Announcement>>;
}
