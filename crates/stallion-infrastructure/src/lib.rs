//! File-backed infrastructure for the Stallion application.
//!
//! Implements the persistence and data-source traits declared in
//! `stallion-core`: the TOML profile repository, the secret loader, and
//! the bundled catalog.

pub mod catalog;
pub mod paths;
pub mod profile_repository;
pub mod secret_service;

pub use catalog::BundledCatalog;
pub use paths::StallionPaths;
pub use profile_repository::TomlProfileRepository;
pub use secret_service::{GeminiSecret, SecretConfig, SecretService};
