//! Site config repository trait.

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::model::SiteConfig;
use crate::error::Result;

/// Repository trait for per-domain site config persistence.
#[async_trait]
pub trait SiteConfigRepository: Send + Sync {
    /// Loads all site configs keyed by lowercase hostname.
    async fn load_all(&self) -> Result<BTreeMap<String, SiteConfig>>;

    /// Inserts or replaces the config for a domain.
    async fn set(&self, domain: &str, config: &SiteConfig) -> Result<()>;

    /// Removes the config for a domain ("forget this site").
    async fn delete(&self, domain: &str) -> Result<()>;

    /// Removes every stored site config.
    async fn clear(&self) -> Result<()>;
}
