//! TOML-backed SiteConfigRepository implementation.
//!
//! Site configs live in `sites.toml`, one table per domain:
//!
//! ```text
//! [sites."chat.openai.com"]
//! enabled = true
//! prompt_id = "..."
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use adfontes_core::site::{SiteConfig, SiteConfigRepository};
use adfontes_core::Result;

use crate::paths::AdFontesPaths;
use crate::storage::AtomicTomlFile;

/// On-disk shape of `sites.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SitesFile {
    #[serde(default)]
    sites: BTreeMap<String, SiteConfig>,
}

/// TOML file site config repository.
///
/// Domains are stored lowercased. `prompt_id` values referencing deleted
/// prompts are kept as-is; validation happens on read in the session layer.
pub struct TomlSiteConfigRepository {
    file: AtomicTomlFile<SitesFile>,
}

impl TomlSiteConfigRepository {
    /// Creates a repository at the default config location.
    pub fn open_default() -> Result<Self> {
        Self::new(None)
    }

    /// Creates a repository with a custom base directory (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let paths = AdFontesPaths::new(base_dir);
        Ok(Self {
            file: AtomicTomlFile::new(paths.sites_file()?),
        })
    }
}

#[async_trait]
impl SiteConfigRepository for TomlSiteConfigRepository {
    async fn load_all(&self) -> Result<BTreeMap<String, SiteConfig>> {
        Ok(self.file.load()?.unwrap_or_default().sites)
    }

    async fn set(&self, domain: &str, config: &SiteConfig) -> Result<()> {
        let domain = domain.to_lowercase();
        let config = config.clone();
        self.file.update(SitesFile::default(), move |store| {
            store.sites.insert(domain, config);
            Ok(())
        })
    }

    async fn delete(&self, domain: &str) -> Result<()> {
        let domain = domain.to_lowercase();
        self.file.update(SitesFile::default(), move |store| {
            store.sites.remove(&domain);
            Ok(())
        })
    }

    async fn clear(&self) -> Result<()> {
        // Dropping the whole file; a missing file loads as an empty table.
        self.file.remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_and_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSiteConfigRepository::new(Some(temp_dir.path())).unwrap();

        repo.set("claude.ai", &SiteConfig::enabled_with("p-1"))
            .await
            .unwrap();
        repo.set("example.com", &SiteConfig::disabled())
            .await
            .unwrap();

        let all = repo.load_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all["claude.ai"].enabled);
        assert_eq!(all["claude.ai"].prompt_id.as_deref(), Some("p-1"));
        assert!(!all["example.com"].enabled);
    }

    #[tokio::test]
    async fn test_domain_keys_are_lowercased() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSiteConfigRepository::new(Some(temp_dir.path())).unwrap();

        repo.set("Claude.AI", &SiteConfig::disabled()).await.unwrap();

        let all = repo.load_all().await.unwrap();
        assert!(all.contains_key("claude.ai"));
    }

    #[tokio::test]
    async fn test_delete_one_domain() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSiteConfigRepository::new(Some(temp_dir.path())).unwrap();

        repo.set("a.com", &SiteConfig::disabled()).await.unwrap();
        repo.set("b.com", &SiteConfig::disabled()).await.unwrap();
        repo.delete("a.com").await.unwrap();

        let all = repo.load_all().await.unwrap();
        assert!(!all.contains_key("a.com"));
        assert!(all.contains_key("b.com"));
    }

    #[tokio::test]
    async fn test_clear_all() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSiteConfigRepository::new(Some(temp_dir.path())).unwrap();

        repo.set("a.com", &SiteConfig::disabled()).await.unwrap();
        repo.set("b.com", &SiteConfig::enabled_with("p-2"))
            .await
            .unwrap();
        repo.clear().await.unwrap();

        assert!(repo.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_store_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSiteConfigRepository::new(Some(temp_dir.path())).unwrap();

        repo.set("a.com", &SiteConfig::disabled()).await.unwrap();
        assert!(temp_dir.path().join("sites.toml").exists());

        repo.clear().await.unwrap();
        assert!(!temp_dir.path().join("sites.toml").exists());

        // Clearing an already-missing store is fine.
        repo.clear().await.unwrap();
        assert!(repo.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dangling_prompt_id_survives_storage() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSiteConfigRepository::new(Some(temp_dir.path())).unwrap();

        // No prompt with this id exists; the store does not care.
        repo.set("site.com", &SiteConfig::enabled_with("deleted-prompt"))
            .await
            .unwrap();

        let all = repo.load_all().await.unwrap();
        assert_eq!(all["site.com"].prompt_id.as_deref(), Some("deleted-prompt"));
    }
}
