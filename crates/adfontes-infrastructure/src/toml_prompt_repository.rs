//! TOML-backed PromptRepository implementation.
//!
//! All prompts live in a single `prompts.toml` as an array of tables,
//! preserving insertion order:
//!
//! ```text
//! [[prompt]]
//! id = "..."
//! title = "Translate"
//! content = "Translate the following word:"
//! ```

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use adfontes_core::prompt::{Prompt, PromptRepository};
use adfontes_core::Result;

use crate::paths::AdFontesPaths;
use crate::storage::AtomicTomlFile;

/// On-disk shape of `prompts.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PromptsFile {
    #[serde(rename = "prompt", default)]
    prompts: Vec<Prompt>,
}

/// TOML file prompt repository.
pub struct TomlPromptRepository {
    file: AtomicTomlFile<PromptsFile>,
}

impl TomlPromptRepository {
    /// Creates a repository at the default config location.
    pub fn open_default() -> Result<Self> {
        Self::new(None)
    }

    /// Creates a repository with a custom base directory (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let paths = AdFontesPaths::new(base_dir);
        Ok(Self {
            file: AtomicTomlFile::new(paths.prompts_file()?),
        })
    }

    fn load_file(&self) -> Result<PromptsFile> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

#[async_trait]
impl PromptRepository for TomlPromptRepository {
    async fn get_all(&self) -> Result<Vec<Prompt>> {
        Ok(self.load_file()?.prompts)
    }

    async fn find_by_id(&self, prompt_id: &str) -> Result<Option<Prompt>> {
        Ok(self
            .load_file()?
            .prompts
            .into_iter()
            .find(|p| p.id == prompt_id))
    }

    async fn save(&self, prompt: &Prompt) -> Result<()> {
        let prompt = prompt.clone();
        self.file.update(PromptsFile::default(), move |store| {
            match store.prompts.iter_mut().find(|p| p.id == prompt.id) {
                Some(existing) => *existing = prompt,
                None => store.prompts.push(prompt),
            }
            Ok(())
        })
    }

    async fn delete(&self, prompt_id: &str) -> Result<()> {
        // Site configs referencing the prompt are left dangling on purpose;
        // consumers resolve them defensively on read.
        self.file.update(PromptsFile::default(), |store| {
            store.prompts.retain(|p| p.id != prompt_id);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_get_all_preserves_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlPromptRepository::new(Some(temp_dir.path())).unwrap();

        let first = Prompt::with_content("First", "one");
        let second = Prompt::with_content("Second", "two");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "First");
        assert_eq!(all[1].title, "Second");
    }

    #[tokio::test]
    async fn test_save_existing_updates_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlPromptRepository::new(Some(temp_dir.path())).unwrap();

        let mut prompt = Prompt::with_content("Title", "body");
        repo.save(&prompt).await.unwrap();

        prompt.content = "edited body".to_string();
        repo.save(&prompt).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].content, "edited body");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlPromptRepository::new(Some(temp_dir.path())).unwrap();

        let prompt = Prompt::with_content("Find me", "content");
        repo.save(&prompt).await.unwrap();

        let found = repo.find_by_id(&prompt.id).await.unwrap();
        assert_eq!(found.unwrap().title, "Find me");

        let missing = repo.find_by_id("no-such-id").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlPromptRepository::new(Some(temp_dir.path())).unwrap();

        let keep = Prompt::with_content("Keep", "");
        let drop = Prompt::with_content("Drop", "");
        repo.save(&keep).await.unwrap();
        repo.save(&drop).await.unwrap();

        repo.delete(&drop.id).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep.id);
    }

    #[tokio::test]
    async fn test_get_all_on_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlPromptRepository::new(Some(temp_dir.path())).unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
