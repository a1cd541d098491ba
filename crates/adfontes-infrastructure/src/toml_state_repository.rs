//! TOML-backed StateRepository implementation.
//!
//! Loads `state.toml` once at construction and caches it in memory; every
//! mutation updates the cache first and then persists the whole state
//! immediately (whole-object replace, last write wins).

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use adfontes_core::state::{AppState, StateRepository};
use adfontes_core::Result;

use crate::paths::AdFontesPaths;
use crate::storage::AtomicTomlFile;

/// File-backed app state repository with an in-memory cache.
#[derive(Clone)]
pub struct TomlStateRepository {
    state: Arc<Mutex<AppState>>,
    file: Arc<AtomicTomlFile<AppState>>,
}

impl TomlStateRepository {
    /// Creates a repository at the default config location.
    pub fn open_default() -> Result<Self> {
        Self::new(None)
    }

    /// Creates a repository with a custom base directory (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let paths = AdFontesPaths::new(base_dir);
        let file = AtomicTomlFile::new(paths.state_file()?);
        let initial = file.load()?.unwrap_or_default();
        Ok(Self {
            state: Arc::new(Mutex::new(initial)),
            file: Arc::new(file),
        })
    }

    async fn persist(&self, state: AppState) -> Result<()> {
        {
            let mut cached = self.state.lock().await;
            *cached = state.clone();
        }
        self.file.save(&state)
    }
}

#[async_trait]
impl StateRepository for TomlStateRepository {
    async fn get_state(&self) -> Result<AppState> {
        Ok(self.state.lock().await.clone())
    }

    async fn save_state(&self, state: AppState) -> Result<()> {
        self.persist(state).await
    }

    async fn get_last_active_prompt(&self) -> Option<String> {
        self.state.lock().await.last_active_prompt_id.clone()
    }

    async fn set_last_active_prompt(&self, prompt_id: String) -> Result<()> {
        let mut state = self.state.lock().await.clone();
        state.last_active_prompt_id = Some(prompt_id);
        self.persist(state).await
    }

    async fn save_scratchpad(&self, word: String, context: String, other: String) -> Result<()> {
        let mut state = self.state.lock().await.clone();
        state.word = word;
        state.context = context;
        state.other = other;
        self.persist(state).await
    }
}
