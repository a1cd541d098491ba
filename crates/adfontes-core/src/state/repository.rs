//! App state repository trait.

use async_trait::async_trait;

use super::model::AppState;
use crate::error::Result;

/// Repository trait for application state persistence.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Returns the current state (cached, loaded once at startup).
    async fn get_state(&self) -> Result<AppState>;

    /// Replaces the whole state and persists it immediately.
    async fn save_state(&self, state: AppState) -> Result<()>;

    /// Gets the last-active prompt id.
    async fn get_last_active_prompt(&self) -> Option<String>;

    /// Sets the last-active prompt id and persists it immediately.
    async fn set_last_active_prompt(&self, prompt_id: String) -> Result<()>;

    /// Persists the scratchpad field values (word, context, other).
    async fn save_scratchpad(&self, word: String, context: String, other: String) -> Result<()>;
}
