//! Prompt repository trait.

use async_trait::async_trait;

use super::model::Prompt;
use crate::error::Result;

/// Repository trait for prompt template persistence.
///
/// Implementations must preserve insertion order in `get_all`.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Returns all prompts in insertion order.
    async fn get_all(&self) -> Result<Vec<Prompt>>;

    /// Finds a prompt by its id. Returns `None` when absent.
    async fn find_by_id(&self, prompt_id: &str) -> Result<Option<Prompt>>;

    /// Inserts or replaces a prompt. New prompts are appended at the end.
    async fn save(&self, prompt: &Prompt) -> Result<()>;

    /// Deletes a prompt by id.
    ///
    /// Site configs referencing the deleted prompt are intentionally left
    /// untouched; consumers treat a dangling reference as absent.
    async fn delete(&self, prompt_id: &str) -> Result<()>;
}
