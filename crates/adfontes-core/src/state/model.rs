//! Application-level persistent state.

use serde::{Deserialize, Serialize};

/// State that persists across invocations: the process-wide last-active
/// prompt id and the last-entered free-text field values (the scratchpad
/// that the UI auto-saves on idle).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Last prompt the user picked for any site. Read as the fallback for
    /// domains without an explicit site config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_prompt_id: Option<String>,
    /// Last-entered lookup word.
    #[serde(default)]
    pub word: String,
    /// Last-entered user context.
    #[serde(default)]
    pub context: String,
    /// Last-entered other message.
    #[serde(default)]
    pub other: String,
}
