//! Prompt template domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default title assigned to a freshly created prompt.
pub const DEFAULT_PROMPT_TITLE: &str = "New Prompt";

/// A user-authored reusable text template.
///
/// When a site config is enabled for the acting domain, the bound prompt's
/// content is prepended to the generated output. Prompts live in a single
/// flat sequence; insertion order is preserved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Opaque unique identifier (UUID v4 string).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Template body prepended to generated output.
    pub content: String,
}

impl Prompt {
    /// Creates a new prompt with a fresh id and the default title.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_PROMPT_TITLE.to_string(),
            content: String::new(),
        }
    }

    /// Creates a prompt with the given title and content.
    pub fn with_content(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prompt_has_unique_id() {
        let a = Prompt::new();
        let b = Prompt::new();
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, DEFAULT_PROMPT_TITLE);
        assert!(a.content.is_empty());
    }

    #[test]
    fn test_with_content() {
        let p = Prompt::with_content("Translate", "Translate the following word:");
        assert_eq!(p.title, "Translate");
        assert_eq!(p.content, "Translate the following word:");
    }
}
