//! Site-scoped configuration domain models.

use serde::{Deserialize, Serialize};

/// Per-domain override controlling whether prompt-prefixing is active and
/// which prompt to use.
///
/// Keyed by lowercase hostname in the site config store. `prompt_id` may
/// reference a prompt that has since been deleted; such a dangling reference
/// is tolerated in storage and treated as absent by the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Whether prompt-prefixing is active for this domain.
    pub enabled: bool,
    /// Id of the bound prompt, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_id: Option<String>,
}

impl SiteConfig {
    /// Creates a config with prompt-prefixing active and the given prompt.
    pub fn enabled_with(prompt_id: impl Into<String>) -> Self {
        Self {
            enabled: true,
            prompt_id: Some(prompt_id.into()),
        }
    }

    /// Creates a disabled config with no prompt bound.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            prompt_id: None,
        }
    }
}

/// Effective config for a domain after resolution (derived, never persisted).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSiteConfig {
    pub enabled: bool,
    pub prompt_id: Option<String>,
}

impl From<SiteConfig> for ResolvedSiteConfig {
    fn from(config: SiteConfig) -> Self {
        Self {
            enabled: config.enabled,
            prompt_id: config.prompt_id,
        }
    }
}
