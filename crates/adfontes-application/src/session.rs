//! Lookup session context.
//!
//! Gathers everything the generate flow needs into one explicit context
//! object loaded once per invocation: the prompt list, the site config map,
//! the known-domain defaults, the acting domain, and the last-active prompt
//! id. The pure resolver and formatter take their inputs from here instead
//! of module-level state.

use std::collections::BTreeMap;

use adfontes_core::prompt::{Prompt, PromptRepository};
use adfontes_core::site::{self, ResolvedSiteConfig, SiteConfig, SiteConfigRepository};
use adfontes_core::state::StateRepository;
use adfontes_core::Result;

/// Snapshot of the stores plus the acting domain for one lookup.
#[derive(Debug, Clone)]
pub struct LookupSession {
    pub prompts: Vec<Prompt>,
    pub site_configs: BTreeMap<String, SiteConfig>,
    pub known_defaults: BTreeMap<String, bool>,
    pub current_domain: Option<String>,
    pub last_active_prompt_id: Option<String>,
}

impl LookupSession {
    /// Loads a session from the repositories.
    ///
    /// `domain` is the acting hostname (already normalized via
    /// [`normalize_domain`]); `None` means no site scoping applies.
    pub async fn load(
        prompt_repo: &dyn PromptRepository,
        site_repo: &dyn SiteConfigRepository,
        state_repo: &dyn StateRepository,
        domain: Option<String>,
    ) -> Result<Self> {
        let prompts = prompt_repo.get_all().await?;
        let site_configs = site_repo.load_all().await?;
        let last_active_prompt_id = state_repo.get_last_active_prompt().await;

        Ok(Self {
            prompts,
            site_configs,
            known_defaults: site::known_domain_defaults(),
            current_domain: domain,
            last_active_prompt_id,
        })
    }

    /// Builds a session directly from parts (tests, previews).
    pub fn from_parts(
        prompts: Vec<Prompt>,
        site_configs: BTreeMap<String, SiteConfig>,
        current_domain: Option<String>,
        last_active_prompt_id: Option<String>,
    ) -> Self {
        Self {
            prompts,
            site_configs,
            known_defaults: site::known_domain_defaults(),
            current_domain,
            last_active_prompt_id,
        }
    }

    /// Resolves the effective site config for the acting domain.
    ///
    /// Without a domain there is nothing to scope to: prefixing is disabled.
    pub fn resolved_config(&self) -> ResolvedSiteConfig {
        match &self.current_domain {
            Some(domain) => site::resolve(
                domain,
                &self.site_configs,
                &self.known_defaults,
                self.last_active_prompt_id.as_deref(),
            ),
            None => ResolvedSiteConfig {
                enabled: false,
                prompt_id: None,
            },
        }
    }

    /// Looks up a prompt by id, treating dangling references as absent.
    pub fn find_prompt(&self, prompt_id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == prompt_id)
    }

    /// Returns the prompt content to prepend, when prefixing is active.
    ///
    /// Requires the resolved config to be enabled AND its prompt id to
    /// reference a prompt that still exists. A dangling id resolves to no
    /// prefix (the stored config is never cleaned up eagerly).
    pub fn active_prompt_content(&self) -> Option<&str> {
        let resolved = self.resolved_config();
        if !resolved.enabled {
            return None;
        }
        resolved
            .prompt_id
            .and_then(|id| self.find_prompt(&id))
            .map(|p| p.content.as_str())
    }
}

/// Normalizes a user-supplied domain argument to a lowercase hostname.
///
/// Accepts either a bare hostname or a full URL (the hostname is extracted).
/// Stands in for the active-tab hostname read in the original UI.
pub fn normalize_domain(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains("://") {
        return url::Url::parse(trimmed)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_lowercase()));
    }

    Some(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(
        prompts: Vec<Prompt>,
        configs: Vec<(&str, SiteConfig)>,
        domain: Option<&str>,
        last_active: Option<&str>,
    ) -> LookupSession {
        let site_configs = configs
            .into_iter()
            .map(|(d, c)| (d.to_string(), c))
            .collect();
        LookupSession::from_parts(
            prompts,
            site_configs,
            domain.map(|d| d.to_string()),
            last_active.map(|id| id.to_string()),
        )
    }

    #[test]
    fn test_active_prompt_content_when_enabled() {
        let prompt = Prompt::with_content("T", "Explain simply:");
        let id = prompt.id.clone();
        let session = session_with(
            vec![prompt],
            vec![("claude.ai", SiteConfig::enabled_with(id))],
            Some("claude.ai"),
            None,
        );

        assert_eq!(session.active_prompt_content(), Some("Explain simply:"));
    }

    #[test]
    fn test_disabled_config_yields_no_prefix() {
        let prompt = Prompt::with_content("T", "Explain simply:");
        let id = prompt.id.clone();
        let session = session_with(
            vec![prompt],
            vec![(
                "example.com",
                SiteConfig {
                    enabled: false,
                    prompt_id: Some(id),
                },
            )],
            Some("example.com"),
            None,
        );

        assert!(session.active_prompt_content().is_none());
    }

    #[test]
    fn test_dangling_prompt_reference_treated_as_absent() {
        let session = session_with(
            vec![],
            vec![("site.com", SiteConfig::enabled_with("deleted-id"))],
            Some("site.com"),
            None,
        );

        assert!(session.active_prompt_content().is_none());
    }

    #[test]
    fn test_no_domain_means_disabled() {
        let prompt = Prompt::with_content("T", "content");
        let id = prompt.id.clone();
        let session = session_with(vec![prompt], vec![], None, Some(&id));

        let resolved = session.resolved_config();
        assert!(!resolved.enabled);
        assert!(session.active_prompt_content().is_none());
    }

    #[test]
    fn test_known_domain_inherits_last_active_prompt() {
        let prompt = Prompt::with_content("T", "Define for me:");
        let id = prompt.id.clone();
        let session = session_with(vec![prompt], vec![], Some("chatgpt.com"), Some(&id));

        assert_eq!(session.active_prompt_content(), Some("Define for me:"));
    }

    #[test]
    fn test_normalize_domain_bare_host() {
        assert_eq!(
            normalize_domain("Chat.OpenAI.com").as_deref(),
            Some("chat.openai.com")
        );
    }

    #[test]
    fn test_normalize_domain_full_url() {
        assert_eq!(
            normalize_domain("https://Claude.AI/chat/abc?x=1").as_deref(),
            Some("claude.ai")
        );
    }

    #[test]
    fn test_normalize_domain_empty_or_invalid() {
        assert!(normalize_domain("").is_none());
        assert!(normalize_domain("   ").is_none());
        assert!(normalize_domain("http://").is_none());
    }
}
