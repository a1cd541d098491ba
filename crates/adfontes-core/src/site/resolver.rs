//! Site-config resolution.
//!
//! Pure function over the stored per-domain overrides, a static table of
//! known-domain defaults, and the process-wide last-active prompt id. An
//! explicit user choice always wins; an unconfigured domain inherits the
//! globally last-used prompt but starts disabled unless listed in the
//! known-domain allowlist.

use std::collections::BTreeMap;

use super::model::{ResolvedSiteConfig, SiteConfig};

/// Domains where prompt-prefixing defaults to enabled when the user has not
/// configured the domain explicitly.
pub const KNOWN_ENABLED_DOMAINS: [&str; 6] = [
    "chat.openai.com",
    "chatgpt.com",
    "claude.ai",
    "gemini.google.com",
    "perplexity.ai",
    "copilot.microsoft.com",
];

/// Builds the default per-domain enablement table.
pub fn known_domain_defaults() -> BTreeMap<String, bool> {
    KNOWN_ENABLED_DOMAINS
        .iter()
        .map(|&domain| (domain.to_string(), true))
        .collect()
}

/// Resolves the effective config for `domain`.
///
/// - An explicit `SiteConfig` entry is returned verbatim, regardless of the
///   defaults table.
/// - Otherwise `enabled` falls back to `known_defaults` (or `false` when the
///   domain is unlisted) and `prompt_id` to `last_active_prompt_id`.
///
/// No side effects and no error cases; missing data is treated as absent.
pub fn resolve(
    domain: &str,
    site_configs: &BTreeMap<String, SiteConfig>,
    known_defaults: &BTreeMap<String, bool>,
    last_active_prompt_id: Option<&str>,
) -> ResolvedSiteConfig {
    if let Some(config) = site_configs.get(domain) {
        return config.clone().into();
    }

    ResolvedSiteConfig {
        enabled: known_defaults.get(domain).copied().unwrap_or(false),
        prompt_id: last_active_prompt_id.map(|id| id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configs_with(domain: &str, config: SiteConfig) -> BTreeMap<String, SiteConfig> {
        let mut map = BTreeMap::new();
        map.insert(domain.to_string(), config);
        map
    }

    #[test]
    fn test_explicit_config_wins_over_defaults() {
        let stored = SiteConfig {
            enabled: false,
            prompt_id: Some("p-1".to_string()),
        };
        let configs = configs_with("claude.ai", stored.clone());
        let defaults = known_domain_defaults();

        // claude.ai is in the allowlist, but the stored entry wins.
        let resolved = resolve("claude.ai", &configs, &defaults, Some("p-9"));
        assert_eq!(resolved, stored.into());
    }

    #[test]
    fn test_known_domain_defaults_to_enabled() {
        let configs = BTreeMap::new();
        let defaults = known_domain_defaults();

        let resolved = resolve("chatgpt.com", &configs, &defaults, Some("p-2"));
        assert!(resolved.enabled);
        assert_eq!(resolved.prompt_id.as_deref(), Some("p-2"));
    }

    #[test]
    fn test_unknown_domain_defaults_to_disabled() {
        let configs = BTreeMap::new();
        let defaults = known_domain_defaults();

        let resolved = resolve("example.com", &configs, &defaults, Some("p-2"));
        assert!(!resolved.enabled);
        assert_eq!(resolved.prompt_id.as_deref(), Some("p-2"));
    }

    #[test]
    fn test_no_last_active_prompt() {
        let configs = BTreeMap::new();
        let defaults = BTreeMap::new();

        let resolved = resolve("example.com", &configs, &defaults, None);
        assert!(!resolved.enabled);
        assert!(resolved.prompt_id.is_none());
    }

    #[test]
    fn test_explicit_config_without_prompt() {
        let configs = configs_with(
            "example.com",
            SiteConfig {
                enabled: true,
                prompt_id: None,
            },
        );
        let defaults = known_domain_defaults();

        // Explicit entry returned verbatim: no fallback to last-active.
        let resolved = resolve("example.com", &configs, &defaults, Some("p-3"));
        assert!(resolved.enabled);
        assert!(resolved.prompt_id.is_none());
    }
}
