//! The `site` commands: per-domain settings for prompt prefixing.

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use adfontes_application::normalize_domain;
use adfontes_core::prompt::PromptRepository;
use adfontes_core::site::{known_domain_defaults, SiteConfig, SiteConfigRepository};
use adfontes_core::state::StateRepository;
use adfontes_core::AdFontesError;
use adfontes_infrastructure::{TomlPromptRepository, TomlSiteConfigRepository, TomlStateRepository};

#[derive(Subcommand)]
pub enum SiteAction {
    /// List stored site settings
    List,
    /// Enable prefixing for a domain, optionally binding a prompt
    Set {
        /// Hostname or full URL
        domain: String,
        /// Prompt id to prepend on this site (also becomes the last-active prompt)
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Enable prefixing for a domain, keeping its bound prompt
    Enable {
        /// Hostname or full URL
        domain: String,
    },
    /// Disable prefixing for a domain, keeping its bound prompt
    Disable {
        /// Hostname or full URL
        domain: String,
    },
    /// Forget the stored settings for a domain
    Delete {
        /// Hostname or full URL
        domain: String,
    },
    /// Forget all stored site settings
    Clear,
}

pub async fn run(base_dir: Option<&Path>, action: SiteAction) -> Result<()> {
    let site_repo = TomlSiteConfigRepository::new(base_dir)?;

    match action {
        SiteAction::List => {
            let configs = site_repo.load_all().await?;
            if configs.is_empty() {
                println!("No site settings saved.");
            }
            for (domain, config) in &configs {
                let status = if config.enabled { "enabled" } else { "disabled" };
                match &config.prompt_id {
                    Some(id) => println!("{domain}  {status}  prompt={id}"),
                    None => println!("{domain}  {status}"),
                }
            }
            let defaults = known_domain_defaults();
            let unlisted: Vec<&str> = defaults
                .keys()
                .filter(|d| !configs.contains_key(*d))
                .map(|d| d.as_str())
                .collect();
            if !unlisted.is_empty() {
                println!("Enabled by default: {}", unlisted.join(", "));
            }
        }
        SiteAction::Set { domain, prompt } => {
            let domain = parse_domain(&domain)?;
            if let Some(prompt_id) = &prompt {
                let prompt_repo = TomlPromptRepository::new(base_dir)?;
                if prompt_repo.find_by_id(prompt_id).await?.is_none() {
                    return Err(AdFontesError::not_found("prompt", prompt_id.clone()).into());
                }
            }
            let config = SiteConfig {
                enabled: true,
                prompt_id: prompt.clone(),
            };
            site_repo.set(&domain, &config).await?;
            // A fresh binding also becomes the fallback for sites without one.
            if let Some(prompt_id) = prompt {
                let state_repo = TomlStateRepository::new(base_dir)?;
                state_repo.set_last_active_prompt(prompt_id).await?;
            }
            println!("Enabled {domain}.");
        }
        SiteAction::Enable { domain } => {
            let domain = parse_domain(&domain)?;
            let mut config = existing_or_default(&site_repo, &domain).await?;
            config.enabled = true;
            site_repo.set(&domain, &config).await?;
            println!("Enabled {domain}.");
        }
        SiteAction::Disable { domain } => {
            let domain = parse_domain(&domain)?;
            let mut config = existing_or_default(&site_repo, &domain).await?;
            config.enabled = false;
            site_repo.set(&domain, &config).await?;
            println!("Disabled {domain}.");
        }
        SiteAction::Delete { domain } => {
            let domain = parse_domain(&domain)?;
            site_repo.delete(&domain).await?;
            println!("Forgot {domain}.");
        }
        SiteAction::Clear => {
            site_repo.clear().await?;
            println!("Cleared all site settings.");
        }
    }

    Ok(())
}

fn parse_domain(input: &str) -> Result<String> {
    normalize_domain(input)
        .ok_or_else(|| AdFontesError::validation(format!("Not a valid domain: {input}")).into())
}

async fn existing_or_default(
    repo: &TomlSiteConfigRepository,
    domain: &str,
) -> Result<SiteConfig> {
    let configs = repo.load_all().await?;
    Ok(configs.get(domain).cloned().unwrap_or_else(SiteConfig::disabled))
}
