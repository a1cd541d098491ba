//! The `prompt` commands: CRUD over reusable prompt templates.

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use adfontes_core::prompt::{Prompt, PromptRepository, DEFAULT_PROMPT_TITLE};
use adfontes_core::AdFontesError;
use adfontes_infrastructure::TomlPromptRepository;

#[derive(Subcommand)]
pub enum PromptAction {
    /// List all prompts in insertion order
    List,
    /// Create a new prompt and print its id
    Add {
        /// Title shown in listings
        #[arg(long, default_value = DEFAULT_PROMPT_TITLE)]
        title: String,
        /// Template text prepended to generated output
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Print a prompt's content
    Show {
        /// Prompt id
        id: String,
    },
    /// Update a prompt's title and/or content
    Edit {
        /// Prompt id
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a prompt (sites bound to it simply lose their prefix)
    Delete {
        /// Prompt id
        id: String,
    },
}

pub async fn run(base_dir: Option<&Path>, action: PromptAction) -> Result<()> {
    let repo = TomlPromptRepository::new(base_dir)?;

    match action {
        PromptAction::List => {
            let prompts = repo.get_all().await?;
            if prompts.is_empty() {
                println!("No prompts saved.");
                return Ok(());
            }
            for prompt in prompts {
                println!("{}  {}", prompt.id, prompt.title);
            }
        }
        PromptAction::Add { title, content } => {
            let prompt = Prompt::with_content(title, content);
            repo.save(&prompt).await?;
            println!("{}", prompt.id);
        }
        PromptAction::Show { id } => {
            let prompt = repo
                .find_by_id(&id)
                .await?
                .ok_or_else(|| AdFontesError::not_found("prompt", id.clone()))?;
            println!("{}", prompt.content);
        }
        PromptAction::Edit { id, title, content } => {
            let mut prompt = repo
                .find_by_id(&id)
                .await?
                .ok_or_else(|| AdFontesError::not_found("prompt", id.clone()))?;
            if let Some(title) = title {
                prompt.title = title;
            }
            if let Some(content) = content {
                prompt.content = content;
            }
            repo.save(&prompt).await?;
            println!("Updated {}.", prompt.id);
        }
        PromptAction::Delete { id } => {
            repo.delete(&id).await?;
            println!("Deleted {id}.");
        }
    }

    Ok(())
}
