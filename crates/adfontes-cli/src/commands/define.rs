//! The `define` command: the full lookup pipeline from word to clipboard.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use adfontes_application::{
    normalize_domain, Debouncer, GenerateRequest, GenerateService, LookupSession, SystemClipboard,
};
use adfontes_core::state::StateRepository;
use adfontes_infrastructure::{TomlPromptRepository, TomlSiteConfigRepository, TomlStateRepository};
use adfontes_interaction::DictionaryApiClient;

#[derive(Args)]
pub struct DefineArgs {
    /// Word to look up (lemmatized before the dictionary call)
    pub word: String,

    /// Sentence or phrase the word appeared in
    #[arg(long, default_value = "")]
    pub context: String,

    /// Free-form message appended at the end of the output
    #[arg(long, default_value = "")]
    pub other: String,

    /// Acting site, as a hostname or full URL (scopes prompt prefixing)
    #[arg(long)]
    pub domain: Option<String>,
}

pub async fn run(base_dir: Option<&Path>, args: DefineArgs) -> Result<()> {
    let prompt_repo = TomlPromptRepository::new(base_dir)?;
    let site_repo = TomlSiteConfigRepository::new(base_dir)?;
    let state_repo = TomlStateRepository::new(base_dir)?;

    let domain = args.domain.as_deref().and_then(normalize_domain);
    let session = LookupSession::load(&prompt_repo, &site_repo, &state_repo, domain).await?;

    let service = GenerateService::new(DictionaryApiClient::new(), Arc::new(SystemClipboard));
    let request = GenerateRequest {
        word: args.word,
        context: args.context,
        other: args.other,
    };

    // The scratchpad save is debounced while editing; a one-shot command
    // has a single edit, flushed before exit either way.
    let autosave = Debouncer::default();
    {
        let state_repo = state_repo.clone();
        let word = request.word.clone();
        let context = request.context.clone();
        let other = request.other.clone();
        autosave.schedule(async move {
            if let Err(err) = state_repo.save_scratchpad(word, context, other).await {
                tracing::warn!(%err, "scratchpad autosave failed");
            }
        });
    }

    let result = service.generate(&session, &request).await;
    autosave.flush().await;
    let outcome = result?;

    println!("{}", outcome.text);

    if outcome.copied {
        eprintln!("Copied to clipboard.");
    } else if let Some(status) = outcome.clipboard_status {
        eprintln!("Generated, but the clipboard copy failed: {status}");
    }

    Ok(())
}
