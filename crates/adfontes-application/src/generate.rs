//! Generate orchestration.
//!
//! Drives the lookup pipeline: lemmatize, fetch definitions, format,
//! resolve the acting site's config, prepend the bound prompt when active,
//! keep the result in a preview buffer, and copy it to the clipboard.
//!
//! Two phases, Idle and Generating, with a single request in flight; a
//! second generate while busy is rejected up front. Only the fetch step can
//! abort the sequence; a clipboard failure is surfaced in the outcome but
//! leaves the generated text intact.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use adfontes_core::format::format_output;
use adfontes_core::{AdFontesError, Result};
use adfontes_interaction::{DictionaryApiClient, Lemmatizer};

use crate::clipboard::Clipboard;
use crate::session::LookupSession;

/// Inputs for one generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub word: String,
    pub context: String,
    pub other: String,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// The full formatted text (prompt prefix included when active).
    pub text: String,
    /// The lemma actually looked up.
    pub lemma: String,
    /// Whether the clipboard write succeeded.
    pub copied: bool,
    /// Status line for a failed clipboard write, when `copied` is false.
    pub clipboard_status: Option<String>,
}

/// Orchestrates the generate flow.
pub struct GenerateService {
    lemmatizer: Lemmatizer,
    api: DictionaryApiClient,
    clipboard: Arc<dyn Clipboard>,
    generating: AtomicBool,
    preview: Mutex<Option<String>>,
}

impl GenerateService {
    pub fn new(api: DictionaryApiClient, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            lemmatizer: Lemmatizer::new(),
            api,
            clipboard,
            generating: AtomicBool::new(false),
            preview: Mutex::new(None),
        }
    }

    /// Runs the full generate sequence for `request` within `session`.
    ///
    /// Validation happens before any I/O: a whitespace-only word is
    /// rejected without ever invoking the fetcher.
    pub async fn generate(
        &self,
        session: &LookupSession,
        request: &GenerateRequest,
    ) -> Result<GenerateOutcome> {
        let word = request.word.trim();
        if word.is_empty() {
            return Err(AdFontesError::validation("Please enter a word"));
        }

        let _guard = self.enter_generating()?;

        let lemma = self.lemmatizer.lemmatize(word);
        tracing::debug!(original = word, lemma = %lemma, "lemmatized input");

        // The only step that can abort the sequence.
        let entries = self.api.fetch_definitions(&lemma).await?;

        let mut text = format_output(
            &lemma,
            request.context.trim(),
            &entries,
            request.other.trim(),
        );

        if let Some(prompt_content) = session.active_prompt_content() {
            text = format!("{prompt_content}\n\n{text}");
        }

        *self.preview.lock().expect("preview lock") = Some(text.clone());

        let (copied, clipboard_status) = match self.clipboard.write_text(&text) {
            Ok(()) => (true, None),
            Err(err) => {
                tracing::warn!(%err, "clipboard write failed");
                (false, Some(err.to_string()))
            }
        };

        Ok(GenerateOutcome {
            text,
            lemma,
            copied,
            clipboard_status,
        })
    }

    /// Returns the preview buffer from the last successful generation.
    pub fn preview(&self) -> Option<String> {
        self.preview.lock().expect("preview lock").clone()
    }

    /// Copies the preview buffer again ("copy" control).
    pub fn copy_preview(&self) -> Result<()> {
        let text = self
            .preview()
            .ok_or_else(|| AdFontesError::validation("Nothing generated yet"))?;
        self.clipboard.write_text(&text)
    }

    fn enter_generating(&self) -> Result<GeneratingGuard<'_>> {
        if self
            .generating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AdFontesError::validation(
                "A lookup is already in progress",
            ));
        }
        Ok(GeneratingGuard {
            flag: &self.generating,
        })
    }
}

/// Returns the service to Idle on every exit path.
struct GeneratingGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
