//! Dictionary API client.
//!
//! Issues a single GET per lookup against the public dictionary service and
//! maps HTTP outcomes to the shared error taxonomy: 404 becomes
//! `WordNotFound`, other non-success statuses become `Api`, and transport
//! failures propagate as `Transport`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, StatusCode};

use adfontes_core::dictionary::DictionaryEntry;
use adfontes_core::{AdFontesError, Result};

const BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Characters escaped when the lemma is placed in the URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Client for the dictionary lookup service.
#[derive(Clone)]
pub struct DictionaryApiClient {
    client: Client,
    base_url: String,
}

impl DictionaryApiClient {
    /// Creates a client against the public dictionary endpoint.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the lookup URL for a lemma.
    pub fn lookup_url(&self, lemma: &str) -> String {
        let encoded = utf8_percent_encode(lemma, PATH_SEGMENT);
        format!("{}/{}", self.base_url, encoded)
    }

    /// Fetches dictionary entries for `lemma`. One network call, no retry.
    pub async fn fetch_definitions(&self, lemma: &str) -> Result<Vec<DictionaryEntry>> {
        let url = self.lookup_url(lemma);
        tracing::debug!(%url, "fetching definitions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| AdFontesError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_http_error(status, lemma));
        }

        let body = response
            .text()
            .await
            .map_err(|err| AdFontesError::transport(format!("Failed to read response: {err}")))?;

        // A success body that is not an entry array contributes zero
        // meanings rather than failing the lookup.
        let entries = serde_json::from_str::<Vec<DictionaryEntry>>(&body).unwrap_or_else(|err| {
            tracing::warn!(%err, "unexpected response shape, treating as empty");
            Vec::new()
        });

        tracing::debug!(count = entries.len(), "received dictionary entries");
        Ok(entries)
    }
}

impl Default for DictionaryApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a non-success HTTP status to the error taxonomy.
fn map_http_error(status: StatusCode, lemma: &str) -> AdFontesError {
    if status == StatusCode::NOT_FOUND {
        return AdFontesError::word_not_found(lemma);
    }

    let status_text = status
        .canonical_reason()
        .map(|reason| reason.to_string())
        .unwrap_or_else(|| status.as_str().to_string());
    AdFontesError::api(status_text)
}
