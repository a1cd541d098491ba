//! Dictionary lookup response models.
//!
//! Mirrors the JSON shape returned by the public dictionary lookup service
//! (a top-level array of entries, each carrying a list of meanings grouped by
//! part of speech). Unknown fields are ignored so upstream schema additions
//! never break parsing.

use serde::{Deserialize, Serialize};

/// One dictionary entry for a looked-up word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// A group of definitions sharing a part of speech.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// A single definition line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}
