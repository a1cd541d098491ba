//! Output formatting for generated lookups.
//!
//! Deterministic and pure: merges the lemma, user context, deduplicated
//! definition list, and a free-text other message into a fixed-layout
//! plain-text block ready for the clipboard.

use std::collections::HashSet;

use crate::dictionary::DictionaryEntry;

/// Bullet emitted when the deduplicated meaning list is empty.
const NO_DEFINITIONS: &str = "No definitions found";

/// Flattens every `(partOfSpeech, definition)` pair across all entries into
/// `[pos] definition` strings, deduplicating exact matches while preserving
/// first-occurrence order.
pub fn collect_meanings(entries: &[DictionaryEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut meanings = Vec::new();

    for entry in entries {
        for meaning in &entry.meanings {
            for def in &meaning.definitions {
                let line = format!("[{}] {}", meaning.part_of_speech, def.definition);
                if seen.insert(line.clone()) {
                    meanings.push(line);
                }
            }
        }
    }

    meanings
}

/// Produces the fixed-layout output block:
///
/// ```text
/// word: <lemma>
/// context: <user context>
/// meanings:
/// - <meaning 1>
/// - <meaning 2>
/// other_message: <other message>
/// ```
pub fn format_output(
    lemma: &str,
    user_context: &str,
    entries: &[DictionaryEntry],
    other_message: &str,
) -> String {
    let meanings = collect_meanings(entries);

    let mut text = format!("word: {lemma}\n");
    text.push_str(&format!("context: {user_context}\n"));
    text.push_str("meanings:\n");

    if meanings.is_empty() {
        text.push_str(&format!("- {NO_DEFINITIONS}\n"));
    } else {
        for meaning in &meanings {
            text.push_str(&format!("- {meaning}\n"));
        }
    }

    text.push_str(&format!("other_message: {other_message}"));
    text
}
