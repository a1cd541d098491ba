//! External collaborators for Ad Fontes: the dictionary REST API client and
//! the lemmatizer adapter around the text-analysis library.

pub mod dictionary_api;
pub mod lemmatizer;

pub use crate::dictionary_api::DictionaryApiClient;
pub use crate::lemmatizer::Lemmatizer;
