//! Core domain for Ad Fontes: models, the pure site-config resolver and
//! output formatter, the shared error taxonomy, and repository traits.
//!
//! This crate performs no I/O; persistence lives in
//! `adfontes-infrastructure` and external collaborators (dictionary API,
//! lemmatizer, clipboard) in `adfontes-interaction` / `adfontes-application`.

pub mod dictionary;
pub mod error;
pub mod format;
pub mod prompt;
pub mod site;
pub mod state;

// Re-export common error type
pub use error::{AdFontesError, Result};
