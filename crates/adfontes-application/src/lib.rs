//! Application services for Ad Fontes: the generate orchestration, the
//! lookup session context, the clipboard port, and the debounced autosave.

pub mod autosave;
pub mod clipboard;
pub mod generate;
pub mod session;

pub use crate::autosave::Debouncer;
pub use crate::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use crate::generate::{GenerateOutcome, GenerateRequest, GenerateService};
pub use crate::session::{normalize_domain, LookupSession};
