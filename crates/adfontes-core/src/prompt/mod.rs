pub mod model;
pub mod repository;

pub use model::{Prompt, DEFAULT_PROMPT_TITLE};
pub use repository::PromptRepository;
