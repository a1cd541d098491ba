//! Persistence layer for Ad Fontes: path resolution, atomic TOML storage,
//! and TOML-backed repository implementations.

pub mod paths;
pub mod storage;
pub mod toml_prompt_repository;
pub mod toml_site_config_repository;
pub mod toml_state_repository;

pub use crate::paths::AdFontesPaths;
pub use crate::toml_prompt_repository::TomlPromptRepository;
pub use crate::toml_site_config_repository::TomlSiteConfigRepository;
pub use crate::toml_state_repository::TomlStateRepository;
