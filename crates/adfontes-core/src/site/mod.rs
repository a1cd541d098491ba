pub mod model;
pub mod repository;
pub mod resolver;

pub use model::{ResolvedSiteConfig, SiteConfig};
pub use repository::SiteConfigRepository;
pub use resolver::{known_domain_defaults, resolve, KNOWN_ENABLED_DOMAINS};
