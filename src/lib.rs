pub mod browser;
pub mod config;
pub mod link;
pub mod logging;
pub mod resolver;
pub mod vcs;

pub use resolver::{OpenError, RepositoryLinkResolver, ResolverSettings};
