#[cfg(feature = "cli")]
pub mod cli;
pub mod env_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use env_config::SiteConfig;
