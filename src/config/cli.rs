use crate::catalog::Catalog;
use crate::config::env_config::SiteConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "diamondali-site")]
#[command(about = "Render and operate the DiamondAli portfolio page")]
pub struct CliConfig {
    /// Catalog TOML file; the built-in content is used when omitted
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Overrides the BACKEND_URL environment variable
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the full page as HTML
    Render {
        #[arg(long)]
        output: Option<PathBuf>,

        /// Testimonial shown in the carousel
        #[arg(long, default_value = "0")]
        testimonial: usize,
    },
    /// Run the testimonial rotation until Ctrl-C or the tick limit
    Preview {
        #[arg(long)]
        ticks: Option<usize>,

        #[arg(long, default_value = "5")]
        interval_secs: u64,
    },
    /// Send one contact message
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
    /// Export the active catalog as TOML
    Catalog {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl CliConfig {
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_file(path),
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn site_config(&self) -> Result<SiteConfig> {
        let config = SiteConfig::resolve(self.backend_url.as_deref())?;
        let config = match &self.command {
            Command::Preview { interval_secs, .. } => {
                config.with_rotation_interval(Duration::from_secs(*interval_secs))
            }
            _ => config,
        };
        config.validate()?;
        Ok(config)
    }
}
