pub mod adapters;
pub mod app;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::http::HttpContactGateway;
pub use app::render::PageRenderer;
pub use catalog::Catalog;
pub use config::SiteConfig;
pub use crate::core::contact_form::{ContactForm, Notice, SubmitOutcome};
pub use crate::core::icons::{resolve_icon, Icon};
pub use crate::core::page::{PageSession, PageState, Section};
pub use utils::error::{Result, SiteError, SubmissionError};
