use anyhow::Context;
use clap::Parser;
use diamondali_site::adapters::http::{contact_endpoint, HttpContactGateway};
use diamondali_site::domain::model::ContactFormDraft;
use diamondali_site::domain::ports::ConfigProvider;
use diamondali_site::utils::logger;
use diamondali_site::utils::validation::Validate;
use diamondali_site::{
    Catalog, CliConfig, Command, ContactForm, PageRenderer, PageSession, PageState, SiteConfig,
    SubmissionError, SubmitOutcome,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// 預覽時沒有設定後端就用本機開發用的位址
const LOCAL_BACKEND_URL: &str = "http://localhost:8001";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting diamondali-site");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load catalog: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    catalog.validate().context("catalog validation failed")?;

    match config.command.clone() {
        Command::Render {
            output,
            testimonial,
        } => render(&config, &catalog, output.as_deref(), testimonial),
        Command::Preview {
            ticks,
            interval_secs,
        } => preview(&config, catalog, ticks, Duration::from_secs(interval_secs)).await,
        Command::Contact {
            name,
            email,
            message,
        } => {
            let code = contact(&config, ContactFormDraft::new(name, email, message)).await?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Command::Catalog { output } => {
            let exported = catalog.to_toml_string()?;
            write_output(output.as_deref(), &exported)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("📁 Output saved to: {}", path.display());
            println!("📁 Output saved to: {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn render(
    config: &CliConfig,
    catalog: &Catalog,
    output: Option<&Path>,
    testimonial: usize,
) -> anyhow::Result<()> {
    let mut state = PageState::initial(catalog);

    if testimonial < catalog.testimonials.len() {
        state.testimonial_index = Some(testimonial);
    } else if !catalog.testimonials.is_empty() {
        tracing::warn!(
            "🔶 Testimonial {} out of range (have {}), starting at 0",
            testimonial,
            catalog.testimonials.len()
        );
    }

    match config.site_config() {
        Ok(site) => state.contact_action = Some(contact_endpoint(&site.backend_url)),
        Err(e) => tracing::info!("No backend configured, form has no action ({})", e),
    }

    let html = PageRenderer::new(catalog).render(&state);
    write_output(output, &html)
}

async fn preview(
    config: &CliConfig,
    catalog: Catalog,
    ticks: Option<usize>,
    interval: Duration,
) -> anyhow::Result<()> {
    let site = config.site_config().unwrap_or_else(|e| {
        tracing::warn!("🔶 {} - using {}", e, LOCAL_BACKEND_URL);
        SiteConfig::new(LOCAL_BACKEND_URL).with_rotation_interval(interval)
    });
    site.validate()?;

    let gateway = HttpContactGateway::new(&site)?;
    let mut session = PageSession::new(Arc::new(catalog), gateway);

    let period = site.rotation_interval();
    if !session.activate(period) {
        println!("No testimonials to rotate.");
        return Ok(());
    }

    log_current(&session);

    // 取樣點落在兩次推進之間
    let start = tokio::time::Instant::now() + period + period / 2;
    let mut sampler = tokio::time::interval_at(start, period);
    let mut seen = 0usize;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("🛑 Interrupted");
                break;
            }
            _ = sampler.tick() => {
                log_current(&session);
                seen += 1;
                if ticks.is_some_and(|limit| seen >= limit) {
                    break;
                }
            }
        }
    }

    session.deactivate();
    Ok(())
}

fn log_current(session: &PageSession<HttpContactGateway>) {
    if let (Some(index), Some(testimonial)) =
        (session.testimonial_index(), session.current_testimonial())
    {
        tracing::info!(
            "💬 [{}] {} ({})",
            index,
            testimonial.author_name,
            testimonial.author_position
        );
        println!("[{}] \"{}\" - {}", index, testimonial.content, testimonial.author_name);
    }
}

async fn contact(config: &CliConfig, draft: ContactFormDraft) -> anyhow::Result<i32> {
    let site = config
        .site_config()
        .context("a backend URL is required to send messages (set BACKEND_URL)")?;
    let gateway = HttpContactGateway::new(&site)?;
    tracing::info!("📡 Sending contact message to {}", gateway.endpoint());

    let form = ContactForm::new(gateway);
    form.fill(draft);

    let outcome = form.submit().await;
    if let Some(notice) = form.last_notice() {
        println!("{}: {}", notice.title, notice.description);
    }

    Ok(match outcome {
        SubmitOutcome::Sent(ack) => {
            if let Some(id) = ack.id {
                tracing::info!("📨 Stored as message {}", id);
            }
            0
        }
        SubmitOutcome::Rejected(SubmissionError::RateLimited { .. }) => 2,
        SubmitOutcome::Rejected(err) => {
            if !err.reached_endpoint() {
                tracing::warn!("⚠️ Nothing was sent: {}", err);
            }
            1
        }
        SubmitOutcome::Ignored => 1,
    })
}
