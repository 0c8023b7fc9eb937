//! CLI entrypoint for Globetrotter
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use globetrotter_application::{
    InviteParams, LookupInviteeUseCase, NoProgress, ProgressNotifier, TriviaApi,
};
use globetrotter_domain::{PreviewCard, Severity, invite::links::image_url, parse_origin};
use globetrotter_infrastructure::{ConfigLoader, FileConfig, HttpApiClient};
use globetrotter_presentation::{Cli, ConsoleFormatter, OutputConfig, PlayRepl, ProgressReporter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Globetrotter");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    if let Some(origin) = &cli.origin {
        config.game.origin = origin.clone();
    }
    check_config(&config)?;

    let output = OutputConfig {
        color: config.output.color,
        show_progress: config.output.show_progress && !cli.quiet,
    };
    output.apply();

    let params = config.to_invite_params();

    // Preview card needs no API access
    if let Some(card_name) = &cli.card {
        let card = PreviewCard::from_query(Some(card_name.as_str()), cli.score.as_deref());
        let base = parse_origin(&params.origin)?;
        let url = image_url(&base, &card.username, card.score);
        println!("{}", ConsoleFormatter::preview_card(&card, Some(&url)));
        return Ok(());
    }

    // === Dependency Injection ===
    let client = HttpApiClient::new(config.to_api_client_config())
        .context("Failed to create API client")?;
    let api: Arc<dyn TriviaApi> = Arc::new(client);

    if let Some(name) = &cli.invite {
        show_invite(Arc::clone(&api), &params, name, output.show_progress).await;
    }

    let repl = PlayRepl::new(api, params).with_progress(output.show_progress);
    repl.run().await?;

    Ok(())
}

/// Report configuration issues; errors abort startup.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("{}", issue.message);
    }

    let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
    if errors.is_empty() {
        return Ok(());
    }
    for issue in &errors {
        eprintln!("{}", ConsoleFormatter::error(&issue.message));
    }
    bail!("Invalid configuration ({} error(s))", errors.len());
}

/// Print a friend's invite page. Lookup failures are reported and the game
/// starts anyway.
async fn show_invite(
    api: Arc<dyn TriviaApi>,
    params: &InviteParams,
    name: &str,
    show_progress: bool,
) {
    let progress: Box<dyn ProgressNotifier> = if show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(NoProgress)
    };

    let use_case = LookupInviteeUseCase::new(api, params.origin.clone());
    match use_case.execute(Some(name), progress.as_ref()).await {
        Ok(page) => println!("{}", ConsoleFormatter::invite_page(&page)),
        Err(e) => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
    }
}
