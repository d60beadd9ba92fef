//! CLI entrypoint for llm-qa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use qa_application::{RunAskInput, RunAskUseCase};
use qa_infrastructure::{ConfigLoader, FileConfig, HttpLlmGateway};
use qa_presentation::{AppState, ChatRepl, Cli, ConsoleFormatter, ProgressReporter};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials are commonly kept in a local .env file
    let dotenv = dotenvy::dotenv();

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

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let kind = config.provider_kind()?;
    let settings = config.provider_settings()?;
    let execution = config.execution_params()?;
    let gateway = Arc::new(HttpLlmGateway::new(&settings)?);

    info!(
        "Starting llm-qa with {} ({} candidate model(s))",
        kind.display_name(),
        execution.models.len()
    );

    let use_case = RunAskUseCase::new(gateway, execution)
        .with_default_credential(config.resolve_credential())
        .with_credential_env(config.api_key_env());

    let format = cli
        .output
        .map(qa_domain::OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // Serve mode
    if cli.serve {
        let bind = match (&cli.bind, std::env::var("PORT")) {
            (Some(addr), _) => addr.clone(),
            (None, Ok(port)) => format!("0.0.0.0:{}", port.trim()),
            (None, Err(_)) => config.server.bind.clone(),
        };
        qa_presentation::serve(AppState::new(use_case), &bind)
            .await
            .with_context(|| format!("HTTP server on {} failed", bind))?;
        return Ok(());
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(use_case, kind.display_name())
            .with_progress(!cli.quiet && config.repl.show_progress)
            .with_format(format)
            .with_credential_env(config.api_key_env())
            .with_history_path(config.repl.history_path());

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode or --serve for HTTP."),
    };

    let input = RunAskInput::new(question);
    let outcome = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    println!("{}", ConsoleFormatter::render(&outcome, format));

    Ok(())
}

/// Load configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    if let Some(provider) = &cli.provider {
        config.provider.kind = provider.clone();
    }
    if !cli.model.is_empty() {
        config.provider.models = cli.model.clone();
    }
    if let Some(key) = &cli.api_key {
        config.provider.api_key = Some(key.clone());
    }

    config.validate()?;
    Ok(config)
}
