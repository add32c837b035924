//! CLI entrypoint for home-relay
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use relay_application::{
    BehaviorConfig, NoProgress, RelayPromptUseCase, RunToolLoopInput, ToolExecutor,
};
use relay_domain::UserPrompt;
use relay_infrastructure::{ConfigLoader, FileConfig, HttpDeviceClient, OllamaModelClient};
use relay_presentation::{
    Cli, Command, ConsoleProgress, RelayState, create_router, relay_response, serve,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve { port: None });

    // Initialize logging based on verbosity level; RUST_LOG applies when no
    // -v is given, and the server logs requests at info by default
    let quiet_level = match command {
        Command::Serve { .. } => "info",
        Command::Ask { .. } => "warn",
    };
    let filter = match cli.verbose {
        0 => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(quiet_level))
        }
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    config.validate()?;

    info!(
        "Starting home-relay (devices: {}, model: {} at {})",
        config.devices.base_url, config.model.name, config.model.base_url
    );

    // === Dependency Injection ===
    let devices = Arc::new(HttpDeviceClient::new(
        &config.devices.base_url,
        config.devices.timeout(),
    )?);
    let model = Arc::new(
        OllamaModelClient::new(&config.model.base_url, &config.model.name)?
            .with_timeouts(config.model.generate_timeout(), config.model.pull_timeout()),
    );

    match command {
        Command::Serve { port } => {
            let relay = RelayPromptUseCase::new(
                Arc::clone(&devices),
                model,
                config.model.system_prompt.clone(),
            )
            .with_behavior(config.behavior());
            let executor = ToolExecutor::new(devices);
            let router = create_router(RelayState::new(
                relay,
                executor,
                &config.server.static_dir,
            ));

            let mut server = config.server.clone();
            if let Some(port) = port {
                server.port = port;
            }
            serve(router, &server.bind_address()).await?;
        }
        Command::Ask {
            prompt,
            max_rounds,
            quiet,
        } => {
            let behavior = ask_behavior(&config, max_rounds)?;
            let input = RunToolLoopInput::new(UserPrompt::try_new(prompt.trim())?)
                .with_max_tool_rounds(behavior.max_tool_rounds);
            let relay = RelayPromptUseCase::new(devices, model, config.model.system_prompt.clone())
                .with_behavior(behavior);

            let output = if quiet {
                relay.execute_with_progress(&input, &NoProgress).await
            } else {
                relay.execute_with_progress(&input, &ConsoleProgress).await
            };

            let (status, body) = relay_response(&output);
            println!("{}", serde_json::to_string_pretty(&body)?);
            if !(200..300).contains(&status) {
                bail!("Relay failed with status {}", status);
            }
        }
    }

    Ok(())
}

fn ask_behavior(config: &FileConfig, max_rounds: Option<usize>) -> Result<BehaviorConfig> {
    let mut behavior = config.behavior();
    if let Some(rounds) = max_rounds {
        behavior = behavior.with_max_tool_rounds(rounds);
    }
    behavior.validate()?;
    Ok(behavior)
}
