//! CloudLeaf CLI Application
//!
//! Interactive shell and MCP server for the CloudLeaf lending circle.

mod args;
mod cli;
mod mcp;
mod renderer;
mod shell;

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cloudleaf_core::{
    auth::{Argon2Hasher, PasswordHasher, PlaintextHasher},
    spawn_expiry_sweep, GeminiClient, LendingConfig, LibraryBuilder, SummaryAssistant,
    SummaryConfig,
};
use log::info;
use mcp::{run_stdio_server, CloudLeafMcpServer};
use renderer::TerminalRenderer;
use shell::Shell;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        api_key,
        model,
        sweep_interval_secs,
        plaintext_passwords,
        command,
    } = Args::parse();

    let hasher: Arc<dyn PasswordHasher> = if plaintext_passwords {
        Arc::new(PlaintextHasher)
    } else {
        Arc::new(Argon2Hasher)
    };
    let config = LendingConfig {
        sweep_interval: Duration::from_secs(sweep_interval_secs),
        ..LendingConfig::default()
    };
    let sweep_interval = config.sweep_interval;

    let library = LibraryBuilder::new()
        .with_config(config)
        .with_hasher(hasher)
        .build()
        .context("Failed to initialize library")?
        .into_shared();

    let summary_config = SummaryConfig {
        model: model.clone(),
        api_key,
        ..SummaryConfig::default()
    };
    let generator =
        GeminiClient::new(&summary_config).context("Failed to create text generation client")?;
    let summaries = Arc::new(SummaryAssistant::new(Arc::new(generator), model));

    let sweeper = spawn_expiry_sweep(library.clone(), sweep_interval);
    info!("CloudLeaf started");

    let result = match command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let renderer = TerminalRenderer::new(!no_color);
            Shell::new(library, summaries, renderer)
                .run(BufReader::new(tokio::io::stdin()))
                .await
        }
        Commands::Serve => {
            info!("Starting CloudLeaf MCP server");
            run_stdio_server(CloudLeafMcpServer::new(library, summaries))
                .await
                .context("MCP server failed")
        }
    };

    sweeper.abort();
    result
}
