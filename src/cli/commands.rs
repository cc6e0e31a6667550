//! CLI command implementations
//!
//! `serve` boots in a fixed order: configuration, logging, store, then the
//! HTTP server. Nothing is served until the store has been opened.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::api::ApiHandler;
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::SqlStore;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Start the HTTP server and block until shutdown
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?.with_port(port);

    init_logging(&config.log)?;
    info!(
        config = %config_path.display(),
        port = config.server.port,
        "starting newsdesk"
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(run_server(&config))
}

async fn run_server(config: &Config) -> CliResult<()> {
    let store = SqlStore::connect(&config.store).await?;
    let server = match HttpServer::with_config(&config.server, ApiHandler::new(store.clone())) {
        Ok(server) => server,
        Err(e) => {
            store.close().await;
            return Err(e.into());
        }
    };

    let served = server
        .start()
        .await
        .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)));

    store.close().await;
    served
}

/// Print the resolved configuration as JSON
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    Ok(())
}
