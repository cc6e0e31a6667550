//! CLI argument definitions using clap
//!
//! Commands:
//! - newsdesk serve --config <path> [--port <port>]
//! - newsdesk check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// newsdesk - an HTTP API over topics, articles and comments
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./newsdesk.json")]
        config: PathBuf,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the resolved configuration and exit
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./newsdesk.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_port() {
        let cli = Cli::try_parse_from(["newsdesk", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./newsdesk.json"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_config_path() {
        let cli =
            Cli::try_parse_from(["newsdesk", "check-config", "--config", "/etc/newsdesk.json"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::CheckConfig { config } if config == PathBuf::from("/etc/newsdesk.json")
        ));
    }
}
