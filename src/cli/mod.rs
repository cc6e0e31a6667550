//! CLI module for newsdesk
//!
//! Provides command-line interface for:
//! - serve: Open the store and run the HTTP API
//! - check-config: Print the resolved configuration

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve};
pub use config::{Config, DATABASE_URL_ENV};
pub use errors::{CliError, CliErrorCode, CliResult};
