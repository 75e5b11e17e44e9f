//! CLI module
//!
//! Subcommands for running the service:
//! - `serve`: run the HTTP API
//! - `migrate`: apply pending database migrations

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// User management REST API
#[derive(Parser)]
#[command(name = "accounts-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Apply pending database migrations
    Migrate,
}
