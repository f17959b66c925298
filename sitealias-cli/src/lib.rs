//! Administrative command layer for sitealias.
//!
//! Thin boundary over the store: each command does one store interaction
//! and converts typed failures into the operator-facing message and a
//! non-zero exit. The binary in `main.rs` only parses arguments, sets up
//! logging, and prints.

pub mod commands;

pub use commands::{add_site, get, resolve, set, CommandError};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage custom site ids for an analytics platform instance.
#[derive(Parser, Debug)]
#[command(name = "sitealias")]
#[command(about = "Set, get and resolve custom site ids")]
pub struct Cli {
    /// Path to the settings database
    #[arg(long, default_value = "sitealias.db")]
    pub db: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set the custom site id for an existing site
    Set {
        /// Name of the site to update
        #[arg(long)]
        name: String,

        /// Custom site id to assign
        #[arg(long = "custom-site-id")]
        custom_site_id: String,

        /// Overwrite an existing custom site id
        #[arg(long)]
        force: bool,
    },

    /// Look up the internal site id behind a custom site id
    Get {
        /// Custom site id to look up
        #[arg(long = "custom-site-id")]
        custom_site_id: String,
    },

    /// Resolve an identifier the way the tracker ingest hook would
    Resolve {
        /// Site id or custom site id to resolve
        candidate: String,
    },

    /// Register a site in the settings database
    AddSite {
        /// Name for the new site
        #[arg(long)]
        name: String,

        /// Main URL for the new site
        #[arg(long)]
        url: Option<String>,
    },
}
