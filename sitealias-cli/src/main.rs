//! sitealias — manage custom site ids from the command line.
//!
//! Usage:
//!   sitealias add-site --name "Shop B" --url https://shopb.example
//!   sitealias set --name "Shop B" --custom-site-id shopB
//!   sitealias get --custom-site-id shopB

use anyhow::Context;
use clap::Parser;
use sitealias_cli::{commands, Cli, Command};
use sitealias_store::SettingStore;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let store = match SettingStore::open(&cli.db)
        .with_context(|| format!("failed to open settings database {}", cli.db.display()))
    {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Command::Set {
            name,
            custom_site_id,
            force,
        } => commands::set(&store, name, custom_site_id, *force),
        Command::Get { custom_site_id } => commands::get(&store, custom_site_id),
        Command::Resolve { candidate } => commands::resolve(&store, candidate),
        Command::AddSite { name, url } => commands::add_site(&store, name, url.as_deref()),
    };

    match result {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
