// SPDX-License-Identifier: AGPL-3.0
// Wanderlist CLI - Terminal frontend

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wanderlist_core::{config, Category, TravelLog};

#[derive(Parser)]
#[command(name = "wanderlist")]
#[command(version, about = "Track the beaches and mountain treks you have visited")]
struct Cli {
    /// Directory holding the stored data (overrides the config file)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List destinations with visited and favorite markers
    List {
        /// beach or mountain
        category: Category,

        /// Region or state to filter by
        #[arg(long, default_value = "All")]
        filter: String,

        /// Case-insensitive text to search names, states and regions
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Show the filters available for a category
    Filters { category: Category },

    /// Mark a destination visited, or unmark it
    Visit { category: Category, id: String },

    /// Star a destination, or unstar it
    Favorite { category: Category, id: String },

    /// Show the note for a destination, or save new text
    Note {
        category: Category,
        id: String,

        /// New note text; empty text deletes the note
        text: Option<String>,
    },

    /// Show the profile and travel progress
    Profile {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// Avatar number (0 backpacker, 1 climber, 2 beach lover)
        #[arg(long)]
        avatar: Option<u32>,
    },

    /// Clear visited destinations (and favorites and notes, per config)
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("wanderlist_cli={}", level).parse()?)
                .add_directive(format!("wanderlist_core={}", level).parse()?),
        )
        .init();

    tracing::debug!("Starting Wanderlist v{}", env!("CARGO_PKG_VERSION"));

    let mut app_config = config::load_config(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        app_config.data_dir = Some(dir);
    }

    let log = TravelLog::open(&app_config).await?;
    let output = commands::run(&log, args.command).await?;
    print!("{}", output);

    Ok(())
}
