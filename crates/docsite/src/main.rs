//! docsite CLI - load, validate and inspect documentation site descriptors.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "docsite")]
#[command(about = "Load, validate and inspect documentation site descriptors")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to docsite.toml config file
    #[arg(short, long, default_value = docsite_config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a docsite.toml and content tree in the config's directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the site configuration
    Check,

    /// Print the validated site descriptor as JSON
    Show {
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Resolve and print the sidebar navigation
    Sidebar {
        /// Print JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Check => {
            commands::check::run(&cli.config)?;
        }
        Commands::Show { pretty } => {
            commands::show::run(&cli.config, pretty)?;
        }
        Commands::Sidebar { json } => {
            commands::sidebar::run(&cli.config, json)?;
        }
    }

    Ok(())
}
