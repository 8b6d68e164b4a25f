//! Movable Type Data API CLI - command-line client for a Movable Type site.
//!
//! Signs in to a Data API endpoint and lists, reads and edits sites and
//! entries, exports and publishes entries, and uploads assets. Useful for
//! scripting and for checking an installation from the terminal.

mod commands;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use mt_core::config::AppConfig;
use mt_core::error::MtResult;
use mt_core::logging;

/// Movable Type Data API client.
#[derive(Parser)]
#[command(
    name = "mt-data-api",
    version,
    about = "Movable Type Data API client CLI",
    long_about = "A command-line interface for the Movable Type Data API.\n\
                  Sign in to a Movable Type installation and manage its sites and entries."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Data API script URL (overrides config).
    #[arg(short = 'u', long, global = true)]
    base_url: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the server which API version it speaks.
    Version,
    /// Sign in and show the signed-in user.
    Login {
        /// User name (overrides config).
        #[arg(short = 'U', long)]
        username: Option<String>,
    },
    /// List and inspect sites.
    Sites {
        #[command(subcommand)]
        action: commands::sites::SitesAction,
    },
    /// List, read, create, update, delete and export entries.
    Entries {
        #[command(subcommand)]
        action: commands::entries::EntriesAction,
    },
    /// Publish entries, following the server through every phase.
    Publish {
        /// Entry ids to publish.
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Upload a file as an asset.
    Upload {
        /// File to upload.
        file: PathBuf,
        /// Site to upload into.
        #[arg(short, long)]
        site: Option<String>,
        /// Destination path under the site root.
        #[arg(short, long)]
        path: Option<String>,
        /// Replace an existing file with the same name.
        #[arg(long)]
        overwrite: bool,
    },
}

fn load_config(path: Option<&str>) -> MtResult<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from_file(Path::new(path)),
        None => AppConfig::load_default(),
    }
}

#[tokio::main]
async fn main() -> MtResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config.server.base_url = AppConfig::sanitize_base_url(base_url);
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    let log_dir = config
        .effective_log_dir()
        .unwrap_or_else(|_| PathBuf::from("logs"));
    let _guard = logging::init_logging(log_level, &log_dir, config.logging.json_output)?;

    info!(
        "MT Data API CLI v{} on {}",
        mt_core::constants::APP_VERSION,
        mt_core::Platform::current()
    );

    // Dispatch to command handlers
    match cli.command {
        Commands::Version => commands::version::run(&config, cli.format).await,
        Commands::Login { username } => {
            commands::login::run(&mut config, username, cli.format).await
        }
        Commands::Sites { action } => commands::sites::run(&mut config, action, cli.format).await,
        Commands::Entries { action } => {
            commands::entries::run(&mut config, action, cli.format).await
        }
        Commands::Publish { ids } => commands::publish::run(&mut config, ids, cli.format).await,
        Commands::Upload {
            file,
            site,
            path,
            overwrite,
        } => commands::upload::run(&mut config, file, site, path, overwrite, cli.format).await,
    }
}
