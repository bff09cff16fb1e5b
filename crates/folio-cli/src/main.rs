use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::{AppConfig, Portfolio};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A personal portfolio in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/folio/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Content file (defaults to ~/.config/folio/content.toml)
    #[arg(long = "content", global = true)]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the portfolio (default)
    Run,
    /// List page sections and their anchors
    Sections,
    /// Print the tech stack as pyramid rows
    Stack {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a social link by label
    Open {
        /// Link label, e.g. "github"
        label: String,
    },
    /// Write default config and content files
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let content_path = cli.content.unwrap_or_else(AppConfig::content_path);

    // Init must work even when the existing config is broken
    if let Some(Commands::Init { force }) = cli.command {
        init_logging(&AppConfig::default(), false)?;
        return commands::init::run(&config_path, &content_path, force);
    }

    let config = AppConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    // The TUI owns the terminal, so its logs go to a file
    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    let portfolio = Portfolio::load(&content_path)
        .with_context(|| format!("Failed to load {}", content_path.display()))?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, portfolio).await,
        Some(Commands::Sections) => commands::sections::run(),
        Some(Commands::Stack { json }) => commands::stack::run(&portfolio, json),
        Some(Commands::Open { label }) => commands::open::run(&portfolio, &label),
        Some(Commands::Init { .. }) => Ok(()),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
