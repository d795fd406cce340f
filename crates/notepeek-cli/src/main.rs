use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notepeek_core::{AppConfig, NoteList};

mod commands;

#[derive(Parser)]
#[command(name = "notepeek")]
#[command(author, version, about = "A terminal notes list with pull-to-search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Notes file (TOML with [[notes]] entries), overrides `general.notes_file`
    #[arg(long, global = true)]
    notes: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive screen
    Run,
    /// Print the notes, optionally filtered by title
    List {
        /// Case-sensitive title substring
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Simulate a gesture headlessly and print every frame as JSON
    Trace {
        /// Overscroll offset in pixels at release (negative pulls down)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        pull: f64,
        /// Tap the search control on the first frame
        #[arg(long)]
        tap: bool,
        /// Cancel search this many milliseconds in
        #[arg(long)]
        cancel_at: Option<u64>,
        /// Query typed once search is active
        #[arg(long)]
        query: Option<String>,
        /// Number of frames to print
        #[arg(long, default_value_t = 40)]
        frames: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    let notes = load_notes(&config, cli.notes)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, notes).await,
        Some(Commands::List { query }) => commands::list::run(&notes, query.as_deref()),
        Some(Commands::Trace {
            pull,
            tap,
            cancel_at,
            query,
            frames,
        }) => commands::trace::run(
            &config,
            notes,
            commands::trace::TraceOptions {
                pull,
                tap,
                cancel_at_ms: cancel_at,
                query,
                frames,
            },
        ),
    }
}

/// `RUST_LOG` wins over the configured level. The interactive screen owns the
/// terminal, so it logs to a file in the data directory instead of stderr.
fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if interactive {
        let data_dir = config.data_dir();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        let log_path = config.log_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

fn load_notes(config: &AppConfig, cli_path: Option<PathBuf>) -> Result<NoteList> {
    match cli_path.or_else(|| config.notes_path()) {
        Some(path) => Ok(NoteList::load(&path)?),
        None => {
            info!("No notes file configured, using built-in notes");
            Ok(NoteList::sample())
        }
    }
}
