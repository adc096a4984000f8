use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dsviz_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "dsviz")]
#[command(author, version, about = "Animated playback of linked-list operation logs")]
struct Cli {
    /// Configuration file (defaults to ~/.config/dsviz/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a log in the terminal
    Play {
        /// Operation log (JSON)
        log: PathBuf,
        /// Apply every step without animation
        #[arg(long)]
        no_animate: bool,
        /// Write logs here while the player owns the screen
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Replay a log headlessly and print every frame
    Trace {
        log: PathBuf,
        /// Emit one JSON document instead of text
        #[arg(long)]
        json: bool,
    },
    /// Pretty-print the operations of a log
    Print { log: PathBuf },
    /// Write a sample log
    Demo {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Where log output goes for this invocation
enum LogSink {
    Stderr,
    File(PathBuf),
    /// The terminal is in use and no file was given
    Off,
}

fn init_logging(level: &str, sink: LogSink) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (stderr_layer, file_layer) = match sink {
        LogSink::Stderr => (
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogSink::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            (
                None,
                Some(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                ),
            )
        }
        LogSink::Off => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let sink = match &cli.command {
        Commands::Play { log_file: Some(path), .. } => LogSink::File(path.clone()),
        Commands::Play { .. } => LogSink::Off,
        _ => LogSink::Stderr,
    };
    init_logging(&config.general.log_level, sink)?;

    match cli.command {
        Commands::Play {
            log, no_animate, ..
        } => commands::play::run(&config, &log, no_animate).await,
        Commands::Trace { log, json } => commands::trace::run(&config, &log, json).await,
        Commands::Print { log } => commands::print::run(&log),
        Commands::Demo { output } => commands::demo::run(output.as_deref()),
    }
}
