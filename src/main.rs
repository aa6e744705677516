//! Weight Tracker CLI
//!
//! Command-line interface for the weight log:
//! - Add entries
//! - Show statistics and the trend chart
//! - Export entries
//! - Interactive shell

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weight_tracker::config::{generate_default_config, Config, ConfigLoad, LoggingConfig};
use weight_tracker::shell;
use weight_tracker::storage::{EntryStore, FileStore};
use weight_tracker::tracker::{AddOutcome, Panel, TextChart, Tracker};
use weight_tracker::ExportFormat;

#[derive(Parser)]
#[command(name = "weight-tracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track your body weight by date")]
#[command(long_about = "Weight Tracker logs body-weight measurements by date.\nTrack your weekly progress and crush your goals.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: platform config dir, then ./weight-tracker.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a weight entry
    Add {
        /// Weight value
        weight: String,
        /// Date of the measurement (default: today), YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show statistics and the weight chart
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },

    /// List all entries
    List,

    /// Export entries
    Export {
        /// Output format (csv, json, ndjson)
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive session
    Shell,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Statistics row and chart
    Text,
    /// The view snapshot as JSON
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => ConfigLoad::from_file(path)?,
        None => Config::load_default(),
    };
    let mut config = loaded.config.clone();
    if let Some(data_dir) = &cli.data_dir {
        config.storage.data_dir = data_dir.to_string_lossy().to_string();
    }

    init_logging(&config.logging);
    loaded.log();
    tracing::debug!("Weight Tracker v{}", env!("CARGO_PKG_VERSION"));

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let data_dir = config.storage.data_path();
    tracing::debug!("Data directory: {:?}", data_dir);
    let store = EntryStore::with_key(FileStore::open(data_dir.clone())?, config.storage.key.clone());
    let mut tracker = Tracker::open(store, config.tracker_options())?;

    let chart = TextChart::new(config.display.chart_height);
    let unit = config.display.unit.as_str();
    let panel = Panel::new(&chart, unit);

    match cli.command {
        Commands::Add { weight, date } => {
            if let Some(date) = date {
                tracker.set_date(date);
            }
            tracker.set_weight(weight);

            match tracker.add_entry()? {
                AddOutcome::Added(entry) => {
                    println!(
                        "{} ({} {} {})",
                        tracker.status(),
                        entry.iso_date(),
                        entry.weight,
                        unit
                    );
                }
                AddOutcome::Rejected(_) => {
                    eprintln!("{}", tracker.status());
                    std::process::exit(1);
                }
            }
        }

        Commands::Show { format } => match format {
            ShowFormat::Json => println!("{}", serde_json::to_string_pretty(&tracker.view())?),
            ShowFormat::Text => print!("{}", panel.render(&tracker.view())),
        },

        Commands::List => print!("{}", shell::list_entries(&tracker, unit)),

        Commands::Export { format, output } => {
            let format: ExportFormat = format.parse().map_err(anyhow::Error::msg)?;
            let data = weight_tracker::export_entries(tracker.entries(), format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &data)?;
                    println!("Exported {} entries to {:?}", tracker.entries().len(), path);
                }
                None => print!("{}", data),
            }
        }

        Commands::Shell => {
            let input = BufReader::new(tokio::io::stdin());
            shell::run(&mut tracker, &panel, input, tokio::io::stdout()).await?;
        }

        Commands::Config { .. } => unreachable!("handled before opening the store"),
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("weight_tracker={}", config.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries command output
    if config.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
