//! `tantalize`: ticket batch generator and QR image renderer.
//!
//! `generate` writes a CSV of fresh tickets, `render` turns that CSV into
//! one transparent PNG per ticket, `verify` checks a CSV for consistency.
//! The steps share nothing but the CSV file.

use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tantalize_core::{
    load_config, load_config_or_default, read_batch, validate_config, verify_batch, write_batch,
    Config, QrRenderer, TicketGenerator, UuidIdGenerator,
};

/// Config file used when `--config` is not given; may be absent.
const DEFAULT_CONFIG_PATH: &str = "tantalize.toml";

/// Event ticket generator and QR renderer.
#[derive(Parser, Debug)]
#[command(name = "tantalize", version, about = "Event ticket generator and QR renderer")]
struct Cli {
    /// Path to config file (default: ./tantalize.toml, optional).
    #[arg(long = "config", global = true, env = "TANTALIZE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a fresh ticket batch CSV, overwriting any existing one.
    Generate {
        /// Number of tickets.
        #[arg(long)]
        count: Option<u32>,
        /// Prefix of every ticket link.
        #[arg(long)]
        base_url: Option<String>,
        /// CSV file to write.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render one transparent QR PNG per ticket in the batch CSV.
    Render {
        /// Batch CSV to read.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Directory receiving `{ID}.png` files.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Check a batch CSV for malformed IDs, duplicates, bad links and serial gaps.
    Verify {
        /// Batch CSV to read.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            count,
            base_url,
            output,
        } => {
            if let Some(count) = count {
                config.tickets.total_count = count;
            }
            if let Some(base_url) = base_url {
                config.tickets.base_url = base_url;
            }
            if let Some(output) = output {
                config.paths.csv_path = output;
            }
            validate_config(&config).context("Configuration validation failed")?;
            generate(&config)
        }
        Commands::Render { input, output_dir } => {
            if let Some(input) = input {
                config.paths.csv_path = input;
            }
            if let Some(output_dir) = output_dir {
                config.paths.output_dir = output_dir;
            }
            validate_config(&config).context("Configuration validation failed")?;
            render(&config)
        }
        Commands::Verify { input } => {
            if let Some(input) = input {
                config.paths.csv_path = input;
            }
            validate_config(&config).context("Configuration validation failed")?;
            verify(&config)
        }
    }
}

/// An explicitly requested config file must exist; the default one may not.
fn load(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(path).with_context(|| format!("Failed to load config from {:?}", path))?
        }
        None => load_config_or_default(Path::new(DEFAULT_CONFIG_PATH))
            .with_context(|| format!("Failed to load config from {:?}", DEFAULT_CONFIG_PATH))?,
    };
    Ok(config)
}

fn generate(config: &Config) -> Result<()> {
    let path = &config.paths.csv_path;
    info!("Generating {} tickets...", config.tickets.total_count);

    let mut generator = TicketGenerator::new(config.tickets.clone(), UuidIdGenerator);
    let tickets = generator.generate().context("Failed to generate tickets")?;
    write_batch(path, &tickets).with_context(|| format!("Failed to write {:?}", path))?;

    info!(
        "Success! {:?} created with {} unique codes.",
        path,
        tickets.len()
    );
    Ok(())
}

fn render(config: &Config) -> Result<()> {
    let renderer = QrRenderer::new(config.render.clone());
    renderer.render_batch(&config.paths.csv_path, &config.paths.output_dir)?;
    Ok(())
}

fn verify(config: &Config) -> Result<()> {
    let path = &config.paths.csv_path;
    ensure!(
        path.is_file(),
        "{} not found. Please run `tantalize generate` first.",
        path.display()
    );

    let tickets = read_batch(path).with_context(|| format!("Failed to read {:?}", path))?;
    let report = verify_batch(&tickets, &config.tickets.base_url);
    for issue in &report.issues {
        warn!("{}", issue);
    }

    if !report.is_clean() {
        bail!(
            "{} issue(s) found in {} rows of {:?}",
            report.issues.len(),
            report.rows,
            path
        );
    }
    info!("{:?} is consistent ({} rows).", path, report.rows);
    Ok(())
}
