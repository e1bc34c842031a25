use anyhow::{Context as AnyhowContext, Result};
use bouquet_core::{BouquetError, ProcessorConfig, RunStats};
use clap::Parser;
use std::fs;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

mod flags;

use flags::PolicyFlag;

#[derive(Parser)]
#[command(name = "bouquets")]
#[command(about = "Assemble bouquets from a stream of flowers", long_about = None)]
#[command(version)]
struct Cli {
    /// Read specifications and arrivals from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// TOML file with processor settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of arrival records (overrides BOUQUET_STORAGE_CAPACITY)
    #[arg(long)]
    storage_capacity: Option<usize>,

    /// Abort on any malformed line
    #[arg(long)]
    strict: bool,

    /// Policy for malformed specification lines
    #[arg(long, value_enum, conflicts_with = "strict")]
    on_malformed_spec: Option<PolicyFlag>,

    /// Policy for malformed arrival lines
    #[arg(long, value_enum, conflicts_with = "strict")]
    on_malformed_arrival: Option<PolicyFlag>,

    /// Print run statistics as JSON on stderr
    #[arg(long)]
    stats: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only errors (stdout is reserved for bouquets)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = resolve_config(&cli)?;
    log::debug!("Processor config: {config:?}");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = match &cli.input {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            bouquet_core::run(BufReader::new(file), &mut out, &config)
        }
        None => bouquet_core::run(io::stdin().lock(), &mut out, &config),
    };

    match result {
        Ok(stats) => {
            out.flush().context("Failed to flush output")?;
            if cli.stats {
                print_stats(&stats)?;
            }
            Ok(())
        }
        Err(err @ BouquetError::StorageExhausted { .. }) => {
            writeln!(out, "{err}").context("Failed to write diagnostic")?;
            out.flush().context("Failed to flush output")?;
            drop(out);
            std::process::exit(1);
        }
        Err(err) => {
            out.flush().context("Failed to flush output")?;
            Err(err).context("Bouquet run failed")
        }
    }
}

/// File settings, then environment, then flags
fn resolve_config(cli: &Cli) -> Result<ProcessorConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProcessorConfig::default(),
    }
    .with_env_overrides();

    if cli.strict {
        let strict = ProcessorConfig::strict();
        config.on_malformed_spec = strict.on_malformed_spec;
        config.on_malformed_arrival = strict.on_malformed_arrival;
    }
    if let Some(policy) = cli.on_malformed_spec {
        config.on_malformed_spec = policy.as_domain();
    }
    if let Some(policy) = cli.on_malformed_arrival {
        config.on_malformed_arrival = policy.as_domain();
    }
    if let Some(capacity) = cli.storage_capacity {
        config.storage_capacity = capacity;
    }

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid processor configuration")?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<ProcessorConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse config {}", path.display()))
}

fn print_stats(stats: &RunStats) -> Result<()> {
    let json = serde_json::to_string(stats).context("Failed to serialize stats")?;
    let stderr = io::stderr();
    let mut err = stderr.lock();
    writeln!(err, "{json}")?;
    Ok(())
}
