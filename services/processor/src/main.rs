//! Aurora intensity processor service.
//!
//! Polls object storage for the latest raw aurora observation set, grids
//! it into a georeferenced intensity raster, and uploads the GeoTIFF
//! product under a timestamped key.

mod config;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::ProcessorConfig;
use pipeline::ProcessorPipeline;

#[derive(Parser, Debug)]
#[command(name = "processor")]
#[command(about = "Gridded aurora intensity processor")]
struct Args {
    /// Run once and exit (vs continuous polling)
    #[arg(long)]
    once: bool,

    /// Override the polling interval in seconds
    #[arg(long)]
    interval_secs: Option<u64>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting aurora intensity processor");

    // Load configuration
    let mut config = ProcessorConfig::from_env()?;
    if let Some(secs) = args.interval_secs {
        config.poll_interval_secs = secs;
    }
    info!(
        bucket = %config.storage.bucket,
        raw_prefix = %config.raw_prefix,
        gridded_prefix = %config.gridded_prefix,
        "Loaded configuration"
    );

    let pipeline = ProcessorPipeline::new(&config)?;

    if args.once {
        info!("Running single processing cycle");
        match pipeline.run_once().await? {
            Some(key) => info!(key = %key, "Processing cycle complete"),
            None => info!("No observation data available"),
        }
    } else {
        info!("Starting continuous polling");
        pipeline.run_forever().await?;
    }

    Ok(())
}
