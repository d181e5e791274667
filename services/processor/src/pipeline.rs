//! Fetch -> grid -> upload processing cycle.

use anyhow::Result;
use chrono::Utc;
use tracing::{error, info, warn};

use gridder::build_intensity_raster;
use storage::{fetch_latest_observations, upload_raster, AuroraPath, ObjectStorage};

use crate::config::ProcessorConfig;

/// Batch pipeline for gridded aurora intensity products.
pub struct ProcessorPipeline {
    config: ProcessorConfig,
    storage: ObjectStorage,
}

impl ProcessorPipeline {
    /// Create a new processing pipeline.
    pub fn new(config: &ProcessorConfig) -> Result<Self> {
        let storage = ObjectStorage::new(&config.storage)?;
        Ok(Self {
            config: config.clone(),
            storage,
        })
    }

    /// Run one fetch -> grid -> upload cycle.
    ///
    /// Returns the uploaded object key, or None when no observation data
    /// was available under the raw prefix.
    pub async fn run_once(&self) -> Result<Option<String>> {
        let Some((source_key, observations)) =
            fetch_latest_observations(&self.storage, &self.config.raw_prefix).await?
        else {
            warn!(prefix = %self.config.raw_prefix, "No observation data found");
            return Ok(None);
        };

        info!(
            source = %source_key,
            samples = observations.len(),
            "Processing observation set"
        );

        let raster = build_intensity_raster(&observations)?;

        let target_key = AuroraPath::gridded_raster(&self.config.gridded_prefix, Utc::now());
        upload_raster(&self.storage, &target_key, raster).await?;

        Ok(Some(target_key))
    }

    /// Run the processing loop forever.
    ///
    /// A failed cycle is logged and the loop keeps going: every cycle is an
    /// independent, stateless computation, so re-running the next cycle is
    /// the only retry.
    pub async fn run_forever(&self) -> Result<()> {
        loop {
            info!("Starting processing cycle");

            match self.run_once().await {
                Ok(Some(key)) => info!(key = %key, "Processing cycle complete"),
                Ok(None) => {}
                Err(e) => error!(error = %e, "Processing cycle failed"),
            }

            info!(
                interval_secs = self.config.poll_interval_secs,
                "Sleeping until next cycle"
            );
            tokio::time::sleep(std::time::Duration::from_secs(
                self.config.poll_interval_secs,
            ))
            .await;
        }
    }
}
