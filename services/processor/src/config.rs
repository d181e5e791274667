//! Processor configuration.

use anyhow::{Context, Result};
use std::env;

use storage::ObjectStorageConfig;

/// Top-level processor configuration.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Object storage configuration
    pub storage: ObjectStorageConfig,

    /// Prefix holding raw observation uploads
    pub raw_prefix: String,

    /// Prefix receiving gridded GeoTIFF products
    pub gridded_prefix: String,

    /// Polling interval (seconds)
    pub poll_interval_secs: u64,
}

impl ProcessorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let storage = ObjectStorageConfig {
            endpoint: env::var("S3_ENDPOINT").unwrap_or_else(|_| "http://minio:9000".to_string()),
            bucket: env::var("S3_BUCKET").unwrap_or_else(|_| "aurora-explorer-data".to_string()),
            access_key_id: env::var("S3_ACCESS_KEY").unwrap_or_else(|_| "minioadmin".to_string()),
            secret_access_key: env::var("S3_SECRET_KEY")
                .unwrap_or_else(|_| "minioadmin".to_string()),
            region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            allow_http: env::var("S3_ALLOW_HTTP")
                .map(|v| v == "true")
                .unwrap_or(true),
        };

        let raw_prefix =
            env::var("AURORA_RAW_PREFIX").unwrap_or_else(|_| "aurora-data-raw/".to_string());
        let gridded_prefix = env::var("AURORA_GRIDDED_PREFIX")
            .unwrap_or_else(|_| "aurora_intensity_gridded_tiffs/".to_string());

        let poll_interval_secs = match env::var("POLL_INTERVAL_SECS") {
            Ok(v) => v
                .parse()
                .context("POLL_INTERVAL_SECS must be an integer")?,
            Err(_) => 3600,
        };

        Ok(Self {
            storage,
            raw_prefix,
            gridded_prefix,
            poll_interval_secs,
        })
    }
}
