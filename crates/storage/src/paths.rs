//! Storage layout for aurora data objects.

use chrono::{DateTime, Utc};

/// Path builder for consistent storage layout.
///
/// Prefixes are configuration values and include their trailing slash.
pub struct AuroraPath;

impl AuroraPath {
    /// Build the key for a gridded intensity raster.
    /// Format: {prefix}aurora_intensity_{YYYYMMDDHHMMSS}.tif
    pub fn gridded_raster(prefix: &str, timestamp: DateTime<Utc>) -> String {
        format!(
            "{}aurora_intensity_{}.tif",
            prefix,
            timestamp.format("%Y%m%d%H%M%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn gridded_raster_key_format() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(
            AuroraPath::gridded_raster("aurora_intensity_gridded_tiffs/", ts),
            "aurora_intensity_gridded_tiffs/aurora_intensity_20240301123005.tif"
        );
    }
}
