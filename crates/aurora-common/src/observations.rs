//! Wire types for raw aurora observation sets.
//!
//! The upstream feed delivers one JSON record per batch:
//! `{"coordinates": [[lon, lat, intensity], ...]}`. Tuples are validated
//! into typed samples before any numeric work; an intensity of zero is a
//! legitimate "no observation" marker, not an error, and is filtered later
//! in the gridding pipeline.

use serde::{Deserialize, Serialize};

use crate::{AuroraError, AuroraResult};

/// One validated aurora observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Longitude in degrees, [-180, 180]
    pub lon: f64,
    /// Latitude in degrees, [-90, 90]
    pub lat: f64,
    /// Observed intensity, dimensionless
    pub intensity: f64,
}

/// Raw observation record as delivered by the upstream data feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationSet {
    /// Ordered (lon, lat, intensity) tuples
    pub coordinates: Vec<[f64; 3]>,
}

impl ObservationSet {
    /// Parse a raw JSON record.
    ///
    /// Any shape other than a `coordinates` field of 3-element numeric
    /// tuples is a malformed input.
    pub fn parse(bytes: &[u8]) -> AuroraResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Validate every tuple and convert to typed samples.
    ///
    /// Range and finiteness violations are reported here, before
    /// interpolation can turn them into an obscure numeric failure.
    pub fn samples(&self) -> AuroraResult<Vec<Sample>> {
        self.coordinates
            .iter()
            .enumerate()
            .map(|(index, &[lon, lat, intensity])| {
                if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
                    return Err(AuroraError::malformed_sample(
                        index,
                        format!("longitude {} out of [-180, 180]", lon),
                    ));
                }
                if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
                    return Err(AuroraError::malformed_sample(
                        index,
                        format!("latitude {} out of [-90, 90]", lat),
                    ));
                }
                if !intensity.is_finite() {
                    return Err(AuroraError::malformed_sample(
                        index,
                        format!("intensity {} is not finite", intensity),
                    ));
                }
                Ok(Sample {
                    lon,
                    lat,
                    intensity,
                })
            })
            .collect()
    }

    /// Number of raw tuples in the record.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Check if the record holds no tuples.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}
