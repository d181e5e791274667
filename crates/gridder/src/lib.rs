//! Gridded aurora intensity rasters from sparse observations.
//!
//! A pure, synchronous transform: validate the raw observation record,
//! drop no-signal samples, triangulate the remaining locations, linearly
//! interpolate onto the fixed 1-degree global lattice, reorient north-up,
//! and encode as an in-memory GeoTIFF. The same input always produces a
//! byte-identical raster.

pub mod delaunay;
pub mod field;
pub mod geotiff;
pub mod interpolate;

use std::collections::HashSet;

use bytes::Bytes;
use tracing::{debug, info};

use aurora_common::{
    global_one_degree, AuroraError, AuroraResult, BoundingBox, ObservationSet, Sample,
};

use delaunay::Point;
pub use field::IntensityField;

/// Build the georeferenced intensity raster for one observation set.
///
/// Fails with `MalformedSample` on out-of-range coordinates or non-finite
/// values, and with `InsufficientSamples` when fewer than three usable
/// sample locations span a triangle (the degenerate-input policy: no
/// all-nodata raster is ever produced).
pub fn build_intensity_raster(observations: &ObservationSet) -> AuroraResult<Bytes> {
    let samples = observations.samples()?;
    let usable = usable_samples(&samples);
    debug!(
        total = samples.len(),
        usable = usable.len(),
        "Filtered observation set"
    );

    let points: Vec<Point> = usable
        .iter()
        .map(|s| Point { x: s.lon, y: s.lat })
        .collect();
    let values: Vec<f64> = usable.iter().map(|s| s.intensity).collect();

    let triangles = delaunay::triangulate(&points);
    if triangles.is_empty() {
        return Err(AuroraError::InsufficientSamples {
            usable: usable.len(),
        });
    }

    let grid = global_one_degree();
    let scan = interpolate::interpolate_field(&points, &values, &triangles, &grid);
    let field = IntensityField::from_scan_order(scan, &grid);

    let extent = BoundingBox::from_points(usable.iter().map(|s| (s.lon, s.lat)));
    info!(
        samples = usable.len(),
        triangles = triangles.len(),
        valid_cells = field.valid_cells(),
        extent = ?extent,
        "Interpolated intensity field"
    );

    geotiff::encode(&field)
}

/// Samples that carry signal: positive intensity, duplicate locations
/// collapsed (first occurrence wins, keeping the result deterministic).
fn usable_samples(samples: &[Sample]) -> Vec<Sample> {
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    samples
        .iter()
        .filter(|s| s.intensity > 0.0)
        .filter(|s| seen.insert((s.lon.to_bits(), s.lat.to_bits())))
        .copied()
        .collect()
}
