//! The fixed evaluation lattice for gridded aurora products.

use serde::{Deserialize, Serialize};

use crate::BoundingBox;

/// Number of longitude columns in the global product grid.
pub const GRID_WIDTH: usize = 360;
/// Number of latitude rows in the global product grid.
pub const GRID_HEIGHT: usize = 180;
/// Cell size in degrees, both axes.
pub const CELL_SIZE_DEG: f64 = 1.0;
/// Longitude of the raster origin (west edge).
pub const ORIGIN_LON: f64 = -180.0;
/// Latitude of the raster origin (north edge).
pub const ORIGIN_LAT: f64 = 90.0;

/// Specification of a regular lon/lat evaluation lattice.
///
/// Evaluation points are scanned west-to-east and south-to-north:
/// index (i, j) sits at (first_lon + i * dx, first_lat + j * dy) with
/// positive dx and dy. Raster products flip rows to north-up order
/// before encoding; see `gridder::IntensityField`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of points in the longitude direction
    pub nx: usize,
    /// Number of points in the latitude direction
    pub ny: usize,
    /// Grid resolution in longitude (degrees)
    pub dx: f64,
    /// Grid resolution in latitude (degrees)
    pub dy: f64,
    /// Westernmost evaluation longitude
    pub first_lon: f64,
    /// Southernmost evaluation latitude
    pub first_lat: f64,
}

impl GridSpec {
    /// Create a new grid specification.
    pub fn new(nx: usize, ny: usize, dx: f64, dy: f64, first_lon: f64, first_lat: f64) -> Self {
        Self {
            nx,
            ny,
            dx,
            dy,
            first_lon,
            first_lat,
        }
    }

    /// Longitude of column i.
    pub fn lon(&self, i: usize) -> f64 {
        self.first_lon + i as f64 * self.dx
    }

    /// Latitude of scan row j (south to north).
    pub fn lat(&self, j: usize) -> f64 {
        self.first_lat + j as f64 * self.dy
    }

    /// Column indices whose longitude falls within [min_lon, max_lon].
    pub fn lon_range(&self, min_lon: f64, max_lon: f64) -> Option<(usize, usize)> {
        index_range(min_lon, max_lon, self.first_lon, self.dx, self.nx)
    }

    /// Scan row indices whose latitude falls within [min_lat, max_lat].
    pub fn lat_range(&self, min_lat: f64, max_lat: f64) -> Option<(usize, usize)> {
        index_range(min_lat, max_lat, self.first_lat, self.dy, self.ny)
    }

    /// Get the 1D array index for a 2D scan position.
    pub fn flat_index(&self, i: usize, j: usize) -> usize {
        j * self.nx + i
    }

    /// Total number of evaluation points.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// Check if grid is empty.
    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0
    }

    /// Extent spanned by the evaluation points.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(
            self.first_lon,
            self.first_lat,
            self.lon(self.nx - 1),
            self.lat(self.ny - 1),
        )
    }
}

/// The global 1-degree product lattice.
///
/// Evaluation points run from -180 degrees eastward and from -89 degrees
/// northward up to +90, so that after the north-up flip, raster cell
/// (row, col) is evaluated at exactly (ORIGIN_LON + col, ORIGIN_LAT - row)
/// as pinned by the product's affine transform.
pub fn global_one_degree() -> GridSpec {
    GridSpec::new(
        GRID_WIDTH,
        GRID_HEIGHT,
        CELL_SIZE_DEG,
        CELL_SIZE_DEG,
        ORIGIN_LON,
        ORIGIN_LAT - (GRID_HEIGHT - 1) as f64 * CELL_SIZE_DEG,
    )
}

// Tolerance keeps evaluation points that sit exactly on a range boundary
// from dropping out to float rounding.
fn index_range(min_v: f64, max_v: f64, first: f64, step: f64, n: usize) -> Option<(usize, usize)> {
    const EPS: f64 = 1e-9;

    if n == 0 {
        return None;
    }

    let lo = ((min_v - first) / step - EPS).ceil().max(0.0) as usize;
    let hi_f = ((max_v - first) / step + EPS).floor();
    if hi_f < 0.0 {
        return None;
    }
    let hi = (hi_f as usize).min(n - 1);
    if lo > hi {
        None
    } else {
        Some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_grid_geometry() {
        let grid = global_one_degree();
        assert_eq!(grid.len(), 64_800);
        assert_eq!(grid.lon(0), -180.0);
        assert_eq!(grid.lon(359), 179.0);
        assert_eq!(grid.lat(0), -89.0);
        assert_eq!(grid.lat(179), 90.0);

        let bbox = grid.bbox();
        assert_eq!(bbox.min_lon, -180.0);
        assert_eq!(bbox.max_lat, 90.0);
    }

    #[test]
    fn raster_cell_evaluation_points() {
        // Raster row r reads scan row ny - 1 - r, so cell (row, col) must
        // evaluate at (ORIGIN_LON + col, ORIGIN_LAT - row).
        let grid = global_one_degree();
        for (row, col) in [(0usize, 0usize), (1, 1), (90, 180), (179, 359)] {
            let j = grid.ny - 1 - row;
            assert_eq!(grid.lon(col), ORIGIN_LON + col as f64);
            assert_eq!(grid.lat(j), ORIGIN_LAT - row as f64);
        }
    }

    #[test]
    fn index_ranges_clamp_to_grid() {
        let grid = global_one_degree();

        assert_eq!(grid.lon_range(-180.5, -178.2), Some((0, 1)));
        assert_eq!(grid.lon_range(178.0, 200.0), Some((358, 359)));
        assert_eq!(grid.lon_range(200.0, 210.0), None);
        assert_eq!(grid.lat_range(-95.0, -89.0), Some((0, 0)));
        assert_eq!(grid.lat_range(89.5, 92.0), Some((179, 179)));
    }

    #[test]
    fn index_range_keeps_exact_boundaries() {
        let grid = global_one_degree();

        // A range whose endpoints land exactly on evaluation points keeps
        // both endpoints.
        assert_eq!(grid.lon_range(-179.0, -170.0), Some((1, 10)));
        assert_eq!(grid.lat_range(89.0, 90.0), Some((178, 179)));
    }
}
