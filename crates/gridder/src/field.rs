//! North-up intensity fields.

use aurora_common::GridSpec;

/// A gridded intensity field in raster orientation.
///
/// Row 0 is the northernmost latitude band, column 0 the westernmost
/// longitude band, row-major; NaN marks cells with no estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl IntensityField {
    /// Reorient a scan-order field (south-to-north rows) to raster order.
    ///
    /// Scan row j holds latitude `first_lat + j * dy`, so raster row r
    /// reads scan row `height - 1 - r`; columns already run west to east.
    pub fn from_scan_order(scan: Vec<f32>, grid: &GridSpec) -> Self {
        debug_assert_eq!(scan.len(), grid.len());
        let width = grid.nx;
        let height = grid.ny;

        let mut data = Vec::with_capacity(scan.len());
        for r in 0..height {
            let j = height - 1 - r;
            data.extend_from_slice(&scan[j * width..(j + 1) * width]);
        }

        Self {
            width,
            height,
            data,
        }
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at a raster position.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Raw row-major values, north-up.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Count of cells holding a valid estimate.
    pub fn valid_cells(&self) -> usize {
        self.data.iter().filter(|v| !v.is_nan()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_scan_rows_to_north_up() {
        let grid = GridSpec::new(3, 2, 1.0, 1.0, 0.0, 0.0);
        // Scan order: southern row first
        let scan = vec![
            1.0, 2.0, 3.0, // j = 0 (south)
            4.0, 5.0, 6.0, // j = 1 (north)
        ];

        let field = IntensityField::from_scan_order(scan, &grid);
        assert_eq!(field.width(), 3);
        assert_eq!(field.height(), 2);

        // Raster row 0 is the northern row
        assert_eq!(field.get(0, 0), 4.0);
        assert_eq!(field.get(0, 2), 6.0);
        assert_eq!(field.get(1, 0), 1.0);
        assert_eq!(field.data(), &[4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn counts_valid_cells() {
        let grid = GridSpec::new(2, 2, 1.0, 1.0, 0.0, 0.0);
        let scan = vec![1.0, f32::NAN, f32::NAN, 2.0];
        let field = IntensityField::from_scan_order(scan, &grid);
        assert_eq!(field.valid_cells(), 2);
    }
}
