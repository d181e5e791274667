//! Piecewise-linear interpolation of scattered samples onto the lattice.
//!
//! Each Delaunay triangle is rasterized over the evaluation points inside
//! its bounding box and filled with barycentric weights. Evaluation points
//! outside the convex hull of the samples belong to no triangle and keep
//! the NaN sentinel; there is no extrapolation.

use aurora_common::GridSpec;

use crate::delaunay::{Point, Triangle};

// Barycentric tolerance admitting points that sit exactly on a triangle
// edge or vertex.
const EDGE_EPS: f64 = 1e-9;

/// Interpolate sample values onto every lattice evaluation point.
///
/// Output is in lattice scan order (west-to-east, south-to-north), one
/// value per grid point, NaN where no estimate exists. `points` and
/// `values` are parallel slices; `triangles` indexes into them.
pub fn interpolate_field(
    points: &[Point],
    values: &[f64],
    triangles: &[Triangle],
    grid: &GridSpec,
) -> Vec<f32> {
    let mut field = vec![f32::NAN; grid.len()];

    for tri in triangles {
        let (a, b, c) = (points[tri.a], points[tri.b], points[tri.c]);

        let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
        if denom.abs() < f64::EPSILON {
            // Degenerate sliver, contributes no area
            continue;
        }

        let min_x = a.x.min(b.x).min(c.x);
        let max_x = a.x.max(b.x).max(c.x);
        let min_y = a.y.min(b.y).min(c.y);
        let max_y = a.y.max(b.y).max(c.y);

        let Some((i0, i1)) = grid.lon_range(min_x, max_x) else {
            continue;
        };
        let Some((j0, j1)) = grid.lat_range(min_y, max_y) else {
            continue;
        };

        for j in j0..=j1 {
            let lat = grid.lat(j);
            for i in i0..=i1 {
                let lon = grid.lon(i);

                let wa = ((b.y - c.y) * (lon - c.x) + (c.x - b.x) * (lat - c.y)) / denom;
                let wb = ((c.y - a.y) * (lon - c.x) + (a.x - c.x) * (lat - c.y)) / denom;
                let wc = 1.0 - wa - wb;

                if wa < -EDGE_EPS || wb < -EDGE_EPS || wc < -EDGE_EPS {
                    continue;
                }

                let value = wa * values[tri.a] + wb * values[tri.b] + wc * values[tri.c];
                field[grid.flat_index(i, j)] = value as f32;
            }
        }
    }

    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delaunay::triangulate;
    use aurora_common::global_one_degree;

    fn pt(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn constant_samples_interpolate_exactly() {
        let points = [pt(-180.0, 90.0), pt(180.0, -90.0), pt(0.0, 1.0)];
        let values = [7.0, 7.0, 7.0];
        let triangles = triangulate(&points);
        assert!(!triangles.is_empty());

        let grid = global_one_degree();
        let field = interpolate_field(&points, &values, &triangles, &grid);

        // Barycentric weights sum to one, so a constant function is exact
        let covered: Vec<f32> = field.iter().copied().filter(|v| !v.is_nan()).collect();
        assert!(!covered.is_empty());
        assert!(covered.iter().all(|&v| v == 7.0));
    }

    #[test]
    fn sample_locations_reproduce_their_values() {
        // Samples placed exactly on evaluation points
        let points = [pt(-10.0, 60.0), pt(30.0, 60.0), pt(10.0, 80.0)];
        let values = [2.0, 4.0, 6.0];
        let triangles = triangulate(&points);
        let grid = global_one_degree();
        let field = interpolate_field(&points, &values, &triangles, &grid);

        for (p, v) in points.iter().zip(values) {
            let (i, _) = grid.lon_range(p.x, p.x).unwrap();
            let (j, _) = grid.lat_range(p.y, p.y).unwrap();
            assert_eq!(field[grid.flat_index(i, j)], v as f32);
        }
    }

    #[test]
    fn out_of_hull_points_stay_nan() {
        let points = [pt(-10.0, 60.0), pt(10.0, 60.0), pt(0.0, 70.0)];
        let values = [1.0, 1.0, 1.0];
        let triangles = triangulate(&points);
        let grid = global_one_degree();
        let field = interpolate_field(&points, &values, &triangles, &grid);

        // Antipodal to the hull
        let (i, _) = grid.lon_range(170.0, 170.0).unwrap();
        let (j, _) = grid.lat_range(-60.0, -60.0).unwrap();
        assert!(field[grid.flat_index(i, j)].is_nan());

        // Just outside the hull's bounding box
        let (i, _) = grid.lon_range(-12.0, -12.0).unwrap();
        let (j, _) = grid.lat_range(60.0, 60.0).unwrap();
        assert!(field[grid.flat_index(i, j)].is_nan());
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        let points = [pt(-20.0, 50.0), pt(20.0, 50.0), pt(0.0, 80.0)];
        let values = [0.0, 10.0, 0.0];
        let triangles = triangulate(&points);
        let grid = global_one_degree();
        let field = interpolate_field(&points, &values, &triangles, &grid);

        // (0, 50) is the midpoint of the 0..10 edge
        let (i, _) = grid.lon_range(0.0, 0.0).unwrap();
        let (j, _) = grid.lat_range(50.0, 50.0).unwrap();
        let v = field[grid.flat_index(i, j)];
        assert!((v - 5.0).abs() < 1e-6, "expected 5.0, got {}", v);
    }
}
