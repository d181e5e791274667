//! Delaunay triangulation of scattered sample locations.
//!
//! Bowyer-Watson incremental insertion: points are added one at a time
//! into a triangulation seeded with a synthetic super-triangle large enough
//! to enclose every input point. Each insertion removes the triangles whose
//! circumcircle contains the new point and re-triangulates the resulting
//! cavity. Triangles still touching a super-triangle vertex at the end are
//! discarded, so a fully collinear input yields an empty triangulation.

/// A 2D point in lon/lat degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A triangle as indices into the input point slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    fn has_edge(&self, edge: (usize, usize)) -> bool {
        let (p, q) = edge;
        let edges = [(self.a, self.b), (self.b, self.c), (self.c, self.a)];
        edges
            .iter()
            .any(|&(u, v)| (u == p && v == q) || (u == q && v == p))
    }
}

/// Triangulate a set of distinct points.
///
/// Returns an empty vec for fewer than 3 points or for degenerate
/// (collinear) input. Callers must collapse duplicate locations first.
pub fn triangulate(points: &[Point]) -> Vec<Triangle> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut verts = points.to_vec();

    // Super-triangle enclosing the input extent with a wide margin
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    // The margin must keep the synthetic vertices outside the circumcircle
    // of every real triangle; near-collinear triples over a global extent
    // produce circumradii in the tens of thousands of degrees.
    let span = (max_x - min_x).max(max_y - min_y).max(1.0);
    let margin = 1000.0 * span;
    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;
    verts.push(Point {
        x: cx - margin,
        y: cy - span,
    });
    verts.push(Point {
        x: cx + margin,
        y: cy - span,
    });
    verts.push(Point {
        x: cx,
        y: cy + margin,
    });

    let mut triangles = vec![Triangle {
        a: n,
        b: n + 1,
        c: n + 2,
    }];

    for p in 0..n {
        let point = verts[p];

        // Triangles invalidated by the new point
        let bad: Vec<usize> = triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| circumcircle_contains(verts[t.a], verts[t.b], verts[t.c], point))
            .map(|(ti, _)| ti)
            .collect();

        // Cavity boundary: edges belonging to exactly one invalidated triangle
        let mut boundary: Vec<(usize, usize)> = Vec::new();
        for &ti in &bad {
            let t = triangles[ti];
            for edge in [(t.a, t.b), (t.b, t.c), (t.c, t.a)] {
                let shared = bad
                    .iter()
                    .any(|&tj| tj != ti && triangles[tj].has_edge(edge));
                if !shared {
                    boundary.push(edge);
                }
            }
        }

        // bad is ascending, so removing back-to-front keeps indices valid
        for &ti in bad.iter().rev() {
            triangles.swap_remove(ti);
        }
        for (e0, e1) in boundary {
            triangles.push(Triangle { a: e0, b: e1, c: p });
        }
    }

    triangles.retain(|t| t.a < n && t.b < n && t.c < n);
    triangles
}

/// Test whether `p` lies strictly inside the circumcircle of (a, b, c).
fn circumcircle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    // The determinant's sign convention assumes counter-clockwise order
    let (b, c) = if orient2d(a, b, c) < 0.0 { (c, b) } else { (b, c) };

    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);

    det > 0.0
}

/// Twice the signed area of the triangle (a, b, c); positive when
/// counter-clockwise.
fn orient2d(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
