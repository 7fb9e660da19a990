//! Smoothed area geometry for blob shapes.

use crate::foundation::core::{BezPath, Point};

const EPSILON: f64 = 1e-12;

/// Closed area under a centripetal Catmull-Rom spline through `points`, filled down to
/// `baseline`.
///
/// The top edge interpolates every point; the ends reuse the first/last point as their missing
/// neighbour. The area is closed by straight edges down to the baseline and back.
pub fn area_path(points: &[Point], baseline: f64) -> BezPath {
    let mut path = BezPath::new();
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return path;
    };

    path.move_to(first);
    append_catmull_rom(&mut path, points);
    path.line_to(Point::new(last.x, baseline));
    path.line_to(Point::new(first.x, baseline));
    path.close_path();
    path
}

/// Open centripetal Catmull-Rom curve through `points`.
pub fn catmull_rom_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some(&first) = points.first() {
        path.move_to(first);
        append_catmull_rom(&mut path, points);
    }
    path
}

/// Appends segments from `points[0]` onward; the current point must already be `points[0]`.
fn append_catmull_rom(path: &mut BezPath, points: &[Point]) {
    match points.len() {
        0 | 1 => {}
        2 => path.line_to(points[1]),
        n => {
            for i in 0..n - 1 {
                let p1 = points[i];
                let p2 = points[i + 1];
                let p0 = if i == 0 { p1 } else { points[i - 1] };
                let p3 = if i + 2 < n { points[i + 2] } else { p2 };
                let (c1, c2) = centripetal_controls(p0, p1, p2, p3);
                path.curve_to(c1, c2, p2);
            }
        }
    }
}

/// Bezier control points for the `p1 -> p2` span of a Catmull-Rom spline with alpha 0.5.
fn centripetal_controls(p0: Point, p1: Point, p2: Point, p3: Point) -> (Point, Point) {
    // l^alpha and l^(2 alpha) for alpha = 0.5
    let l01_2a = p0.distance(p1);
    let l12_2a = p1.distance(p2);
    let l23_2a = p2.distance(p3);
    let l01_a = l01_2a.sqrt();
    let l12_a = l12_2a.sqrt();
    let l23_a = l23_2a.sqrt();

    let mut c1 = p1;
    if l01_a > EPSILON {
        let a = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
        let n = 3.0 * l01_a * (l01_a + l12_a);
        c1 = ((p1.to_vec2() * a - p0.to_vec2() * l12_2a + p2.to_vec2() * l01_2a) / n).to_point();
    }

    let mut c2 = p2;
    if l23_a > EPSILON {
        let b = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
        let m = 3.0 * l23_a * (l23_a + l12_a);
        c2 = ((p2.to_vec2() * b + p1.to_vec2() * l23_2a - p3.to_vec2() * l12_2a) / m).to_point();
    }

    (c1, c2)
}

#[cfg(test)]
#[path = "../../tests/unit/render/curve.rs"]
mod tests;
