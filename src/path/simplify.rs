use crate::foundation::core::Point;
use crate::foundation::math::distance;

/// Tolerance used when laying text along a stroke.
pub const PATH_TEXT_TOLERANCE: f64 = 5.0;

/// Greedy single-pass point reduction.
///
/// Keeps the first and last point, plus every intermediate point farther than `tolerance` from the
/// last point kept so far. Distances are measured from the last *retained* point, not from the
/// original predecessor. Inputs of two points or fewer are returned unchanged.
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len());
    let mut kept = points[0];
    out.push(kept);

    for &p in &points[1..points.len() - 1] {
        if distance(kept.x, kept.y, p.x, p.y) > tolerance {
            out.push(p);
            kept = p;
        }
    }

    out.push(points[points.len() - 1]);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/path/simplify.rs"]
mod tests;
