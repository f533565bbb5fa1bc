use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// This is the point maximizing its dot product with `dir`. If several points reach the maximum,
/// the first one (in slice order) is selected.
///
/// Returns `None` if `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<usize> {
    let (first, rest) = points.split_first()?;
    let mut best_pt = 0;
    let mut best_dot = first.coords.dot(dir);

    for (i, p) in rest.iter().enumerate() {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i + 1;
        }
    }

    Some(best_pt)
}

/// Computes the support point of a cloud of points.
///
/// Returns `None` if `points` is empty.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<Point<Real>> {
    point_cloud_support_point_id(dir, points).map(|i| points[i])
}
