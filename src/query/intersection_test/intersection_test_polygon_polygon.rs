use na::Unit;

use crate::math::{Point, Real};
use crate::query::gjk::{GJKResult, GjkOptions, Simplex};
use crate::query::intersection_test::intersection_test_support_map_support_map_with_params;
use crate::shape::ConvexPolygon;

/// Intersection test between two convex polygons.
///
/// The search starts along the direction from the center of `poly1` toward the center of
/// `poly2`, which ends the test after two support points for most disjoint pairs.
pub fn intersection_test_polygon_polygon(
    poly1: &ConvexPolygon,
    poly2: &ConvexPolygon,
    options: &GjkOptions,
) -> bool {
    intersection_test_polygon_polygon_with_params(poly1, poly2, &mut Simplex::new(), options)
        .intersects()
}

/// Intersection test between two convex polygons, returning the full GJK result.
///
/// The final state of the simplex is written to `simplex`.
pub fn intersection_test_polygon_polygon_with_params(
    poly1: &ConvexPolygon,
    poly2: &ConvexPolygon,
    simplex: &mut Simplex,
    options: &GjkOptions,
) -> GJKResult {
    let init_dir = Unit::try_new(poly2.center() - poly1.center(), 0.0);
    intersection_test_support_map_support_map_with_params(poly1, poly2, simplex, init_dir, options)
}

/// Tests whether the convex hulls of two point sets intersect.
///
/// Touching counts as intersecting. An empty point set never intersects anything.
///
/// The points of each set may be given in any order. Convexity is not checked: a non-convex
/// polygon behaves as its convex hull.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use gjk2d::math::Point;
/// use gjk2d::query::intersects;
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let touching = [Point::new(1.0, 1.0), Point::new(2.0, 1.0), Point::new(2.0, 2.0)];
/// let far = [Point::new(5.0, 5.0), Point::new(6.0, 5.0), Point::new(6.0, 6.0)];
///
/// assert!(intersects(&square, &touching));
/// assert!(!intersects(&square, &far));
/// assert!(!intersects(&square, &[]));
/// # }
/// ```
pub fn intersects(points1: &[Point<Real>], points2: &[Point<Real>]) -> bool {
    intersects_with_options(points1, points2, &GjkOptions::default())
}

/// Same as [`intersects`] but with custom GJK options.
pub fn intersects_with_options(
    points1: &[Point<Real>],
    points2: &[Point<Real>],
    options: &GjkOptions,
) -> bool {
    match (
        ConvexPolygon::from_slice(points1),
        ConvexPolygon::from_slice(points2),
    ) {
        (Some(poly1), Some(poly2)) => intersection_test_polygon_polygon(&poly1, &poly2, options),
        _ => false,
    }
}
