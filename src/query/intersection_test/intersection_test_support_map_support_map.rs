use na::Unit;

use crate::math::{Real, Vector};
use crate::query::gjk::{self, GJKResult, GjkOptions, Simplex};
use crate::shape::SupportMap;

/// Intersection test between support-mapped shapes (convex polygons, points, etc.)
pub fn intersection_test_support_map_support_map<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &GjkOptions,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    intersection_test_support_map_support_map_with_params(
        g1,
        g2,
        &mut Simplex::new(),
        None,
        options,
    )
    .intersects()
}

/// Intersection test between support-mapped shapes (convex polygons, points, etc.)
///
/// This allows a more fine grained control over the underlying GJK algorithm.
/// The initial search direction defaults to the x axis.
pub fn intersection_test_support_map_support_map_with_params<G1, G2>(
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
    init_dir: Option<Unit<Vector<Real>>>,
    options: &GjkOptions,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let dir = init_dir.unwrap_or_else(Vector::x_axis);
    gjk::intersect(g1, g2, &dir, simplex, options)
}
