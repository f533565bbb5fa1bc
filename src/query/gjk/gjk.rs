//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! # What is GJK?
//!
//! The **Gilbert-Johnson-Keerthi (GJK)** algorithm decides whether two convex shapes overlap
//! using nothing but their support functions.
//!
//! Two shapes `A` and `B` intersect if and only if their **Minkowski difference**
//! `A ⊖ B = { a - b | a ∈ A, b ∈ B }` (also called Configuration Space Obstacle, or CSO)
//! contains the origin. GJK never builds that difference explicitly. Instead it:
//!
//! 1. Grows a simplex (a point, a segment, then a triangle) out of support points of the CSO,
//!    each one queried along a search direction pointing toward the origin.
//! 2. Stops with "no intersection" as soon as a support point fails to reach the origin along
//!    the search direction: the direction is then a separating axis.
//! 3. Stops with "intersection" once the simplex encloses the origin.
//!
//! Contact is boundary-inclusive: shapes sharing a vertex or an edge are reported as
//! intersecting.
//!
//! # Limitations
//!
//! - Only works with **convex shapes**. Non-convex inputs are tested as their convex hull.
//! - Only answers yes or no. No penetration depth, no contact points.
//! - Floating-point degeneracies may, in rare cases, prevent convergence. The number of
//!   iterations is therefore bounded by [`GjkOptions::max_iterations`].

use na::Unit;

use crate::math::{Real, Vector};
use crate::query::gjk::{CSOPoint, Simplex, SimplexUpdate};
use crate::shape::SupportMap;

/// The default bound on the number of GJK iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Results of the GJK intersection test.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum GJKResult {
    /// The shapes are intersecting, or touching.
    Intersection,
    /// The shapes are disjoint.
    ///
    /// The direction is a separating axis: every point of the Minkowski difference has a
    /// negative dot product with it. It is not normalized.
    NoIntersection(Vector<Real>),
    /// The test did not reach a conclusion within [`GjkOptions::max_iterations`] iterations.
    ///
    /// This is treated as "no confirmed intersection" by the boolean queries.
    IterationLimitReached,
}

impl GJKResult {
    /// Whether this result proves that the shapes intersect.
    #[inline]
    pub fn intersects(&self) -> bool {
        matches!(self, GJKResult::Intersection)
    }
}

/// Configuration of the GJK intersection test.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct GjkOptions {
    /// Maximum number of support points computed after the first one.
    ///
    /// Reaching it makes the test return [`GJKResult::IterationLimitReached`].
    pub max_iterations: usize,
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Tests whether two convex shapes intersect using the GJK algorithm.
///
/// Both shapes are expressed in the same coordinate frame.
///
/// # Parameters
///
/// - `g1`, `g2`: the shapes to test. Their Minkowski difference `g1 ⊖ g2` is explored.
/// - `init_dir`: the first search direction. A direction roughly pointing from `g1` toward
///   `g2` (e.g., the difference of their centers) speeds up the disjoint case. Any non-zero
///   direction gives the correct result.
/// - `simplex`: working memory. It is reset at the beginning of the test and left in its final
///   state afterwards; on [`GJKResult::Intersection`] it holds the enclosing feature.
/// - `options`: the iteration bound.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use gjk2d::math::{Point, Vector};
/// use gjk2d::query::gjk::{self, GJKResult, GjkOptions, Simplex};
/// use gjk2d::shape::ConvexPolygon;
/// use gjk2d::na::Unit;
///
/// let square = ConvexPolygon::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ])
/// .unwrap();
/// let far_point = Point::new(3.0, 0.5);
///
/// let mut simplex = Simplex::new();
/// let result = gjk::intersect(
///     &square,
///     &far_point,
///     &Vector::x_axis(),
///     &mut simplex,
///     &GjkOptions::default(),
/// );
///
/// match result {
///     GJKResult::NoIntersection(axis) => assert!(axis.x > 0.0),
///     _ => panic!("The point is outside of the square."),
/// }
/// # }
/// ```
pub fn intersect<G1, G2>(
    g1: &G1,
    g2: &G2,
    init_dir: &Unit<Vector<Real>>,
    simplex: &mut Simplex,
    options: &GjkOptions,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    // The first support point is not tested against `init_dir`: a rounded `init_dir` could
    // reject a contact point lying exactly on the boundary of the CSO.
    simplex.reset(CSOPoint::from_shapes_toward(g1, g2, init_dir));

    let mut dir = match simplex.reduce() {
        SimplexUpdate::OriginEnclosed => return GJKResult::Intersection,
        SimplexUpdate::Search(dir) => dir,
    };

    for _ in 0..options.max_iterations {
        let cso_point = CSOPoint::from_shapes(g1, g2, &dir);

        if cso_point.point.coords.dot(&dir) < 0.0 {
            // The support point did not reach the origin: `dir` separates the shapes.
            return GJKResult::NoIntersection(dir);
        }

        simplex.push_front(cso_point);

        dir = match simplex.reduce() {
            SimplexUpdate::OriginEnclosed => return GJKResult::Intersection,
            SimplexUpdate::Search(dir) => dir,
        };
    }

    log::debug!(
        "GJK: no conclusion after {} iterations, last search direction: {:?}.",
        options.max_iterations,
        dir
    );
    GJKResult::IterationLimitReached
}
