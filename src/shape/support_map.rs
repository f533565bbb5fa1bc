//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};
use na::Unit;

/// Trait implemented by convex shapes representable by a support mapping function.
///
/// A support function is a function associating a vector to the shape point which maximizes
/// their dot product. Any convex shape with a support function can be tested for intersection
/// with the GJK algorithm, see [`crate::query::gjk::intersect`].
///
/// Implementors must always be able to produce a support point: a shape without any point
/// cannot implement this trait.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// `dir` does not need to be normalized. If several points are extremal along `dir`, any of
    /// them may be returned, but the choice must be deterministic.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }
}

impl SupportMap for Point<Real> {
    #[inline]
    fn local_support_point(&self, _: &Vector<Real>) -> Point<Real> {
        *self
    }
}
