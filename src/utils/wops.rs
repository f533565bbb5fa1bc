//! Planar vector operators missing from nalgebra.

use crate::math::{Real, Vector};

/// The 2D cross product.
///
/// For two vectors this is the scalar `a.x * b.y - a.y * b.x`, the z component of the 3D cross
/// product of the two vectors lifted to the plane `z = 0`.
pub trait WCross<Rhs>: Sized {
    /// The result of the cross product.
    type Result;

    /// Computes the 2D cross product `self × rhs`.
    fn gcross(&self, rhs: Rhs) -> Self::Result;
}

impl WCross<Vector<Real>> for Vector<Real> {
    type Result = Real;

    #[inline]
    fn gcross(&self, rhs: Vector<Real>) -> Self::Result {
        self.x * rhs.y - self.y * rhs.x
    }
}

/// The vector `v` rotated by 90 degrees counter-clockwise: `(x, y) ↦ (-y, x)`.
#[inline]
pub fn perp(v: &Vector<Real>) -> Vector<Real> {
    Vector::new(-v.y, v.x)
}

/// The scalar 2D cross product `a.x * b.y - a.y * b.x`.
///
/// Positive if `b` is counter-clockwise from `a`, zero if they are collinear.
#[inline]
pub fn perp_dot(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    a.gcross(*b)
}

/// The vector triple product `(a × b) × c` restricted to the plane.
///
/// This is `perp(c)` scaled by `perp_dot(a, b)`, which expands to `b (a · c) - a (b · c)`.
/// With `triple_product(ab, ao, ab)` this yields the normal of the edge `ab` pointing toward the
/// side containing `o`; it is zero when `a`, `b` and `o` are collinear.
#[inline]
pub fn triple_product(a: &Vector<Real>, b: &Vector<Real>, c: &Vector<Real>) -> Vector<Real> {
    perp(c) * perp_dot(a, b)
}
