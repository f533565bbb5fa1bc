use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;
use alloc::borrow::Cow;
use alloc::vec::Vec;

/// A 2D convex polygon, described by its vertices.
///
/// The vertices may be given in any order and may include interior points: only the support
/// function of the point set matters, so the shape behaves as the convex hull of its vertices.
/// Convexity is neither checked nor enforced.
///
/// A `ConvexPolygon` always has at least one vertex. It degenerates to a point with one
/// vertex and to a segment with two. The vertices are either borrowed or owned.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon<'a> {
    points: Cow<'a, [Point<Real>]>,
}

impl ConvexPolygon<'static> {
    /// Creates a convex polygon that owns its vertices.
    ///
    /// Returns `None` if `points` is empty.
    pub fn new(points: Vec<Point<Real>>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(ConvexPolygon {
                points: Cow::Owned(points),
            })
        }
    }
}

impl<'a> ConvexPolygon<'a> {
    /// Creates a convex polygon borrowing its vertices from `points`.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_slice(points: &'a [Point<Real>]) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(ConvexPolygon {
                points: Cow::Borrowed(points),
            })
        }
    }

    /// The vertices of this convex polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The number of vertices of this polygon. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`, a convex polygon has at least one vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The average of the vertices of this polygon.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.points).unwrap_or_else(Point::origin)
    }
}

impl SupportMap for ConvexPolygon<'_> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // `self.points` is never empty so the fallback index is never used.
        let id = utils::point_cloud_support_point_id(dir, &self.points).unwrap_or_default();
        self.points[id]
    }
}
