use crate::math::{Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::utils::{perp_dot, triple_product};
use arrayvec::ArrayVec;

/// The outcome of [`Simplex::reduce`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimplexUpdate {
    /// The origin lies inside of the simplex, or on its boundary.
    OriginEnclosed,
    /// The origin lies outside of the simplex, which has been reduced to the feature closest to
    /// the origin. The next support point must be searched along this (non-zero) direction.
    Search(Vector<Real>),
}

/// A simplex of dimension up to 2 used by the GJK intersection test.
///
/// Vertices are stored most recent first: the vertex at index 0 is always the last support
/// point that was pushed.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    vertices: ArrayVec<CSOPoint, 3>,
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Simplex {
        Simplex {
            vertices: ArrayVec::new(),
        }
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.vertices.clear();
        self.vertices.push(pt);
    }

    /// Adds a point in front of this simplex.
    ///
    /// # Panics
    ///
    /// Panics if the simplex already has three vertices. [`Simplex::reduce`] always leaves at most
    /// two vertices unless the origin is enclosed.
    pub fn push_front(&mut self, pt: CSOPoint) {
        assert!(!self.vertices.is_full(), "Cannot add a point to a triangle.");
        self.vertices.insert(0, pt);
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether this simplex has no vertex at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The i-th point of this simplex, the most recent one being at index 0.
    pub fn point(&self, i: usize) -> &CSOPoint {
        assert!(i < self.vertices.len(), "Index out of bounds.");
        &self.vertices[i]
    }

    /// The points of this simplex, most recent first.
    #[inline]
    pub fn points(&self) -> &[CSOPoint] {
        &self.vertices
    }

    /// Locates the origin with respect to this simplex.
    ///
    /// Vertices that cannot be part of a simplex enclosing the origin are removed, and the
    /// direction from the remaining feature toward the origin is returned. A search direction
    /// that vanishes means that the origin lies on the simplex, which counts as enclosed.
    ///
    /// # Panics
    ///
    /// Panics if the simplex is empty.
    pub fn reduce(&mut self) -> SimplexUpdate {
        let update = match self.vertices.len() {
            1 => SimplexUpdate::Search(-self.vertices[0].point.coords),
            2 => self.reduce_segment(),
            3 => self.reduce_triangle(),
            _ => panic!("Cannot reduce an empty simplex."),
        };

        match update {
            SimplexUpdate::Search(dir) if dir == Vector::zeros() => SimplexUpdate::OriginEnclosed,
            update => update,
        }
    }

    // Segment [a, b] with `a` the most recent point.
    fn reduce_segment(&mut self) -> SimplexUpdate {
        let a = self.vertices[0].point;
        let b = self.vertices[1].point;
        let ab = b - a;
        let ao = -a.coords;

        if ab.dot(&ao) > 0.0 {
            SimplexUpdate::Search(triple_product(&ab, &ao, &ab))
        } else {
            // The origin is in the Voronoï region of `a`.
            let _ = self.vertices.remove(1);
            SimplexUpdate::Search(ao)
        }
    }

    // Triangle [a, b, c] with `a` the most recent point.
    fn reduce_triangle(&mut self) -> SimplexUpdate {
        let a = self.vertices[0].point;
        let b = self.vertices[1].point;
        let c = self.vertices[2].point;
        let ab = b - a;
        let ac = c - a;
        let ao = -a.coords;

        if perp_dot(&ab, &ac) == 0.0 {
            // Flat triangle: both edge normals vanish. Keep the longest edge from `a`.
            log::debug!("GJK: degenerate triangle {:?}, {:?}, {:?}.", a, b, c);
            if ab.norm_squared() > ac.norm_squared() {
                let _ = self.vertices.remove(2);
            } else {
                let _ = self.vertices.remove(1);
            }
            return self.reduce_segment();
        }

        let ac_perp = triple_product(&ab, &ac, &ac);

        if ac_perp.dot(&ao) > 0.0 {
            // The origin is beyond the edge `ac`.
            let _ = self.vertices.remove(1);
            return self.reduce_segment();
        }

        let ab_perp = triple_product(&ac, &ab, &ab);

        if ab_perp.dot(&ao) > 0.0 {
            // The origin is beyond the edge `ab`.
            let _ = self.vertices.remove(2);
            return self.reduce_segment();
        }

        SimplexUpdate::OriginEnclosed
    }
}
