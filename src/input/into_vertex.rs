use crate::input::{ArgumentError, InputError, VertexError};
use crate::math::{Point, Real};
use crate::query;
use alloc::vec::Vec;
use core::any;
use na::{Point2, Scalar};
use num::ToPrimitive;

/// A value convertible into a vertex of a polygon.
///
/// Implemented for pairs of any primitive numeric types, e.g., `(4, 11)`, `(4.0, 11)` or
/// `[7.1, 3.0]`, for slices and vectors (which are checked to hold exactly two coordinates), and
/// for nalgebra points. Every coordinate must be representable as a finite [`Real`].
pub trait IntoVertex {
    /// Converts this value into a point.
    fn into_vertex(self) -> Result<Point<Real>, VertexError>;
}

fn coordinate<T: ToPrimitive>(value: &T, axis: usize) -> Result<Real, VertexError> {
    let value = value
        .to_f64()
        .ok_or(VertexError::NonNumericCoordinate {
            axis,
            found: any::type_name::<T>(),
        })?;
    finite_coordinate(value, axis)
}

pub(crate) fn finite_coordinate(value: f64, axis: usize) -> Result<Real, VertexError> {
    let value: Real = na::convert(value);

    if value.is_finite() {
        Ok(value)
    } else {
        Err(VertexError::NonFiniteCoordinate { axis })
    }
}

fn pair<T: ToPrimitive, U: ToPrimitive>(x: &T, y: &U) -> Result<Point<Real>, VertexError> {
    Ok(Point::new(coordinate(x, 0)?, coordinate(y, 1)?))
}

fn slice<T: ToPrimitive>(coords: &[T]) -> Result<Point<Real>, VertexError> {
    match coords {
        [x, y] => pair(x, y),
        _ => Err(VertexError::WrongArity {
            arity: coords.len(),
        }),
    }
}

impl<T: ToPrimitive, U: ToPrimitive> IntoVertex for (T, U) {
    #[inline]
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        pair(&self.0, &self.1)
    }
}

impl<T: ToPrimitive, U: ToPrimitive> IntoVertex for &(T, U) {
    #[inline]
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        pair(&self.0, &self.1)
    }
}

impl<T: ToPrimitive> IntoVertex for [T; 2] {
    #[inline]
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        pair(&self[0], &self[1])
    }
}

impl<T: ToPrimitive> IntoVertex for &[T; 2] {
    #[inline]
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        pair(&self[0], &self[1])
    }
}

impl<T: ToPrimitive> IntoVertex for &[T] {
    #[inline]
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        slice(self)
    }
}

impl<T: ToPrimitive> IntoVertex for Vec<T> {
    #[inline]
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        slice(&self)
    }
}

impl<T: ToPrimitive> IntoVertex for &Vec<T> {
    #[inline]
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        slice(self)
    }
}

impl<T: ToPrimitive + Scalar> IntoVertex for Point2<T> {
    #[inline]
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        pair(&self.x, &self.y)
    }
}

impl<T: ToPrimitive + Scalar> IntoVertex for &Point2<T> {
    #[inline]
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        pair(&self.x, &self.y)
    }
}

/// Converts a collection of vertices into the points of a polygon.
///
/// An empty collection gives an empty polygon. The conversion stops at the first malformed
/// vertex.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use gjk2d::input::{polygon_from_vertices, InputError, VertexError};
/// use gjk2d::math::Point;
///
/// let points = polygon_from_vertices([(4.0, 11), (4.0, 5), (9.0, 9)]).unwrap();
/// assert_eq!(points[0], Point::new(4.0, 11.0));
///
/// let coords: [&[f64]; 2] = [&[5.0, 7.0], &[11.0]];
/// assert_eq!(
///     polygon_from_vertices(coords),
///     Err(InputError::InvalidVertex {
///         vertex: 1,
///         error: VertexError::WrongArity { arity: 1 },
///     })
/// );
/// # }
/// ```
pub fn polygon_from_vertices<I>(vertices: I) -> Result<Vec<Point<Real>>, InputError>
where
    I: IntoIterator,
    I::Item: IntoVertex,
{
    vertices
        .into_iter()
        .enumerate()
        .map(|(vertex, v)| {
            v.into_vertex()
                .map_err(|error| InputError::InvalidVertex { vertex, error })
        })
        .collect()
}

/// Tests whether the convex hulls of two collections of vertices intersect.
///
/// Both collections are validated, the first one first, before any geometric computation.
/// See [`query::intersects`] for the semantics of the test itself.
pub fn intersects_vertices<I1, I2>(vertices1: I1, vertices2: I2) -> Result<bool, ArgumentError>
where
    I1: IntoIterator,
    I1::Item: IntoVertex,
    I2: IntoIterator,
    I2::Item: IntoVertex,
{
    let points1 =
        polygon_from_vertices(vertices1).map_err(|error| ArgumentError { argument: 0, error })?;
    let points2 =
        polygon_from_vertices(vertices2).map_err(|error| ArgumentError { argument: 1, error })?;

    Ok(query::intersects(&points1, &points2))
}
