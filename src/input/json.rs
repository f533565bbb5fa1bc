use crate::input::{
    into_vertex::finite_coordinate, ArgumentError, InputError, IntoVertex, VertexError,
};
use crate::math::{Point, Real};
use crate::query;
use alloc::vec::Vec;
use serde_json::Value;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl IntoVertex for &Value {
    fn into_vertex(self) -> Result<Point<Real>, VertexError> {
        let coords = self.as_array().ok_or(VertexError::NotASequence {
            found: json_type_name(self),
        })?;

        match coords.as_slice() {
            [x, y] => Ok(Point::new(json_coordinate(x, 0)?, json_coordinate(y, 1)?)),
            _ => Err(VertexError::WrongArity {
                arity: coords.len(),
            }),
        }
    }
}

// Booleans are not numbers here, even though they are in some dynamic languages.
fn json_coordinate(value: &Value, axis: usize) -> Result<Real, VertexError> {
    let value = value.as_f64().ok_or(VertexError::NonNumericCoordinate {
        axis,
        found: json_type_name(value),
    })?;
    finite_coordinate(value, axis)
}

/// Converts a JSON array of `[x, y]` pairs into the points of a polygon.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use gjk2d::input::{polygon_from_json, InputError};
/// use gjk2d::math::Point;
/// use serde_json::json;
///
/// let points = polygon_from_json(&json!([[4, 11], [4, 5], [9, 9]])).unwrap();
/// assert_eq!(points[2], Point::new(9.0, 9.0));
///
/// assert_eq!(
///     polygon_from_json(&json!(null)),
///     Err(InputError::NotASequence { found: "null" })
/// );
/// # }
/// ```
pub fn polygon_from_json(value: &Value) -> Result<Vec<Point<Real>>, InputError> {
    let vertices = value.as_array().ok_or(InputError::NotASequence {
        found: json_type_name(value),
    })?;
    super::polygon_from_vertices(vertices)
}

/// Tests whether the convex hulls of two polygons given as JSON arrays of `[x, y]` pairs
/// intersect.
///
/// The first argument is validated before the second one.
pub fn intersects_json(value1: &Value, value2: &Value) -> Result<bool, ArgumentError> {
    let points1 = polygon_from_json(value1).map_err(|error| ArgumentError { argument: 0, error })?;
    let points2 = polygon_from_json(value2).map_err(|error| ArgumentError { argument: 1, error })?;

    Ok(query::intersects(&points1, &points2))
}
