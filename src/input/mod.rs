//! Conversion of loosely typed vertex collections into polygons.
//!
//! The geometric queries of [`crate::query`] work on slices of [`Point`](crate::math::Point).
//! This module builds those slices out of pairs of arbitrary numeric types and, with the `json`
//! feature, out of JSON arrays, reporting precisely which argument, vertex and coordinate is
//! malformed.

pub use self::error::{ArgumentError, InputError, VertexError};
pub use self::into_vertex::{intersects_vertices, polygon_from_vertices, IntoVertex};
#[cfg(feature = "json")]
pub use self::json::{intersects_json, polygon_from_json};

mod error;
mod into_vertex;
#[cfg(feature = "json")]
mod json;
