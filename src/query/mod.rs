//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general method provided by this module is [`query::intersects()`] to determine if
//! the convex hulls of two point sets are intersecting or not.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the one
//! described above. They have the form `intersection_test_[shape1]_[shape2]()` where
//! `[shape1]` and `[shape2]` identify the type of the shapes passed to the function, e.g.,
//! `polygon`, or a trait implemented by supported shapes, e.g., `support_map`.
//!
//! [`query::intersects()`]: crate::query::intersects()

pub use self::intersection_test::{intersects, intersects_with_options};

pub mod gjk;
mod intersection_test;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
