/*!
gjk2d
========

**gjk2d** is a 2-dimensional intersection test between convex polygons,
written with the rust programming language.

The test is an implementation of the Gilbert-Johnson-Keerthi (GJK) algorithm:
it answers whether two convex point sets overlap (touching included) and nothing
else. No contact points, no penetration depth.

```
# #[cfg(feature = "f32")] {
use gjk2d::math::Point;
use gjk2d::query;

let triangle = [
    Point::new(4.0, 11.0),
    Point::new(4.0, 5.0),
    Point::new(9.0, 9.0),
];
let quad = [
    Point::new(5.0, 7.0),
    Point::new(7.0, 3.0),
    Point::new(10.0, 2.0),
    Point::new(12.0, 7.0),
];

assert!(query::intersects(&triangle, &quad));
assert!(!query::intersects(&[], &quad));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![doc(html_root_url = "http://docs.rs/gjk2d/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod input;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitVector2, Vector2};

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;
}
