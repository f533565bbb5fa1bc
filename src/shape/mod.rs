//! Shapes supported by gjk2d.

pub use self::convex_polygon::ConvexPolygon;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod convex_polygon;
pub mod support_map;
