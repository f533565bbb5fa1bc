//! Implementation details of the `intersects` function.

pub use self::intersection_test_polygon_polygon::{
    intersection_test_polygon_polygon, intersection_test_polygon_polygon_with_params, intersects,
    intersects_with_options,
};
pub use self::intersection_test_support_map_support_map::intersection_test_support_map_support_map;
pub use self::intersection_test_support_map_support_map::intersection_test_support_map_support_map_with_params;

mod intersection_test_polygon_polygon;
mod intersection_test_support_map_support_map;
