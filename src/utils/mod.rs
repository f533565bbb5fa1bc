//! Various unsorted geometrical operators.

pub use self::center::center;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::wops::{perp, perp_dot, triple_product, WCross};

mod center;
mod point_cloud_support_point;
mod wops;
