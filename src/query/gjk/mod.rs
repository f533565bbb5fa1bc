//! The GJK algorithm for intersection tests.

pub use self::cso_point::CSOPoint;
pub use self::simplex2::{Simplex, SimplexUpdate};
pub use self::gjk::*;

mod cso_point;
mod gjk;
mod simplex2;
