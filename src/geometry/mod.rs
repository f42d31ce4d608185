pub mod point_set;
pub mod polygon;

pub use self::point_set::PointSet;
pub use self::polygon::{polygon_from_indices, MapRing};
