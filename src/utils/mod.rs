//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub(crate) use self::ccw_face_normal::edge_direction_normal;
pub use self::center::center;
pub use self::point_cloud_extents::point_cloud_extents;

mod ccw_face_normal;
mod center;
mod point_cloud_extents;
