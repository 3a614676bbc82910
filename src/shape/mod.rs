//! Shapes supported by sat2d and the candidate separating axes derived from them.

pub use self::edge_id::EdgeId;
pub use self::normal_set::{
    compute_normals, compute_normals_with_options, velocity_normal, NormalSet,
};
pub use self::polygon::{GeometryError, Polygon};

mod edge_id;
mod normal_set;
mod polygon;
