//! Application of the Separating Axis Theorem (SAT) for collision detection and response.
//!
//! Two convex polygons do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For polygons, it is sufficient to test the edge
//! normals of both shapes.
//!
//! A query runs in four steps:
//!
//! 1. **Select candidate axes**: the normals of both objects (see [`NormalSet`]). In swept
//!    mode, the pseudo-normals derived from the movements and the negation of every axis
//!    are added too.
//! 2. **Project both objects** on each axis ([`project_object`]), optionally swept along
//!    their movement.
//! 3. **Resolve each axis** into a candidate correction with an [`AxisResolver`]:
//!    [`DiscreteOverlap`] or [`SweptVelocity`].
//! 4. **Keep the smallest candidate**, see [`sat_object_object_correction`].
//!
//! [`NormalSet`]: crate::shape::NormalSet

pub use self::correction::{Correction, CorrectionStatus};
pub use self::sat_polygon_polygon::{
    detect_collision, detect_collision_with_options, sat_object_object_correction,
};
pub use self::sat_projection::{project_object, project_polygon, Projection};
pub use self::sat_resolver::{AxisResolver, DiscreteOverlap, SweptVelocity};

mod correction;
mod sat_polygon_polygon;
mod sat_projection;
mod sat_resolver;
