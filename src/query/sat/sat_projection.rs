use crate::math::{Real, Vector};
use crate::object::Object;
use crate::query::CollisionMode;
use crate::shape::Polygon;
use crate::utils;

/// The interval covered by a polygon projected on an axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// The axis the polygon was projected on.
    ///
    /// Interval lengths are only actual distances if this is a unit vector.
    pub direction: Vector<Real>,
    /// The smallest projected value. Always smaller or equal to `end`.
    pub start: Real,
    /// The largest projected value.
    pub end: Real,
}

impl Projection {
    /// Creates the projection interval with bounds `a` and `b`, given in any order.
    #[inline]
    pub fn new(direction: Vector<Real>, a: Real, b: Real) -> Self {
        if a > b {
            Self {
                direction,
                start: b,
                end: a,
            }
        } else {
            Self {
                direction,
                start: a,
                end: b,
            }
        }
    }

    /// The length of the interval.
    #[inline]
    pub fn length(&self) -> Real {
        self.end - self.start
    }

    /// The signed overlap between `self` and `other`: `min(end) - max(start)`.
    ///
    /// This is negative if the intervals are disjoint and zero if they are touching.
    #[inline]
    pub fn overlap(&self, other: &Self) -> Real {
        self.end.min(other.end) - self.start.max(other.start)
    }

    /// Do `self` and `other` overlap by a non-zero amount?
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.overlap(other) > 0.0
    }
}

/// Projects the vertices of `shape`, translated by `offset`, on `axis`.
///
/// If `displacement` is `Some`, every vertex is also projected after being translated by
/// `offset + displacement`, so the resulting interval covers the extent of the polygon swept
/// over that displacement.
pub fn project_polygon(
    shape: &Polygon,
    axis: &Vector<Real>,
    offset: &Vector<Real>,
    displacement: Option<&Vector<Real>>,
) -> Projection {
    let (mut start, mut end) = utils::point_cloud_extents(axis, shape.vertices(), offset);

    if let Some(displacement) = displacement {
        let (swept_start, swept_end) =
            utils::point_cloud_extents(axis, shape.vertices(), &(offset + displacement));
        start = start.min(swept_start);
        end = end.max(swept_end);
    }

    Projection::new(*axis, start, end)
}

/// Projects an object on `axis`.
///
/// The object shape is translated by its center and, in swept mode, swept along its movement.
pub fn project_object(object: &Object, axis: &Vector<Real>, mode: CollisionMode) -> Projection {
    let displacement = mode.is_swept().then_some(&object.movement);
    project_polygon(&object.shape, axis, &object.center.coords, displacement)
}
