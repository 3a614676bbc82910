use crate::math::{Point, Real, Vector};

/// Computes the extents of a cloud of points projected on the direction `dir`.
///
/// Every point is translated by `offset` before being projected. Returns the
/// `(min, max)` of `dot(pt + offset, dir)`, so `min <= max` whenever the inputs are finite.
///
/// The point cloud must not be empty.
#[inline]
pub fn point_cloud_extents(
    dir: &Vector<Real>,
    points: &[Point<Real>],
    offset: &Vector<Real>,
) -> (Real, Real) {
    let first = (points[0].coords + offset).dot(dir);
    let mut min = first;
    let mut max = first;

    for pt in &points[1..] {
        let dot = (pt.coords + offset).dot(dir);
        min = min.min(dot);
        max = max.max(dot);
    }

    (min, max)
}
