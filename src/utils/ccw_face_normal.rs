use crate::math::{Point, Real, UnitVector, Vector};

/// Computes the direction pointing toward the right-hand-side of an oriented segment.
///
/// This is the segment direction `(dx, dy)` rotated by −90° and normalized, i.e.,
/// `(dy, −dx) / ‖(dx, dy)‖`. For a counter-clockwise polygon this is the outward normal
/// of the edge going from `pts[0]` to `pts[1]`.
///
/// Returns `None` if the segment is degenerate, i.e., if its length is smaller or equal
/// to `eps`.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2], eps: Real) -> Option<UnitVector<Real>> {
    edge_direction_normal(&(*pts[1] - *pts[0]), eps)
}

/// Computes the normal of a segment given by its direction vector `(dx, dy)`.
///
/// Returns `None` if `dir` has a norm smaller or equal to `eps`.
#[inline]
pub(crate) fn edge_direction_normal(dir: &Vector<Real>, eps: Real) -> Option<UnitVector<Real>> {
    let res = Vector::new(dir.y, -dir.x);
    UnitVector::try_new(res, eps)
}
