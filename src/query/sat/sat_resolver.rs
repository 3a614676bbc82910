use crate::math::{Real, DEFAULT_EPSILON};
use crate::object::Object;
use crate::query::sat::{Correction, CorrectionStatus, Projection};

/// Derives a candidate correction from the projections of two objects on the same axis.
///
/// The orchestrator [`sat_object_object_correction`](crate::query::sat::sat_object_object_correction)
/// enumerates the candidate axes, projects both objects on each of them, and keeps the
/// candidate with the smallest magnitude among the ones returned by the resolver.
pub trait AxisResolver {
    /// Should the objects be projected swept along their movement?
    fn is_swept(&self) -> bool;

    /// Should every candidate axis also be tested in the opposite direction?
    fn test_negated_axes(&self) -> bool;

    /// Computes the candidate correction for the first object from the projections `proj1`
    /// and `proj2` of both objects on the same axis.
    ///
    /// Returns `None` if this axis cannot yield a correction.
    fn resolve(&self, object1: &Object, proj1: &Projection, proj2: &Projection)
        -> Option<Correction>;
}

/// Classic SAT minimum translation vector.
///
/// The candidate of each axis is the overlap of both projection intervals (clamped to zero
/// if they are disjoint). The two objects intersect iff every axis reports a non-zero
/// overlap; the axis of minimum overlap then gives the minimum translation vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscreteOverlap;

impl AxisResolver for DiscreteOverlap {
    #[inline]
    fn is_swept(&self) -> bool {
        false
    }

    #[inline]
    fn test_negated_axes(&self) -> bool {
        false
    }

    fn resolve(
        &self,
        _object1: &Object,
        proj1: &Projection,
        proj2: &Projection,
    ) -> Option<Correction> {
        // Orient the axis from the first object toward the second one.
        let (dir, first, second) = if proj1.start > proj2.start {
            (-proj1.direction, proj2, proj1)
        } else {
            (proj1.direction, proj1, proj2)
        };

        let overlap = first.overlap(second).max(0.0);

        let status = if overlap > 0.0 {
            CorrectionStatus::Penetrating
        } else {
            CorrectionStatus::Separated
        };

        Some(Correction {
            axis: dir,
            vector: dir * -overlap,
            magnitude: overlap,
            status,
        })
    }
}

/// Velocity correction heuristic for objects swept along their movement.
///
/// For each axis `n`, the projections are compared along `-n`:
/// `gap = max(proj1) - min(proj2)` (clamped to zero) and the movement `v` of the first
/// object is scaled by `a = gap / dot(v, -n)`. The axis is a blocking candidate only if
/// `a <= 0`, and its candidate correction is `a * v`.
///
/// This is not an exact time-of-impact computation. It reproduces the response of the
/// interactive program the swept mode was designed for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweptVelocity {
    /// Axes along which `|dot(v, n)|` is smaller or equal to this value are skipped.
    pub min_axis_speed: Real,
}

impl SweptVelocity {
    /// Creates a swept resolver skipping axes along which the movement speed is smaller or
    /// equal to `min_axis_speed`.
    pub fn new(min_axis_speed: Real) -> Self {
        Self { min_axis_speed }
    }
}

impl Default for SweptVelocity {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl AxisResolver for SweptVelocity {
    #[inline]
    fn is_swept(&self) -> bool {
        true
    }

    #[inline]
    fn test_negated_axes(&self) -> bool {
        true
    }

    fn resolve(
        &self,
        object1: &Object,
        proj1: &Projection,
        proj2: &Projection,
    ) -> Option<Correction> {
        let dir = -proj1.direction;
        let gap = (proj1.start.max(proj1.end) - proj2.start.min(proj2.end)).max(0.0);
        let speed = object1.movement.dot(&dir);

        if speed.abs() <= self.min_axis_speed {
            log::trace!("Skipping swept axis {dir:?}: the movement is orthogonal to it.");
            return None;
        }

        let scale = gap / speed;

        if scale > 0.0 {
            return None;
        }

        let vector = object1.movement * scale;
        let magnitude = vector.norm();
        let status = if magnitude > 0.0 {
            CorrectionStatus::Blocked
        } else {
            CorrectionStatus::Separated
        };

        Some(Correction {
            axis: dir,
            vector,
            magnitude,
            status,
        })
    }
}
