use crate::math::{Real, Vector};

/// The outcome of a collision query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CorrectionStatus {
    /// Some axis separates the two objects (or their swept extents); the correction is zero.
    Separated,
    /// The objects overlap on every axis (discrete mode). The correction is the minimum
    /// translation vector.
    Penetrating,
    /// The movement of the first object runs into the second one (swept mode). The
    /// correction is the velocity adjustment to add to the movement.
    Blocked,
    /// No axis is able to scale the movement of the first object (swept mode). The
    /// correction is zero and the fallback is left to the caller.
    Unblocked,
}

/// The correction to apply to the first object of a collision query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Correction {
    /// The axis the correction was derived from.
    ///
    /// In discrete mode, it points from the first object toward the second one. In swept
    /// mode, it is the (negated) candidate axis the movement was scaled against. Zero if
    /// `status` is `Unblocked`.
    pub axis: Vector<Real>,
    /// The translation (discrete mode) or velocity adjustment (swept mode) to apply to the
    /// first object.
    pub vector: Vector<Real>,
    /// The length of `vector`: the penetration depth in discrete mode.
    pub magnitude: Real,
    /// How the query terminated.
    pub status: CorrectionStatus,
}

impl Correction {
    /// A zero correction, reported when no axis yields a usable correction.
    pub fn none() -> Self {
        Self {
            axis: Vector::zeros(),
            vector: Vector::zeros(),
            magnitude: 0.0,
            status: CorrectionStatus::Unblocked,
        }
    }

    /// Does this correction report an actual (or upcoming) collision?
    #[inline]
    pub fn is_colliding(&self) -> bool {
        matches!(
            self.status,
            CorrectionStatus::Penetrating | CorrectionStatus::Blocked
        )
    }

    /// Returns the correction to apply to the second object instead of the first one.
    ///
    /// Only meaningful for discrete corrections, which are symmetric.
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            axis: -self.axis,
            vector: -self.vector,
            ..self
        }
    }
}
