use crate::math::{Real, DEFAULT_EPSILON};

/// The collision response computed by a query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CollisionMode {
    /// Both objects are static. The query computes the overlap of the polygon projections
    /// on every axis and returns the minimum translation vector.
    #[default]
    Discrete,
    /// The polygons are swept along their movement over one step. The query returns the
    /// smallest backward scaling of the first object's movement averting the penetration.
    Swept,
}

impl CollisionMode {
    /// Does this mode take the movement of the objects into account?
    #[inline]
    pub fn is_swept(self) -> bool {
        self == CollisionMode::Swept
    }
}

/// Tolerances controlling normal computations and collision queries.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SatOptions {
    /// Edges (or movements) with a length smaller or equal to this value are
    /// considered degenerate and don't define any normal.
    pub normal_epsilon: Real,
    /// In swept mode, axes along which the first object's movement has a speed
    /// `|dot(movement, axis)|` smaller or equal to this value are skipped since the
    /// movement cannot be scaled along them.
    pub min_axis_speed: Real,
}

impl SatOptions {
    /// Creates a [`SatOptions`] with the default values except for the normal epsilon.
    pub fn with_normal_epsilon(normal_epsilon: Real) -> Self {
        Self {
            normal_epsilon,
            ..Default::default()
        }
    }
}

impl Default for SatOptions {
    fn default() -> Self {
        Self {
            normal_epsilon: DEFAULT_EPSILON,
            min_axis_speed: DEFAULT_EPSILON,
        }
    }
}
