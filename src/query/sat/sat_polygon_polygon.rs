use crate::math::{Real, Vector};
use crate::object::Object;
use crate::query::sat::{project_object, AxisResolver, Correction, DiscreteOverlap, SweptVelocity};
use crate::query::{CollisionMode, SatOptions};
use smallvec::SmallVec;

/// Number of candidate axes stored on the stack before spilling to the heap.
///
/// Enough for two hexagons tested in swept mode, negations included.
const AXES_STACK_SIZE: usize = 28;

/// Computes the correction to apply to `object1` so it stops colliding with `object2`.
///
/// This is the main collision query. Both objects must have up-to-date normals (see
/// [`Object::update_normals`]). The axes tested are the normals of both objects; in
/// swept mode, the velocity pseudo-normals and the negation of every axis are tested too.
///
/// # Example
///
/// ```
/// use sat2d::math::{Point, Vector};
/// use sat2d::object::Object;
/// use sat2d::query::{detect_collision, CollisionMode, CorrectionStatus};
/// use sat2d::shape::Polygon;
///
/// let square = Polygon::regular(4, 50.0).unwrap();
/// let o1 = Object::new(square.clone(), Point::origin()).unwrap();
/// let o2 = Object::new(square, Point::new(200.0, 0.0)).unwrap();
///
/// let correction = detect_collision(&o1, &o2, CollisionMode::Discrete);
/// assert_eq!(correction.status, CorrectionStatus::Separated);
/// assert_eq!(correction.vector, Vector::zeros());
/// ```
pub fn detect_collision(object1: &Object, object2: &Object, mode: CollisionMode) -> Correction {
    detect_collision_with_options(object1, object2, mode, &SatOptions::default())
}

/// Same as [`detect_collision`] but with custom tolerances.
pub fn detect_collision_with_options(
    object1: &Object,
    object2: &Object,
    mode: CollisionMode,
    options: &SatOptions,
) -> Correction {
    if !normals_match_mode(object1, object2, mode) {
        log::debug!(
            "Running a {mode:?} collision query on objects with normals computed for another mode."
        );
    }

    match mode {
        CollisionMode::Discrete => {
            sat_object_object_correction(object1, object2, &DiscreteOverlap)
        }
        CollisionMode::Swept => sat_object_object_correction(
            object1,
            object2,
            &SweptVelocity::new(options.min_axis_speed),
        ),
    }
}

/// Were the normals of both objects last computed for `mode`?
///
/// A swept query on objects with discrete normals silently ignores their velocity axes.
pub(crate) fn normals_match_mode(object1: &Object, object2: &Object, mode: CollisionMode) -> bool {
    object1.normals().is_swept() == mode.is_swept()
        && object2.normals().is_swept() == mode.is_swept()
}

/// Runs the separating axis test between two objects with the given resolver.
///
/// Every candidate axis is projected on, and the candidate correction with the smallest
/// magnitude is returned (the first one wins ties). The search stops as soon as a zero
/// magnitude is found since nothing can beat it. Returns [`Correction::none`] if the
/// resolver yields no candidate at all.
pub fn sat_object_object_correction(
    object1: &Object,
    object2: &Object,
    resolver: &impl AxisResolver,
) -> Correction {
    let mode = if resolver.is_swept() {
        CollisionMode::Swept
    } else {
        CollisionMode::Discrete
    };

    let mut axes: SmallVec<[Vector<Real>; AXES_STACK_SIZE]> = SmallVec::new();

    for normal in object1.normals().axes().chain(object2.normals().axes()) {
        axes.push(**normal);

        if resolver.test_negated_axes() {
            axes.push(-**normal);
        }
    }

    let mut best: Option<Correction> = None;

    for axis in &axes {
        let proj1 = project_object(object1, axis, mode);
        let proj2 = project_object(object2, axis, mode);

        if let Some(candidate) = resolver.resolve(object1, &proj1, &proj2) {
            if best.map_or(true, |best| candidate.magnitude < best.magnitude) {
                best = Some(candidate);

                if candidate.magnitude <= 0.0 {
                    break;
                }
            }
        }
    }

    best.unwrap_or_else(Correction::none)
}
