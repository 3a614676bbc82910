use crate::math::{Point, Real, Vector};
use crate::query::{CollisionMode, Correction, SatOptions};
use crate::shape::{compute_normals_with_options, GeometryError, NormalSet, Polygon};

/// A convex polygon positioned in the plane, with its candidate separating axes.
///
/// The shape vertices are expressed relative to `center`. Shapes whose vertices already
/// carry their world-space position can use the origin as center.
///
/// The normals are never recomputed implicitly: after modifying `shape` (rotation,
/// replacement) or `movement` (in swept mode), call [`Object::update_normals`] before
/// running collision queries. Translating the object doesn't require it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Object {
    /// The shape of this object, relative to `center`.
    pub shape: Polygon,
    /// The position of this object.
    pub center: Point<Real>,
    /// The displacement of this object over one step. Only used by the swept mode.
    pub movement: Vector<Real>,
    normals: NormalSet,
}

impl Object {
    /// Creates a still object and computes its normals for the discrete collision mode.
    pub fn new(shape: Polygon, center: Point<Real>) -> Result<Self, GeometryError> {
        let normals = compute_normals_with_options(&shape, None, &SatOptions::default())?;
        Ok(Self {
            shape,
            center,
            movement: Vector::zeros(),
            normals,
        })
    }

    /// Creates a moving object and computes its normals for the swept collision mode.
    ///
    /// A zero `movement` is accepted: the velocity axis is then skipped.
    pub fn with_movement(
        shape: Polygon,
        center: Point<Real>,
        movement: Vector<Real>,
    ) -> Result<Self, GeometryError> {
        let normals =
            compute_normals_with_options(&shape, Some(&movement), &SatOptions::default())?;
        Ok(Self {
            shape,
            center,
            movement,
            normals,
        })
    }

    /// The normals of this object, as of the last call to [`Object::update_normals`].
    #[inline]
    pub fn normals(&self) -> &NormalSet {
        &self.normals
    }

    /// Recomputes the normals of this object for the given collision mode.
    pub fn update_normals(&mut self, mode: CollisionMode) -> Result<(), GeometryError> {
        self.update_normals_with_options(mode, &SatOptions::default())
    }

    /// Recomputes the normals of this object for the given collision mode, with custom
    /// tolerances.
    ///
    /// The normals are left untouched if this fails.
    pub fn update_normals_with_options(
        &mut self,
        mode: CollisionMode,
        options: &SatOptions,
    ) -> Result<(), GeometryError> {
        self.normals = self.compute_normals(mode, options)?;
        Ok(())
    }

    /// Computes the normals of this object for the given collision mode, without storing them.
    pub(crate) fn compute_normals(
        &self,
        mode: CollisionMode,
        options: &SatOptions,
    ) -> Result<NormalSet, GeometryError> {
        let velocity = mode.is_swept().then_some(&self.movement);
        compute_normals_with_options(&self.shape, velocity, options)
    }

    #[inline]
    pub(crate) fn set_normals(&mut self, normals: NormalSet) {
        self.normals = normals;
    }

    /// The vertices of the shape, translated by `center`.
    pub fn world_vertices(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        self.shape
            .vertices()
            .iter()
            .map(move |pt| pt + self.center.coords)
    }

    /// Moves the center of this object by `shift`.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.center += shift;
    }

    /// Rotates the shape around the centroid of its vertices.
    ///
    /// The normals must be recomputed afterward.
    #[inline]
    pub fn rotate_about_centroid(&mut self, angle: Real) {
        self.shape.rotate_about_centroid(angle);
    }

    /// Sets the movement so that the center reaches `target` after one step.
    ///
    /// In swept mode, the normals must be recomputed afterward.
    #[inline]
    pub fn aim_at(&mut self, target: &Point<Real>) {
        self.movement = target - self.center;
    }

    /// Moves the center of this object by its movement.
    #[inline]
    pub fn apply_movement(&mut self) {
        self.center += self.movement;
    }

    /// Cancels the movement of this object.
    ///
    /// In swept mode, the normals must be recomputed afterward.
    #[inline]
    pub fn stop(&mut self) {
        self.movement = Vector::zeros();
    }

    /// The position this object reaches once `correction` is applied.
    ///
    /// In discrete mode this is the center translated by the correction. In swept mode,
    /// this is where the corrected movement leads.
    pub fn resolved_position(&self, correction: &Correction, mode: CollisionMode) -> Point<Real> {
        match mode {
            CollisionMode::Discrete => self.center + correction.vector,
            CollisionMode::Swept => self.center + self.movement + correction.vector,
        }
    }
}
