use crate::math::{Point, Real, Rotation, Vector, DEFAULT_EPSILON};
use crate::shape::EdgeId;
use crate::utils;
use na::RealField;

/// Error raised when a polygon or one of its normals cannot be built.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A polygon must have at least three vertices.
    #[error("a polygon needs at least three vertices, found {0}.")]
    InvalidPolygon(usize),
    /// An edge (or the movement vector, in swept mode) has a zero length so no normal
    /// can be derived from it.
    #[error("the {0} has a zero length and does not define a normal.")]
    DegenerateEdge(EdgeId),
}

/// A convex planar polygon.
///
/// The vertices are interpreted as a closed loop: the vertex `i` is connected to the
/// vertex `(i + 1) % n`. They are expected to be given in counter-clockwise order so that
/// the normals computed by [`compute_normals`](crate::shape::compute_normals) point outward.
/// Convexity is not checked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(try_from = "Vec<Point<Real>>", into = "Vec<Point<Real>>")
)]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
}

impl Polygon {
    /// Builds a new polygon from its vertices.
    ///
    /// Fails with [`GeometryError::InvalidPolygon`] if less than three vertices are given,
    /// and with [`GeometryError::DegenerateEdge`] if two consecutive vertices coincide.
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidPolygon(vertices.len()));
        }

        for i1 in 0..vertices.len() {
            let i2 = (i1 + 1) % vertices.len();
            if utils::ccw_face_normal([&vertices[i1], &vertices[i2]], DEFAULT_EPSILON).is_none() {
                return Err(GeometryError::DegenerateEdge(EdgeId::Side(i1 as u32)));
            }
        }

        Ok(Self { vertices })
    }

    /// Builds a regular polygon with `num_sides` vertices lying on the circle of radius
    /// `radius` centered at the origin.
    ///
    /// The vertex `i` is located at `radius * (cos(2πi/n), sin(2πi/n))`.
    pub fn regular(num_sides: usize, radius: Real) -> Result<Self, GeometryError> {
        let step = Real::two_pi() / num_sides as Real;
        let vertices = (0..num_sides)
            .map(|i| {
                let angle = step * i as Real;
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        Self::new(vertices)
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The number of vertices (and edges) of this polygon.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The endpoints of the `i`-th edge.
    #[inline]
    pub fn edge(&self, i: usize) -> [Point<Real>; 2] {
        let j = (i + 1) % self.vertices.len();
        [self.vertices[i], self.vertices[j]]
    }

    /// Iterates through the direction vectors `v[i + 1] - v[i]` of every edge.
    pub fn edge_directions(&self) -> impl ExactSizeIterator<Item = Vector<Real>> + '_ {
        (0..self.vertices.len()).map(|i| {
            let [a, b] = self.edge(i);
            b - a
        })
    }

    /// The centroid of the vertices of this polygon.
    pub fn centroid(&self) -> Point<Real> {
        utils::center(&self.vertices)
    }

    /// Translates every vertex by `shift`.
    ///
    /// The normals are unaffected by translations.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        for pt in &mut self.vertices {
            *pt += shift;
        }
    }

    /// Rotates every vertex by `angle` radians around the origin.
    ///
    /// The normals of the objects owning this polygon must be recomputed afterward.
    pub fn rotate(&mut self, angle: Real) {
        let rot = Rotation::new(angle);
        for pt in &mut self.vertices {
            *pt = rot * *pt;
        }
    }

    /// Rotates every vertex by `angle` radians around the centroid of the vertices.
    ///
    /// The normals of the objects owning this polygon must be recomputed afterward.
    pub fn rotate_about_centroid(&mut self, angle: Real) {
        let rot = Rotation::new(angle);
        let center = self.centroid();
        for pt in &mut self.vertices {
            *pt = center + rot * (*pt - center);
        }
    }
}

impl TryFrom<Vec<Point<Real>>> for Polygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Point<Real>>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Point<Real>> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}
