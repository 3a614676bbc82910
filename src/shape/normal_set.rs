use crate::math::{Real, UnitVector, Vector};
use crate::query::SatOptions;
use crate::shape::{EdgeId, GeometryError, Polygon};
use crate::utils::{self, edge_direction_normal};

/// The candidate separating axes contributed by one object.
///
/// This holds one outward unit normal per polygon edge. When computed for the swept
/// collision mode, it also has one extra slot for the pseudo-normal derived from the
/// object's movement. That slot is empty when the movement is degenerate (zero), in which
/// case the corresponding axis is skipped by collision queries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct NormalSet {
    edges: Vec<UnitVector<Real>>,
    velocity: Option<UnitVector<Real>>,
    swept: bool,
}

impl NormalSet {
    /// The outward normals of the polygon edges, in edge order.
    #[inline]
    pub fn edges(&self) -> &[UnitVector<Real>] {
        &self.edges
    }

    /// The pseudo-normal derived from the movement, if it was computed and is not degenerate.
    #[inline]
    pub fn velocity(&self) -> Option<&UnitVector<Real>> {
        self.velocity.as_ref()
    }

    /// Was this set computed for the swept collision mode?
    #[inline]
    pub fn is_swept(&self) -> bool {
        self.swept
    }

    /// The number of normal slots: the number of edges, plus one in swept mode.
    ///
    /// The velocity slot is counted even if it is empty.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len() + self.swept as usize
    }

    /// Is this set devoid of any normal slot?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates through all the usable axes: the edge normals followed by the
    /// velocity pseudo-normal (if any).
    pub fn axes(&self) -> impl Iterator<Item = &UnitVector<Real>> + '_ {
        self.edges.iter().chain(self.velocity.iter())
    }
}

/// Computes the outward unit normals of every edge of `polygon`.
///
/// If `velocity` is `Some`, the normals are computed for the swept collision mode and an
/// extra pseudo-normal is derived from the velocity treated as an edge direction.
///
/// This must be called again whenever the polygon vertices or the velocity change.
pub fn compute_normals(
    polygon: &Polygon,
    velocity: Option<&Vector<Real>>,
) -> Result<NormalSet, GeometryError> {
    compute_normals_with_options(polygon, velocity, &SatOptions::default())
}

/// Same as [`compute_normals`] but with custom tolerances.
///
/// A zero-length polygon edge fails with [`GeometryError::DegenerateEdge`]. A zero velocity
/// does not fail: its axis is left empty so it gets skipped by collision queries. Use
/// [`velocity_normal`] to observe that error explicitly.
pub fn compute_normals_with_options(
    polygon: &Polygon,
    velocity: Option<&Vector<Real>>,
    options: &SatOptions,
) -> Result<NormalSet, GeometryError> {
    let mut edges = Vec::with_capacity(polygon.num_vertices());

    for i in 0..polygon.num_vertices() {
        let [a, b] = polygon.edge(i);
        let normal = utils::ccw_face_normal([&a, &b], options.normal_epsilon)
            .ok_or(GeometryError::DegenerateEdge(EdgeId::Side(i as u32)))?;
        edges.push(normal);
    }

    let swept = velocity.is_some();
    let velocity = match velocity {
        Some(velocity) => match velocity_normal(velocity, options) {
            Ok(normal) => Some(normal),
            Err(err) => {
                log::debug!("Skipping the velocity axis: {err}");
                None
            }
        },
        None => None,
    };

    Ok(NormalSet {
        edges,
        velocity,
        swept,
    })
}

/// Computes the pseudo-normal of a velocity vector treated as an edge direction.
///
/// Fails with [`GeometryError::DegenerateEdge`] (with [`EdgeId::Velocity`]) if the velocity
/// norm is not greater than `options.normal_epsilon`.
pub fn velocity_normal(
    velocity: &Vector<Real>,
    options: &SatOptions,
) -> Result<UnitVector<Real>, GeometryError> {
    edge_direction_normal(velocity, options.normal_epsilon)
        .ok_or(GeometryError::DegenerateEdge(EdgeId::Velocity))
}

#[cfg(test)]
mod test {
    use super::{compute_normals, velocity_normal};
    use crate::math::{Point, Vector};
    use crate::query::SatOptions;
    use crate::shape::{EdgeId, GeometryError, Polygon};
    use approx::assert_relative_eq;

    fn triangle() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn triangle_normals_are_outward_and_unit() {
        let normals = compute_normals(&triangle(), None).unwrap();
        assert!(!normals.is_swept());
        assert_eq!(normals.len(), 3);
        assert_eq!(normals.axes().count(), 3);

        assert_relative_eq!(*normals.edges()[0], Vector::new(0.0, -1.0));
        assert_relative_eq!(*normals.edges()[1], Vector::new(0.6, 0.8), epsilon = 1.0e-12);
        assert_relative_eq!(*normals.edges()[2], Vector::new(-1.0, 0.0));
    }

    #[test]
    fn swept_normals_have_a_velocity_slot() {
        let velocity = Vector::new(0.0, 5.0);
        let normals = compute_normals(&triangle(), Some(&velocity)).unwrap();
        assert!(normals.is_swept());
        assert_eq!(normals.len(), 4);
        assert_relative_eq!(**normals.velocity().unwrap(), Vector::new(1.0, 0.0));
        assert_eq!(normals.axes().count(), 4);
    }

    #[test]
    fn zero_velocity_axis_is_skipped() {
        let normals = compute_normals(&triangle(), Some(&Vector::zeros())).unwrap();
        assert_eq!(normals.len(), 4);
        assert!(normals.velocity().is_none());
        assert_eq!(normals.axes().count(), 3);

        assert_eq!(
            velocity_normal(&Vector::zeros(), &SatOptions::default()),
            Err(GeometryError::DegenerateEdge(EdgeId::Velocity))
        );
    }

    #[test]
    fn normals_are_idempotent() {
        let pentagon = Polygon::regular(5, 80.0).unwrap();
        let velocity = Vector::new(3.0, -2.0);
        let n1 = compute_normals(&pentagon, Some(&velocity)).unwrap();
        let n2 = compute_normals(&pentagon, Some(&velocity)).unwrap();
        assert_eq!(n1, n2);
    }
}
