use core::fmt;

/// An identifier of an edge used to compute a separating axis.
///
/// Polygon sides are identified by the index of their first vertex: the side `i` goes
/// from the vertex `i` to the vertex `(i + 1) % n`. In swept mode, the movement of an
/// object is treated as one more edge direction identified by [`EdgeId::Velocity`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum EdgeId {
    /// The polygon side starting at the given vertex index.
    Side(u32),
    /// The movement of the object, seen as an edge direction.
    Velocity,
}

impl EdgeId {
    /// Retrieves the index of the side if `self` identifies a polygon side.
    pub fn side(self) -> Option<u32> {
        match self {
            EdgeId::Side(id) => Some(id),
            EdgeId::Velocity => None,
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeId::Side(id) => write!(f, "side {id}"),
            EdgeId::Velocity => f.pad("velocity"),
        }
    }
}
