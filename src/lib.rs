/*!
sat2d
========

**sat2d** detects and resolves collisions between convex polygons moving in
a 2D plane using the Separating Axis Theorem.

Two collision responses are provided by the same query:

* [`CollisionMode::Discrete`](query::CollisionMode::Discrete) treats both
  objects as static and computes the minimum translation vector.
* [`CollisionMode::Swept`](query::CollisionMode::Swept) sweeps each polygon
  along its movement over one step and computes the smallest backward
  scaling of the first object's movement that avoids the impact.

```
use sat2d::math::{Point, Vector};
use sat2d::object::Object;
use sat2d::query::{detect_collision, CollisionMode};
use sat2d::shape::Polygon;

let square = || {
    Polygon::new(vec![
        Point::new(-50.0, -50.0),
        Point::new(50.0, -50.0),
        Point::new(50.0, 50.0),
        Point::new(-50.0, 50.0),
    ])
    .unwrap()
};

let a = Object::new(square(), Point::origin()).unwrap();
let b = Object::new(square(), Point::new(60.0, 0.0)).unwrap();
let correction = detect_collision(&a, &b, CollisionMode::Discrete);
assert_eq!(correction.magnitude, 40.0);
assert_eq!(correction.vector, Vector::new(-40.0, 0.0));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod object;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitComplex, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The rotation type.
    pub type Rotation<N> = UnitComplex<N>;
}
