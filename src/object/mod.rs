//! Positioned polygons and the arena storing them.

pub use self::object::Object;
pub use self::object_set::{ObjectHandle, ObjectSet};

mod object;
mod object_set;
