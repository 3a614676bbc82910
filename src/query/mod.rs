//! Non-persistent collision queries.
//!
//! The main entry point is [`query::detect_collision()`](detect_collision): it computes the
//! [`Correction`] to apply to the first of two objects, according to a [`CollisionMode`].
//! The building blocks of that query are exposed by the [`sat`] module.

pub use self::query_options::{CollisionMode, SatOptions};
pub use self::sat::{
    detect_collision, detect_collision_with_options, Correction, CorrectionStatus, Projection,
};

mod query_options;
pub mod sat;
