//! EasyGame Collision — collider shapes and overlap tests.
//!
//! A [`Collider`] is either a bare [`Shape`] in its own local space or a
//! [`TransformedCollider`] placing one shape with a single accumulated
//! transform. Wrapping is normalized eagerly, so transformed colliders never
//! nest and the dispatcher only ever unwraps one layer per side.

pub mod collider;
pub mod debug;
pub mod dispatch;
pub mod error;
pub mod shape;

pub use collider::{Collider, TransformedCollider};
pub use debug::DebugDraw;
pub use dispatch::approximate_scale;
pub use error::{CollisionError, Result};
pub use shape::{CircleCollider, PolygonCollider, Shape, ShapeKind};
