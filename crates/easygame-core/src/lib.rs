//! EasyGame Core - Foundation math for 2D games
//!
//! This crate provides the value types the rest of EasyGame builds on:
//! - 2D vectors (Vec2d)
//! - Affine transforms with order-sensitive composition (AffineTransform2d)
//! - Colors and the drawing surface capability used for debug output

pub mod color;
pub mod error;
pub mod surface;
pub mod transform;
pub mod vec2d;

pub use color::Color;
pub use error::{GeometryError, Result};
pub use surface::{DrawCommand, DrawingSurface, RecordingSurface, SurfaceState};
pub use transform::AffineTransform2d;
pub use vec2d::Vec2d;
