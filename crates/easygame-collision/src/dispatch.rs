//! Pairwise overlap tests.
//!
//! Each side is split into its concrete shape and optional transform, then
//! the shape pair is matched. Only circle × circle is implemented; every
//! other pair is reported as [`CollisionError::UnsupportedPair`].

use easygame_core::{AffineTransform2d, Vec2d};
use tracing::{debug, trace};

use crate::collider::Collider;
use crate::error::{CollisionError, Result};
use crate::shape::{CircleCollider, Shape};

/// Uniform scale approximated as the mean length of the two basis rows.
///
/// Exact for rotation + uniform scale + translation. Non-uniform scale and
/// shear are averaged away, so an ellipse is treated as a circle.
pub fn approximate_scale(t: &AffineTransform2d) -> f64 {
    (t.axis_x().length() + t.axis_y().length()) * 0.5
}

/// Center and scale of a shape placed by `t`.
fn placement(t: Option<&AffineTransform2d>) -> (Vec2d, f64) {
    match t {
        Some(t) => (t.get_translation(), approximate_scale(t)),
        None => (Vec2d::ZERO, 1.0),
    }
}

fn collides_circle_circle(
    left: &CircleCollider,
    left_transform: Option<&AffineTransform2d>,
    right: &CircleCollider,
    right_transform: Option<&AffineTransform2d>,
) -> bool {
    let (left_center, left_scale) = placement(left_transform);
    let (right_center, right_scale) = placement(right_transform);

    let radius_sum = left.radius() * left_scale + right.radius() * right_scale;
    let distance = left_center.distance_to(right_center);

    // Touching circles do not collide
    distance < radius_sum
}

impl Collider {
    /// Test whether two colliders overlap.
    pub fn collides(&self, other: &Collider) -> Result<bool> {
        let (left, left_transform) = (self.shape(), self.transformation());
        let (right, right_transform) = (other.shape(), other.transformation());

        trace!(left = %left.kind(), right = %right.kind(), "Testing collider pair");

        match (left, right) {
            (Shape::Circle(a), Shape::Circle(b)) => {
                Ok(collides_circle_circle(a, left_transform, b, right_transform))
            }
            (Shape::Circle(_), Shape::Polygon(_)) | (Shape::Polygon(_), _) => {
                debug!(left = %left.kind(), right = %right.kind(), "Unsupported collider pair");
                Err(CollisionError::UnsupportedPair {
                    left: left.kind(),
                    right: right.kind(),
                })
            }
        }
    }
}
