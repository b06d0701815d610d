//! Collider values and wrapper normalization.

use easygame_core::{AffineTransform2d, Vec2d};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{CollisionError, Result};
use crate::shape::{CircleCollider, PolygonCollider, Shape};

/// A shape placed in the world by one accumulated transform.
///
/// Holding a [`Shape`] rather than a [`Collider`] keeps wrappers from
/// nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedCollider {
    shape: Shape,
    transformation: AffineTransform2d,
}

impl TransformedCollider {
    pub fn new(shape: impl Into<Shape>, transformation: AffineTransform2d) -> Self {
        Self {
            shape: shape.into(),
            transformation,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn transformation(&self) -> &AffineTransform2d {
        &self.transformation
    }

    pub fn into_parts(self) -> (Shape, AffineTransform2d) {
        (self.shape, self.transformation)
    }
}

/// A collision shape, optionally placed by a transform.
///
/// Serialized untagged: a bare shape reads as `{"type": "circle", ...}`, a
/// transformed one as `{"shape": {...}, "transformation": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Collider {
    Shape(Shape),
    Transformed(TransformedCollider),
}

impl Collider {
    /// Circle of `radius`, centered at `(x, y)`.
    ///
    /// A circle at the origin is returned bare; anything else is wrapped in a
    /// translation.
    pub fn circle(radius: f64, x: f64, y: f64) -> Self {
        let circle = CircleCollider::new(radius);
        if x != 0.0 || y != 0.0 {
            return Collider::Transformed(TransformedCollider::new(
                circle,
                AffineTransform2d::translation(x, y),
            ));
        }
        Collider::Shape(circle.into())
    }

    /// Closed polygon through `vertices`.
    pub fn polygon(vertices: impl IntoIterator<Item = Vec2d>) -> Self {
        Collider::Shape(PolygonCollider::new(vertices).into())
    }

    /// Rectangle colliders are not available yet; this always fails.
    pub fn rectangle(
        _width: f64,
        _height: f64,
        _rotation: f64,
        _x: f64,
        _y: f64,
    ) -> Result<Self> {
        Err(CollisionError::UnsupportedShape("rectangle"))
    }

    /// Wrap this collider in `t`.
    ///
    /// A bare shape always gains a wrapper. An existing wrapper absorbs `t`
    /// into its transform (`current.append(t)`) and disappears if the result
    /// is exactly the identity.
    pub fn transform(self, t: &AffineTransform2d) -> Self {
        match self {
            Collider::Shape(shape) => Collider::Transformed(TransformedCollider::new(shape, *t)),
            Collider::Transformed(wrapped) => {
                let (shape, current) = wrapped.into_parts();
                let composed = current.append(t);
                if composed.is_identity() {
                    trace!(shape = %shape.kind(), "Transform collapsed to identity, unwrapping");
                    return Collider::Shape(shape);
                }
                Collider::Transformed(TransformedCollider::new(shape, composed))
            }
        }
    }

    /// Like [`Collider::transform`], leaving `self` untouched.
    pub fn transformed(&self, t: &AffineTransform2d) -> Self {
        self.clone().transform(t)
    }

    /// The concrete shape, with any wrapper removed.
    pub fn shape(&self) -> &Shape {
        match self {
            Collider::Shape(shape) => shape,
            Collider::Transformed(wrapped) => wrapped.shape(),
        }
    }

    /// The placement transform, or `None` for a bare shape.
    pub fn transformation(&self) -> Option<&AffineTransform2d> {
        match self {
            Collider::Shape(_) => None,
            Collider::Transformed(wrapped) => Some(wrapped.transformation()),
        }
    }
}

impl From<Shape> for Collider {
    fn from(shape: Shape) -> Self {
        Collider::Shape(shape)
    }
}

impl From<CircleCollider> for Collider {
    fn from(circle: CircleCollider) -> Self {
        Collider::Shape(circle.into())
    }
}

impl From<PolygonCollider> for Collider {
    fn from(polygon: PolygonCollider) -> Self {
        Collider::Shape(polygon.into())
    }
}

impl From<TransformedCollider> for Collider {
    fn from(wrapped: TransformedCollider) -> Self {
        Collider::Transformed(wrapped)
    }
}
