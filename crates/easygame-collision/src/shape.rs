//! Concrete collider shapes in their own local space.

use easygame_core::Vec2d;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Circle centered on the local origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleCollider {
    radius: f64,
}

impl CircleCollider {
    /// Create a circle. The radius is expected to be positive.
    #[inline]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Closed polygon outline; the last vertex connects back to the first.
///
/// Only debug drawing is defined for polygons. Overlap tests against them
/// report [`CollisionError::UnsupportedPair`](crate::CollisionError).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonCollider {
    vertices: SmallVec<[Vec2d; 8]>,
}

impl PolygonCollider {
    /// Create a polygon from a copy of `vertices`.
    pub fn new(vertices: impl IntoIterator<Item = Vec2d>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    pub fn vertices(&self) -> &[Vec2d] {
        &self.vertices
    }

    /// Segments of the closed loop, including last → first.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2d, Vec2d)> + '_ {
        let next = self.vertices.iter().copied().cycle().skip(1);
        self.vertices.iter().copied().zip(next)
    }
}

/// A concrete shape, before any placement transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Circle(CircleCollider),
    Polygon(PolygonCollider),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }
}

impl From<CircleCollider> for Shape {
    fn from(circle: CircleCollider) -> Self {
        Shape::Circle(circle)
    }
}

impl From<PolygonCollider> for Shape {
    fn from(polygon: PolygonCollider) -> Self {
        Shape::Polygon(polygon)
    }
}

/// Shape discriminant, used in error reports and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle => write!(f, "circle"),
            ShapeKind::Polygon => write!(f, "polygon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PolygonCollider {
        PolygonCollider::new([
            Vec2d::new(0.0, 0.0),
            Vec2d::new(4.0, 0.0),
            Vec2d::new(0.0, 3.0),
        ])
    }

    #[test]
    fn test_polygon_copies_vertices() {
        let mut source = vec![Vec2d::ZERO, Vec2d::UNIT_X, Vec2d::UNIT_Y];
        let polygon = PolygonCollider::new(source.iter().copied());
        source.clear();
        assert_eq!(polygon.vertices().len(), 3);
    }

    #[test]
    fn test_polygon_edges_close_the_loop() {
        let edges: Vec<_> = triangle().edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Vec2d::new(0.0, 3.0), Vec2d::new(0.0, 0.0)));
        assert_eq!(PolygonCollider::new([]).edges().count(), 0);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Shape::from(CircleCollider::new(1.0)).kind(), ShapeKind::Circle);
        assert_eq!(Shape::from(triangle()).kind().to_string(), "polygon");
    }

    #[test]
    fn test_shape_json_is_tagged() {
        let json = serde_json::to_string(&Shape::from(CircleCollider::new(2.5))).unwrap();
        assert_eq!(json, r#"{"type":"circle","radius":2.5}"#);
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Shape::Circle(CircleCollider::new(2.5)));
    }
}
