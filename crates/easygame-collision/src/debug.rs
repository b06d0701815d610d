//! Debug outlines for colliders.

use easygame_core::{Color, DrawingSurface, SurfaceState, Vec2d};

use crate::collider::{Collider, TransformedCollider};
use crate::shape::{CircleCollider, PolygonCollider, Shape};

const DEBUG_COLOR: Color = Color::RED;
const POLYGON_LINE_WIDTH: f64 = 1.5;

/// Something that can draw its outline onto a surface for debugging.
pub trait DebugDraw {
    /// Draw in local coordinates. Does nothing unless overridden.
    fn draw_debug_info(&self, _surface: &mut dyn DrawingSurface) {}
}

impl DebugDraw for CircleCollider {
    fn draw_debug_info(&self, surface: &mut dyn DrawingSurface) {
        surface.stroke_circle(Vec2d::ZERO, self.radius(), DEBUG_COLOR);
    }
}

impl DebugDraw for PolygonCollider {
    fn draw_debug_info(&self, surface: &mut dyn DrawingSurface) {
        surface.set_line_width(POLYGON_LINE_WIDTH);
        surface.set_stroke_color(DEBUG_COLOR);
        surface.begin_path();
        let vertices = self.vertices();
        for &v in vertices.iter().chain(vertices.first()) {
            surface.line_to(v);
        }
        surface.stroke();
    }
}

impl DebugDraw for Shape {
    fn draw_debug_info(&self, surface: &mut dyn DrawingSurface) {
        match self {
            Shape::Circle(circle) => circle.draw_debug_info(surface),
            Shape::Polygon(polygon) => polygon.draw_debug_info(surface),
        }
    }
}

impl DebugDraw for TransformedCollider {
    fn draw_debug_info(&self, surface: &mut dyn DrawingSurface) {
        let mut state = SurfaceState::new(surface);
        self.transformation().apply_to_surface(&mut *state);
        self.shape().draw_debug_info(&mut *state);
    }
}

impl DebugDraw for Collider {
    fn draw_debug_info(&self, surface: &mut dyn DrawingSurface) {
        match self {
            Collider::Shape(shape) => shape.draw_debug_info(surface),
            Collider::Transformed(wrapped) => wrapped.draw_debug_info(surface),
        }
    }
}
