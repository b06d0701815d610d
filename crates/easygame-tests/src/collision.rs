//! Integration tests for transforms flowing through the collider hierarchy.
//!
//! Exercises easygame-core transforms against easygame-collision dispatch
//! and debug drawing.

use easygame_collision::{
    CircleCollider, Collider, CollisionError, DebugDraw, PolygonCollider, Shape, ShapeKind,
};
use easygame_core::{
    AffineTransform2d, Color, DrawCommand, DrawingSurface, GeometryError, RecordingSurface, Vec2d,
};

// ── Helpers ────────────────────────────────────────────────────

fn circle(radius: f64) -> Collider {
    Collider::from(CircleCollider::new(radius))
}

fn square() -> PolygonCollider {
    PolygonCollider::new([
        Vec2d::new(-1.0, -1.0),
        Vec2d::new(1.0, -1.0),
        Vec2d::new(1.0, 1.0),
        Vec2d::new(-1.0, 1.0),
    ])
}

// ── Overlap scenarios ──────────────────────────────────────────

#[test]
fn circles_overlap_until_tangent() {
    let a = circle(5.0);
    let near = circle(5.0).transform(&AffineTransform2d::translation(9.0, 0.0));
    let touching = circle(5.0).transform(&AffineTransform2d::translation(10.0, 0.0));

    assert_eq!(a.collides(&near), Ok(true));
    assert_eq!(a.collides(&touching), Ok(false));
}

#[test]
fn scaled_circle_uses_effective_radius() {
    let big = circle(2.0)
        .transform(&AffineTransform2d::scaling(3.0, 3.0))
        .transform(&AffineTransform2d::translation(5.0, 0.0));
    assert_eq!(big.collides(&circle(1.0)), Ok(true));
}

#[test]
fn moving_a_body_frame_by_frame() {
    // A body stored in local space and re-placed each tick
    let local = Collider::circle(1.0, 0.0, 0.0);
    let wall = Collider::circle(1.0, 10.0, 0.0);

    let first_hit = (0..20)
        .map(|tick| {
            let placement = AffineTransform2d::create(Vec2d::new(tick as f64, 0.0), 0.0, 1.0);
            local.transformed(&placement)
        })
        .position(|body| body.collides(&wall) == Ok(true));

    // Centers closer than the radius sum of 2 from tick 9 onwards
    assert_eq!(first_hit, Some(9));
}

#[test]
fn inverse_placement_unwraps_collider() {
    let placement = AffineTransform2d::translation(4.0, -8.0).append_scaling(2.0, 2.0, None);
    let inverse = placement.inverse().unwrap();
    let round_trip = circle(3.0).transform(&placement).transform(&inverse);

    assert_eq!(round_trip, circle(3.0));
    assert!(matches!(round_trip.shape(), Shape::Circle(c) if c.radius() == 3.0));
}

#[test]
fn singular_placement_cannot_be_undone() {
    let flatten = AffineTransform2d::new(Vec2d::new(1.0, 0.0), Vec2d::new(2.0, 0.0), Vec2d::ZERO);
    assert!(matches!(
        flatten.inverse(),
        Err(GeometryError::NotInvertible { .. })
    ));
}

#[test]
fn polygon_pairs_fail_loudly() {
    let poly = Collider::from(square()).transform(&AffineTransform2d::translation(1.0, 1.0));
    assert_eq!(
        poly.collides(&circle(1.0)),
        Err(CollisionError::UnsupportedPair {
            left: ShapeKind::Polygon,
            right: ShapeKind::Circle,
        })
    );
    assert!(poly.collides(&poly).is_err());
}

#[test]
fn rectangle_factory_is_unsupported() {
    assert_eq!(
        Collider::rectangle(4.0, 2.0, 0.5, 1.0, 1.0),
        Err(CollisionError::UnsupportedShape("rectangle"))
    );
}

// ── Debug drawing ──────────────────────────────────────────────

#[test]
fn debug_outline_lands_in_world_space() {
    let placement = AffineTransform2d::create(Vec2d::new(100.0, 50.0), 0.0, 2.0);
    let collider = Collider::from(square()).transform(&placement);

    let mut surface = RecordingSurface::new();
    // Capture the effective transform while the outline is drawn
    let mut world = Vec::new();
    struct Probe<'a> {
        inner: &'a mut RecordingSurface,
        world: &'a mut Vec<Vec2d>,
    }
    impl DrawingSurface for Probe<'_> {
        fn save(&mut self) {
            self.inner.save()
        }
        fn restore(&mut self) {
            self.inner.restore()
        }
        fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
            self.inner.transform(a, b, c, d, e, f)
        }
        fn stroke_circle(&mut self, center: Vec2d, radius: f64, color: Color) {
            self.inner.stroke_circle(center, radius, color)
        }
        fn set_line_width(&mut self, width: f64) {
            self.inner.set_line_width(width)
        }
        fn set_stroke_color(&mut self, color: Color) {
            self.inner.set_stroke_color(color)
        }
        fn begin_path(&mut self) {
            self.inner.begin_path()
        }
        fn line_to(&mut self, point: Vec2d) {
            let mapped = self.inner.current_transform().transform_point(point);
            self.world.push(mapped);
            self.inner.line_to(point)
        }
        fn stroke(&mut self) {
            self.inner.stroke()
        }
    }

    collider.draw_debug_info(&mut Probe {
        inner: &mut surface,
        world: &mut world,
    });

    assert_eq!(
        world,
        vec![
            Vec2d::new(98.0, 48.0),
            Vec2d::new(102.0, 48.0),
            Vec2d::new(102.0, 52.0),
            Vec2d::new(98.0, 52.0),
            Vec2d::new(98.0, 48.0),
        ]
    );
    assert_eq!(surface.depth(), 0);
    assert_eq!(surface.commands().first(), Some(&DrawCommand::Save));
    assert_eq!(surface.commands().last(), Some(&DrawCommand::Restore));
}
