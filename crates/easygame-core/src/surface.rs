//! Drawing surface capability used for debug output.
//!
//! The core never renders on its own. Hosts implement [`DrawingSurface`] on
//! top of whatever 2D context they own (canvas, egui painter, SVG writer)
//! and colliders push their outlines through it.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::transform::AffineTransform2d;
use crate::vec2d::Vec2d;

/// A stateful 2D drawing context with a save/restore transform stack.
///
/// `transform` has canvas semantics: the six numbers
/// `(axis_x.x, axis_x.y, axis_y.x, axis_y.y, t.x, t.y)` are multiplied onto
/// the current state, so subsequent coordinates pass through them first.
pub trait DrawingSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);
    fn stroke_circle(&mut self, center: Vec2d, radius: f64, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: Color);
    fn begin_path(&mut self);
    fn line_to(&mut self, point: Vec2d);
    fn stroke(&mut self);
}

/// Scoped save/restore of a surface's state.
///
/// Saves on creation and restores on drop, so the surface is left exactly
/// as found on every exit path.
pub struct SurfaceState<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawingSurface + ?Sized> SurfaceState<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawingSurface + ?Sized> Deref for SurfaceState<'_, S> {
    type Target = S;
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for SurfaceState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for SurfaceState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

// ── Recording surface ───────────────────────────────────────────

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Save,
    Restore,
    Transform([f64; 6]),
    StrokeCircle {
        center: Vec2d,
        radius: f64,
        color: Color,
    },
    SetLineWidth(f64),
    SetStrokeColor(Color),
    BeginPath,
    LineTo(Vec2d),
    Stroke,
}

/// A surface that records every call as a display list.
///
/// It also tracks the effective transform the way a canvas would, which lets
/// headless hosts resolve recorded local coordinates into world space.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    current: AffineTransform2d,
    stack: Vec<AffineTransform2d>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded calls, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Effective transform from local drawing coordinates to surface space.
    pub fn current_transform(&self) -> AffineTransform2d {
        self.current
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.current);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restores are ignored, as on a canvas
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        let local = AffineTransform2d::new(Vec2d::new(a, b), Vec2d::new(c, d), Vec2d::new(e, f));
        self.current = local.append(&self.current);
        self.commands.push(DrawCommand::Transform([a, b, c, d, e, f]));
    }

    fn stroke_circle(&mut self, center: Vec2d, radius: f64, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn line_to(&mut self, point: Vec2d) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
