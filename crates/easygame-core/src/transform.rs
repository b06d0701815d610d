//! 2D affine transforms.
//!
//! A transform is two basis rows (`axis_x`, `axis_y`) plus a translation and
//! maps a point as a row vector:
//!
//! ```text
//! p' = p · [axis_x; axis_y] + translation
//! ```
//!
//! `a.append(b)` applies `a` first and `b` second. Composition is
//! closed-form, so chains of integer-valued transforms stay exact.

use bytemuck::{Pod, Zeroable};
use glam::{DAffine2, DMat2, Mat3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::surface::DrawingSurface;
use crate::vec2d::Vec2d;

/// 2x2 linear part plus translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct AffineTransform2d {
    axis_x: Vec2d,
    axis_y: Vec2d,
    translation: Vec2d,
}

impl AffineTransform2d {
    /// Identity transform.
    pub const IDENTITY: Self = Self::new(Vec2d::UNIT_X, Vec2d::UNIT_Y, Vec2d::ZERO);

    /// Create a transform from its two basis rows and translation.
    #[inline]
    pub const fn new(axis_x: Vec2d, axis_y: Vec2d, translation: Vec2d) -> Self {
        Self {
            axis_x,
            axis_y,
            translation,
        }
    }

    /// Rotation by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(Vec2d::new(cos, sin), Vec2d::new(-sin, cos), Vec2d::ZERO)
    }

    /// Translation by `(x, y)`.
    #[inline]
    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new(Vec2d::UNIT_X, Vec2d::UNIT_Y, Vec2d::new(x, y))
    }

    /// Axis-aligned scale.
    #[inline]
    pub const fn scaling(x: f64, y: f64) -> Self {
        Self::new(Vec2d::new(x, 0.0), Vec2d::new(0.0, y), Vec2d::ZERO)
    }

    /// Rotate, then scale uniformly, then translate to `position`.
    ///
    /// Note the order: rotation is applied before scale.
    pub fn create(position: Vec2d, rotation: f64, scale: f64) -> Self {
        Self::rotation(rotation)
            .append(&Self::scaling(scale, scale))
            .append(&Self::translation(position.x, position.y))
    }

    #[inline]
    pub fn axis_x(&self) -> Vec2d {
        self.axis_x
    }

    #[inline]
    pub fn axis_y(&self) -> Vec2d {
        self.axis_y
    }

    /// Translation component.
    #[inline]
    pub fn get_translation(&self) -> Vec2d {
        self.translation
    }

    /// Whether this is exactly the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Compose: the result applies `self` first, then `b`.
    pub fn append(&self, b: &Self) -> Self {
        let (x, y, t) = (self.axis_x, self.axis_y, self.translation);
        Self::new(
            Vec2d::new(
                x.x * b.axis_x.x + x.y * b.axis_y.x,
                x.x * b.axis_x.y + x.y * b.axis_y.y,
            ),
            Vec2d::new(
                y.x * b.axis_x.x + y.y * b.axis_y.x,
                y.x * b.axis_x.y + y.y * b.axis_y.y,
            ),
            Vec2d::new(
                t.x * b.axis_x.x + t.y * b.axis_y.x + b.translation.x,
                t.x * b.axis_x.y + t.y * b.axis_y.y + b.translation.y,
            ),
        )
    }

    /// Compose: the result applies `b` first, then `self`.
    /// Equivalent to `b.append(self)`.
    pub fn prepend(&self, b: &Self) -> Self {
        let (x, y, t) = (self.axis_x, self.axis_y, self.translation);
        Self::new(
            Vec2d::new(
                b.axis_x.x * x.x + b.axis_x.y * y.x,
                b.axis_x.x * x.y + b.axis_x.y * y.y,
            ),
            Vec2d::new(
                b.axis_y.x * x.x + b.axis_y.y * y.x,
                b.axis_y.x * x.y + b.axis_y.y * y.y,
            ),
            Vec2d::new(
                b.translation.x * x.x + b.translation.y * y.x + t.x,
                b.translation.x * x.y + b.translation.y * y.y + t.y,
            ),
        )
    }

    #[inline]
    pub fn append_translation(&self, t: Vec2d) -> Self {
        self.append(&Self::translation(t.x, t.y))
    }

    #[inline]
    pub fn append_translation_xy(&self, x: f64, y: f64) -> Self {
        self.append(&Self::translation(x, y))
    }

    /// Append a scale, optionally about `origin` instead of (0, 0).
    pub fn append_scaling(&self, sx: f64, sy: f64, origin: Option<Vec2d>) -> Self {
        let scaling = Self::scaling(sx, sy);
        match origin {
            None => self.append(&scaling),
            Some(origin) => self
                .append_translation(origin.negate())
                .append(&scaling)
                .append_translation(origin),
        }
    }

    /// Append a rotation, optionally about `origin` instead of (0, 0).
    pub fn append_rotation(&self, angle: f64, origin: Option<Vec2d>) -> Self {
        let rotation = Self::rotation(angle);
        match origin {
            None => self.append(&rotation),
            Some(origin) => self
                .append_translation(origin.negate())
                .append(&rotation)
                .append_translation(origin),
        }
    }

    /// Transform a point.
    #[inline]
    pub fn transform_point(&self, p: Vec2d) -> Vec2d {
        Vec2d::new(
            self.axis_x.x * p.x + self.axis_y.x * p.y + self.translation.x,
            self.axis_x.y * p.x + self.axis_y.y * p.y + self.translation.y,
        )
    }

    /// Transform a direction (ignores translation).
    #[inline]
    pub fn transform_direction(&self, v: Vec2d) -> Vec2d {
        Vec2d::new(
            self.axis_x.x * v.x + self.axis_y.x * v.y,
            self.axis_x.y * v.x + self.axis_y.y * v.y,
        )
    }

    /// Determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.axis_x.x * self.axis_y.y - self.axis_x.y * self.axis_y.x
    }

    /// Closed-form inverse. Fails only when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(GeometryError::NotInvertible { determinant: det });
        }
        let (x, y, t) = (self.axis_x, self.axis_y, self.translation);
        Ok(Self::new(
            Vec2d::new(y.y / det, -x.y / det),
            Vec2d::new(-y.x / det, x.x / det),
            Vec2d::new(
                -(y.y * t.x - y.x * t.y) / det,
                (x.y * t.x - x.x * t.y) / det,
            ),
        ))
    }

    /// Componentwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.axis_x.approx_eq(other.axis_x, epsilon)
            && self.axis_y.approx_eq(other.axis_y, epsilon)
            && self.translation.approx_eq(other.translation, epsilon)
    }

    /// Multiply this transform onto the surface's current state.
    pub fn apply_to_surface<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        surface.transform(
            self.axis_x.x,
            self.axis_x.y,
            self.axis_y.x,
            self.axis_y.y,
            self.translation.x,
            self.translation.y,
        );
    }

    /// Convert to glam's column-major affine. `a.append(b)` maps to `b * a`.
    pub fn to_daffine2(&self) -> DAffine2 {
        DAffine2::from_mat2_translation(
            DMat2::from_cols(self.axis_x.into(), self.axis_y.into()),
            self.translation.into(),
        )
    }

    /// Convert to a 3x3 single-precision matrix for GPU upload.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(
            Vec3::new(self.axis_x.x as f32, self.axis_x.y as f32, 0.0),
            Vec3::new(self.axis_y.x as f32, self.axis_y.y as f32, 0.0),
            Vec3::new(self.translation.x as f32, self.translation.y as f32, 1.0),
        )
    }
}

impl Default for AffineTransform2d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<DAffine2> for AffineTransform2d {
    fn from(a: DAffine2) -> Self {
        Self::new(
            a.matrix2.x_axis.into(),
            a.matrix2.y_axis.into(),
            a.translation.into(),
        )
    }
}
