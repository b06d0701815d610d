//! Immutable 2D vector / point value type.
//!
//! Equality is exact and componentwise. Values produced by long chains of
//! floating arithmetic may differ in the last bits; use [`Vec2d::approx_eq`]
//! where a tolerance is wanted.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 2D vector with 64-bit float components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

// Named arithmetic sits alongside the operator impls below.
#[allow(clippy::should_implement_trait)]
impl Vec2d {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// Unit vector along X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// Unit vector along Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians from the X axis.
    #[inline]
    pub fn direction(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance_to(self, p: Self) -> f64 {
        self.distance_to_sqr(p).sqrt()
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_to_sqr(self, p: Self) -> f64 {
        let dx = self.x - p.x;
        let dy = self.y - p.y;
        dx * dx + dy * dy
    }

    /// Length of the vector. Zero and unit lengths skip the square root.
    #[inline]
    pub fn length(self) -> f64 {
        let length_sqr = self.length_sqr();
        if length_sqr == 0.0 {
            return 0.0;
        }
        if length_sqr == 1.0 {
            return 1.0;
        }
        length_sqr.sqrt()
    }

    #[inline]
    pub fn length_sqr(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Componentwise comparison with an absolute tolerance.
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vec2d {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec2d::add(self, rhs)
    }
}

impl Sub for Vec2d {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec2d::sub(self, rhs)
    }
}

impl Mul<f64> for Vec2d {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Vec2d::mul(self, rhs)
    }
}

impl Neg for Vec2d {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl From<DVec2> for Vec2d {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2d> for DVec2 {
    fn from(v: Vec2d) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl fmt::Display for Vec2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
