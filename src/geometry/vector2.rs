use derive_more::{Add, AddAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::ops::{Mul, MulAssign};

/// A position or offset in the continuous world plane.
///
/// World space is single precision throughout: the hexagon tables are defined
/// bit-for-bit in `f32`, and rendering consumers expect exactly those values.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Neg,
    Serialize,
    Deserialize,
    parse_display::Display,
)]
#[display("({x}, {y})")]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    /// Euclidean length of this vector.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f32> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}
