//! # Vector Math
//!
//! 2D vector type and the numeric helpers shared by every other module:
//! cross-product variants and epsilon-tolerant comparisons.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Tolerance used by the epsilon comparisons.
///
/// Also drives the rest snap, the friction tangent guard, and the
/// rectangle-rectangle contact manifold tie-break.
pub const EPSILON: f32 = 0.05;

/// Epsilon-tolerant scalar equality.
#[must_use]
pub fn approx_eq_f32(x: f32, y: f32) -> bool {
    (x - y).abs() < EPSILON
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product, the z component of the 3D cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Cross product of a scalar angular velocity with a vector arm.
    #[must_use]
    pub fn cross_scalar(scalar: f32, v: Self) -> Self {
        Self::new(-scalar * v.y, scalar * v.x)
    }

    /// Counter-clockwise perpendicular.
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Unit vector in the same direction. Callers guard against
    /// near-zero length before normalizing.
    #[must_use]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Component-wise epsilon equality.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        approx_eq_f32(self.x, other.x) && approx_eq_f32(self.y, other.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_antisymmetric() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(-1.0, 2.0);
        assert!((a.cross(b) + b.cross(a)).abs() < 1e-6);
        assert!((a.cross(b) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn cross_scalar_is_perpendicular() {
        let arm = Vec2::new(2.0, 1.0);
        let v = Vec2::cross_scalar(3.0, arm);
        assert!(v.dot(arm).abs() < 1e-6);
        assert_eq!(v, Vec2::new(-3.0, 6.0));
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vec2::new(3.0, -4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn approx_eq_tolerates_small_differences() {
        assert!(Vec2::new(1.0, 1.0).approx_eq(Vec2::new(1.04, 0.96)));
        assert!(!Vec2::new(1.0, 1.0).approx_eq(Vec2::new(1.06, 1.0)));
    }
}
