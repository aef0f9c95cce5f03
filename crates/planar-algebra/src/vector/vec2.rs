//! 2D vector type (double precision).
use approx::{AbsDiffEq, RelativeEq};
use glam::DVec2;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D point or offset with `f64` components.
///
/// Arithmetic delegates to [`glam::DVec2`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2F64 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2F64 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector from its components.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a vector from `[x, y]`.
    #[inline]
    pub fn from_array([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }

    /// Convert the vector to `[x, y]`.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        DVec2::from(self).length()
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        DVec2::from(self).dot(rhs.into())
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, rhs: Self) -> f64 {
        DVec2::from(self).distance(rhs.into())
    }
}

impl From<DVec2> for Vec2F64 {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2F64> for DVec2 {
    #[inline]
    fn from(v: Vec2F64) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for Vec2F64 {
    #[inline]
    fn from(arr: [f64; 2]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vec2F64> for [f64; 2] {
    #[inline]
    fn from(v: Vec2F64) -> Self {
        v.to_array()
    }
}

impl Add for Vec2F64 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from(DVec2::from(self) + DVec2::from(rhs))
    }
}

impl Sub for Vec2F64 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from(DVec2::from(self) - DVec2::from(rhs))
    }
}

impl Mul<f64> for Vec2F64 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::from(DVec2::from(self) * rhs)
    }
}

impl Mul<Vec2F64> for f64 {
    type Output = Vec2F64;

    #[inline]
    fn mul(self, rhs: Vec2F64) -> Self::Output {
        Vec2F64::from(self * DVec2::from(rhs))
    }
}

impl Neg for Vec2F64 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from(-DVec2::from(self))
    }
}

impl AbsDiffEq for Vec2F64 {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2F64 {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        f64::EPSILON
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec2f64_basic() {
        let v = Vec2F64::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vec2F64::default(), Vec2F64::ZERO);
    }

    #[test]
    fn test_vec2f64_from_array() {
        let v = Vec2F64::from_array([1.0, 2.0]);
        assert_eq!(v.to_array(), [1.0, 2.0]);
        assert_eq!(Vec2F64::from([3.0, 4.0]), Vec2F64::new(3.0, 4.0));
    }

    #[test]
    fn test_vec2f64_arithmetic() {
        let v1 = Vec2F64::new(1.0, 2.0);
        let v2 = Vec2F64::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2F64::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2F64::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vec2F64::new(2.0, 4.0));
        assert_eq!(2.0 * v1, Vec2F64::new(2.0, 4.0));
        assert_eq!(-v1, Vec2F64::new(-1.0, -2.0));
    }

    #[test]
    fn test_vec2f64_length() {
        let v = Vec2F64::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.dot(Vec2F64::new(1.0, 1.0)), 7.0);
        assert_eq!(Vec2F64::new(1.0, 1.0).distance(Vec2F64::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_vec2f64_glam_roundtrip() {
        let v = Vec2F64::new(-1.5, 2.5);
        let g: glam::DVec2 = v.into();
        assert_eq!(g, glam::DVec2::new(-1.5, 2.5));
        assert_eq!(Vec2F64::from(g), v);
    }

    #[test]
    fn test_vec2f64_approx() {
        let a = Vec2F64::new(1.0, 2.0);
        let b = Vec2F64::new(1.0 + 1e-9, 2.0 - 1e-9);
        assert_ne!(a, b);
        assert_relative_eq!(a, b, epsilon = 1e-6);
        assert!(!approx::relative_eq!(a, Vec2F64::new(1.1, 2.0), epsilon = 1e-6));
    }
}
