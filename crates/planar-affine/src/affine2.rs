use crate::error::AffineError;
use approx::{AbsDiffEq, RelativeEq};
use planar_algebra::Vec2F64;

/// A 2D affine transform with an implicit `(0, 0, 1)` bottom row.
///
/// Only the six variable entries are stored, column by column:
///
/// ```text
/// [ m0  m2  m4 ]
/// [ m1  m3  m5 ]
/// [  0   0   1 ]
/// ```
///
/// `m0..m3` hold the linear (rotation / scale / shear) part and `m4, m5` the
/// translation. The layout matches `glam::DAffine2::from_cols_array`.
///
/// Values are immutable: every operation returns a new transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2([f64; 6]);

impl Affine2 {
    /// The transform that leaves every point in place.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Create a transform from its six entries `[m0, m1, m2, m3, m4, m5]`.
    #[inline]
    pub const fn new(m: [f64; 6]) -> Self {
        Self(m)
    }

    /// Transform that adds `t` to every point.
    #[inline]
    pub fn translation(t: Vec2F64) -> Self {
        Self([1.0, 0.0, 0.0, 1.0, t.x, t.y])
    }

    /// Uniform scale by the factor `s` around the origin.
    #[inline]
    pub fn scale(s: f64) -> Self {
        Self([s, 0.0, 0.0, s, 0.0, 0.0])
    }

    /// Counter-clockwise rotation by `r` radians around the origin.
    #[inline]
    pub fn rotation(r: f64) -> Self {
        let (sin_r, cos_r) = r.sin_cos();
        Self([cos_r, sin_r, -sin_r, cos_r, 0.0, 0.0])
    }

    /// Borrow the six stored entries.
    #[inline]
    pub fn as_array(&self) -> &[f64; 6] {
        &self.0
    }

    /// Copy out the six stored entries.
    #[inline]
    pub fn to_array(self) -> [f64; 6] {
        self.0
    }

    /// Determinant of the 2x2 linear part.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0] * m[3] - m[1] * m[2]
    }

    /// Whether [`Affine2::inverse`] yields a finite result.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        self.try_inverse().is_ok()
    }

    /// Inverse of the transform.
    ///
    /// # Singular matrices
    ///
    /// The caller must ensure the determinant is non-zero. A singular matrix
    /// divides by zero and the result holds infinities or NaN. Use
    /// [`Affine2::try_inverse`] to get an error instead.
    pub fn inverse(&self) -> Self {
        let m = &self.0;
        let d = self.determinant();
        Self([
            m[3] / d,
            -m[1] / d,
            -m[2] / d,
            m[0] / d,
            (m[2] * m[5] - m[3] * m[4]) / d,
            (m[1] * m[4] - m[0] * m[5]) / d,
        ])
    }

    /// Inverse of the transform, rejecting singular matrices.
    ///
    /// # Errors
    ///
    /// Returns [`AffineError::Singular`] if the determinant is zero or not finite,
    /// and [`AffineError::NonFinite`] if any entry of the inverse overflows or
    /// is NaN.
    pub fn try_inverse(&self) -> Result<Self, AffineError> {
        let determinant = self.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            log::debug!(
                "rejecting inverse of {:?}: determinant {}",
                self.0,
                determinant
            );
            return Err(AffineError::Singular { determinant });
        }

        let inv = self.inverse();
        if !inv.0.iter().all(|v| v.is_finite()) {
            log::debug!(
                "rejecting inverse of {:?}: non-finite result {:?}",
                self.0,
                inv.0
            );
            return Err(AffineError::NonFinite { determinant });
        }
        Ok(inv)
    }

    /// Apply the transform to the point `v`.
    #[inline]
    pub fn transform(&self, v: Vec2F64) -> Vec2F64 {
        let m = &self.0;
        Vec2F64::new(
            v.x * m[0] + v.y * m[2] + m[4],
            v.x * m[1] + v.y * m[3] + m[5],
        )
    }

    /// Apply only the linear part to the offset `v`, ignoring translation.
    #[inline]
    pub fn transform_vector(&self, v: Vec2F64) -> Vec2F64 {
        let m = &self.0;
        Vec2F64::new(v.x * m[0] + v.y * m[2], v.x * m[1] + v.y * m[3])
    }

    /// The translation column `(m4, m5)`.
    #[inline]
    pub fn translation_part(&self) -> Vec2F64 {
        Vec2F64::new(self.0[4], self.0[5])
    }

    /// The same transform with its translation dropped.
    #[inline]
    pub fn linear_part(&self) -> Self {
        let m = &self.0;
        Self([m[0], m[1], m[2], m[3], 0.0, 0.0])
    }

    /// Full 3x3 homogeneous matrix, with the implicit row filled in.
    pub fn to_mat3(&self) -> glam::DMat3 {
        let m = &self.0;
        glam::DMat3::from_cols_array(&[
            m[0], m[1], 0.0, //
            m[2], m[3], 0.0, //
            m[4], m[5], 1.0, //
        ])
    }
}

impl Default for Affine2 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Index<usize> for Affine2 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[f64; 6]> for Affine2 {
    #[inline]
    fn from(m: [f64; 6]) -> Self {
        Self(m)
    }
}

impl From<Affine2> for [f64; 6] {
    #[inline]
    fn from(m: Affine2) -> Self {
        m.0
    }
}

impl From<glam::DAffine2> for Affine2 {
    #[inline]
    fn from(a: glam::DAffine2) -> Self {
        Self(a.to_cols_array())
    }
}

impl From<Affine2> for glam::DAffine2 {
    #[inline]
    fn from(m: Affine2) -> Self {
        glam::DAffine2::from_cols_array(&m.0)
    }
}

/// Composition: `m * n` applies `m` first and `n` second.
///
/// Multiplying on the left therefore inserts a step that runs before the
/// whole existing chain. This is the mirror of glam, where
/// `DAffine2::from(n) * DAffine2::from(m)` gives the same transform.
impl std::ops::Mul<Affine2> for Affine2 {
    type Output = Affine2;

    #[inline]
    fn mul(self, n: Affine2) -> Self::Output {
        let m = &self.0;
        let n = &n.0;
        Self([
            m[0] * n[0] + m[1] * n[2],
            m[1] * n[3] + m[0] * n[1],
            m[2] * n[0] + m[3] * n[2],
            m[3] * n[3] + m[2] * n[1],
            m[4] * n[0] + m[5] * n[2] + n[4],
            m[5] * n[3] + m[4] * n[1] + n[5],
        ])
    }
}

impl std::ops::MulAssign<Affine2> for Affine2 {
    #[inline]
    fn mul_assign(&mut self, n: Affine2) {
        *self = *self * n;
    }
}

impl AbsDiffEq for Affine2 {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Affine2 {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        f64::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
