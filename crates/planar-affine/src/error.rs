/// Errors raised by checked affine operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AffineError {
    /// The linear part has no inverse.
    #[error("matrix is singular (determinant {determinant})")]
    Singular {
        /// The determinant that was rejected.
        determinant: f64,
    },

    /// The inverse overflowed or picked up a NaN from a non-finite entry.
    #[error("inverse has non-finite entries (determinant {determinant})")]
    NonFinite {
        /// The determinant of the matrix being inverted.
        determinant: f64,
    },
}
