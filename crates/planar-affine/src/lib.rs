#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Planar Affine
//!
//! A compact 2D affine transform that stores the six variable entries of a
//! 3x3 homogeneous matrix. The bottom row is always `(0, 0, 1)` and is never
//! stored.
//!
//! ```text
//! [ m0  m2  m4 ]
//! [ m1  m3  m5 ]
//! [  0   0   1 ]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use planar_affine::{Affine2, Vec2F64};
//!
//! // translate, then scale, then rotate by a quarter turn
//! let m = Affine2::translation(Vec2F64::new(1.0, 2.0))
//!     * Affine2::scale(3.0)
//!     * Affine2::rotation(std::f64::consts::FRAC_PI_2);
//!
//! let p = m.transform(Vec2F64::ZERO);
//! assert!(p.distance(Vec2F64::new(-6.0, 3.0)) < 1e-9);
//! ```

/// Affine transform type and its operations.
pub mod affine2;

/// Error types for the affine module.
pub mod error;

pub use affine2::Affine2;
pub use error::AffineError;
pub use planar_algebra::Vec2F64;
