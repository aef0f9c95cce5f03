#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Planar Algebra
//!
//! Plain value types shared by the planar crates. The types are thin structs
//! over their components and delegate arithmetic to `glam`.
//!
//! ## Example
//!
//! ```rust
//! use planar_algebra::Vec2F64;
//!
//! let a = Vec2F64::new(3.0, 5.0);
//! let b = Vec2F64::new(-1.0, -2.0);
//! assert_eq!((a + b).length(), 13f64.sqrt());
//! ```

mod vector;

pub use vector::Vec2F64;
