//! Vector types module.
//!
//! This module provides vector types for planar geometry:
//! - Vec2F64: 2D vector (double precision)

mod vec2;

pub use vec2::Vec2F64;
