//! Geometry primitives used across sprig.

/// 2D affine matrix.
mod matrix;
/// Position, scale and rotation value type.
mod transform;
/// Two-component float vector.
mod vec2;

pub use matrix::Matrix;
pub use transform::Transform;
pub use vec2::Vec2;
