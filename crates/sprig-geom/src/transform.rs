use std::f32::consts::PI;

use super::{Matrix, Vec2};

/// Position, scale and rotation of an element relative to its parent.
///
/// Rotation is always held in radians. The composed matrix is derived on
/// demand and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation relative to the parent.
    pub position: Vec2,
    /// Scale factors.
    pub scale: Vec2,
    /// Rotation in radians.
    rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

impl Transform {
    /// A transform with the given position, unit scale and no rotation.
    pub fn at(position: impl Into<Vec2>) -> Self {
        Self {
            position: position.into(),
            ..Self::default()
        }
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Rotation in degrees.
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation * 180.0 / PI
    }

    /// Set the rotation in radians. Any value is accepted, including values
    /// outside `[0, 2π)`.
    pub fn set_rotation_radians(&mut self, radians: f32) {
        self.rotation = radians;
    }

    /// Set the rotation in degrees. The value is stored as radians.
    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.rotation = degrees * PI / 180.0;
    }

    /// Compose the transform matrix: translate, then scale, then rotate.
    ///
    /// A point `p` in local space maps to `T · S · R · p`, so rotation
    /// happens about the local origin before scaling and translation.
    pub fn compose(&self) -> Matrix {
        Matrix::translate(self.position) * Matrix::scale(self.scale) * Matrix::rotate(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn degrees_are_stored_as_radians() {
        let mut t = Transform::default();
        t.set_rotation_degrees(180.0);
        assert!((t.rotation() - PI).abs() < 1e-6);
        assert!((t.rotation_degrees() - 180.0).abs() < 1e-4);

        t.set_rotation_radians(-7.5);
        assert_eq!(t.rotation(), -7.5);
    }

    #[test]
    fn default_composes_to_identity() {
        assert!(Transform::default().compose().is_identity());
    }

    #[test]
    fn compose_order_is_translate_scale_rotate() {
        let mut t = Transform::at((10.0, 20.0));
        t.scale = Vec2::new(2.0, 3.0);
        t.set_rotation_degrees(90.0);
        // (1, 0) rotates to (0, 1), scales to (0, 3), translates to (10, 23).
        let p = t.compose().apply(Vec2::new(1.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 23.0).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn compose_is_deterministic(
            x in -1e4f32..1e4,
            y in -1e4f32..1e4,
            sx in -100f32..100.0,
            sy in -100f32..100.0,
            r in -100f32..100.0,
        ) {
            let mut t = Transform::at((x, y));
            t.scale = Vec2::new(sx, sy);
            t.set_rotation_radians(r);
            let a = t.compose();
            let b = t.compose();
            prop_assert_eq!(a.a.to_bits(), b.a.to_bits());
            prop_assert_eq!(a.b.to_bits(), b.b.to_bits());
            prop_assert_eq!(a.c.to_bits(), b.c.to_bits());
            prop_assert_eq!(a.d.to_bits(), b.d.to_bits());
            prop_assert_eq!(a.tx.to_bits(), b.tx.to_bits());
            prop_assert_eq!(a.ty.to_bits(), b.ty.to_bits());
        }

        #[test]
        fn origin_maps_to_position(
            x in -1e4f32..1e4,
            y in -1e4f32..1e4,
            r in -10f32..10.0,
        ) {
            let mut t = Transform::at((x, y));
            t.set_rotation_radians(r);
            prop_assert_eq!(t.compose().apply(Vec2::ZERO), Vec2::new(x, y));
        }
    }
}
