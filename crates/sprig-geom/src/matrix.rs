use std::ops::Mul;

use super::Vec2;

/// A 2D affine transform in column-major form:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
///
/// `m1 * m2` applies `m2` first, then `m1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    /// Column 0, row 0.
    pub a: f32,
    /// Column 0, row 1.
    pub b: f32,
    /// Column 1, row 0.
    pub c: f32,
    /// Column 1, row 1.
    pub d: f32,
    /// Horizontal translation.
    pub tx: f32,
    /// Vertical translation.
    pub ty: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    /// The identity transform.
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// A pure translation.
    pub const fn translate(offset: Vec2) -> Self {
        Self {
            tx: offset.x,
            ty: offset.y,
            ..Self::identity()
        }
    }

    /// A pure scale about the origin.
    pub const fn scale(factors: Vec2) -> Self {
        Self {
            a: factors.x,
            d: factors.y,
            ..Self::identity()
        }
    }

    /// A pure rotation about the origin, in radians.
    pub fn rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Map a point through this transform.
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: self.a * p.x + self.c * p.y + self.tx,
            y: self.b * p.x + self.d * p.y + self.ty,
        }
    }

    /// Map a direction through this transform, ignoring translation.
    pub fn apply_vector(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: self.a * v.x + self.c * v.y,
            y: self.b * v.x + self.d * v.y,
        }
    }

    /// The translation component.
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }

    /// Determinant of the linear part. Zero means the transform collapses
    /// area, for instance through a zero scale factor.
    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// Return true if the matrix is exactly the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Mul for Matrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            tx: self.a * rhs.tx + self.c * rhs.ty + self.tx,
            ty: self.b * rhs.tx + self.d * rhs.ty + self.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    /// Compare two vectors within a small tolerance.
    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix::translate(Vec2::new(3.0, 4.0)) * Matrix::scale(Vec2::new(2.0, 2.0));
        assert_eq!(m * Matrix::identity(), m);
        assert_eq!(Matrix::identity() * m, m);
        assert!(Matrix::default().is_identity());
    }

    #[test]
    fn product_applies_right_first() {
        let t = Matrix::translate(Vec2::new(10.0, 0.0));
        let s = Matrix::scale(Vec2::new(2.0, 2.0));
        let p = Vec2::new(1.0, 1.0);
        // Scale, then translate.
        assert_eq!((t * s).apply(p), Vec2::new(12.0, 2.0));
        // Translate, then scale.
        assert_eq!((s * t).apply(p), Vec2::new(22.0, 2.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let r = Matrix::rotate(FRAC_PI_2);
        assert!(close(r.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
        assert!((r.determinant() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn vectors_ignore_translation() {
        let m = Matrix::translate(Vec2::new(5.0, 5.0)) * Matrix::scale(Vec2::new(3.0, 1.0));
        assert_eq!(m.apply_vector(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 1.0));
        assert_eq!(m.translation(), Vec2::new(5.0, 5.0));
    }
}
