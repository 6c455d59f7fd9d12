use std::fmt;

use crate::fixed::Fixed;
use crate::geometry::Point;

/// 2D affine transform in fixed point
///
/// Maps a point as
///
/// ```text
/// x' = x * scale_x + y * rotate_y + translate_x
/// y' = y * scale_y + x * rotate_x + translate_y
/// ```
///
/// The mutating operations (`rotate`, `translate`, `scale`, `multiply`, ...)
/// append: the receiver's transform is applied first, the new operation
/// second. They return `&mut Self` for chaining.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    pub scale_x: Fixed,
    pub scale_y: Fixed,
    pub rotate_x: Fixed,
    pub rotate_y: Fixed,
    pub translate_x: Fixed,
    pub translate_y: Fixed,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        scale_x: Fixed::ONE,
        scale_y: Fixed::ONE,
        rotate_x: Fixed::ZERO,
        rotate_y: Fixed::ZERO,
        translate_x: Fixed::ZERO,
        translate_y: Fixed::ZERO,
    };

    pub const fn new(
        scale_x: Fixed,
        scale_y: Fixed,
        rotate_x: Fixed,
        rotate_y: Fixed,
        translate_x: Fixed,
        translate_y: Fixed,
    ) -> Self {
        Self {
            scale_x,
            scale_y,
            rotate_x,
            rotate_y,
            translate_x,
            translate_y,
        }
    }

    /// Pure translation
    pub fn translation(dx: Fixed, dy: Fixed) -> Self {
        let mut m = Self::IDENTITY;
        m.translate(dx, dy);
        m
    }

    /// Pure scale around the origin
    pub fn scaling(sx: Fixed, sy: Fixed) -> Self {
        Self::new(sx, sy, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO)
    }

    /// Pure rotation around the origin, angle in radians
    pub fn rotation(angle: Fixed) -> Self {
        let mut m = Self::IDENTITY;
        m.rotate(angle);
        m
    }

    /// Reset to identity
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != Fixed::ZERO
    }

    pub fn determinant(&self) -> Fixed {
        self.scale_x * self.scale_y - self.rotate_x * self.rotate_y
    }

    /// Append a rotation, angle in radians
    pub fn rotate(&mut self, angle: Fixed) -> &mut Self {
        let sin = angle.sin();
        let cos = angle.cos();
        self.multiply(&Matrix::new(cos, cos, sin, -sin, Fixed::ZERO, Fixed::ZERO))
    }

    /// Append a pure skew with the given rotate coefficients
    pub fn rotate_skew(&mut self, rotate_x: Fixed, rotate_y: Fixed) -> &mut Self {
        self.multiply(&Matrix::new(
            Fixed::ONE,
            Fixed::ONE,
            rotate_x,
            rotate_y,
            Fixed::ZERO,
            Fixed::ZERO,
        ))
    }

    /// Append a translation
    pub fn translate(&mut self, dx: Fixed, dy: Fixed) -> &mut Self {
        self.translate_x += dx;
        self.translate_y += dy;
        self
    }

    /// Append a scale around the origin
    pub fn scale(&mut self, sx: Fixed, sy: Fixed) -> &mut Self {
        *self = Matrix::new(
            sx * self.scale_x,
            sy * self.scale_y,
            sy * self.rotate_x,
            sx * self.rotate_y,
            sx * self.translate_x,
            sy * self.translate_y,
        );
        self
    }

    /// Append a shear: `x += kx * y`, `y += ky * x`
    pub fn shear(&mut self, kx: Fixed, ky: Fixed) -> &mut Self {
        self.rotate_skew(ky, kx)
    }

    /// Append `m`: the result applies `self` first, then `m`
    pub fn multiply(&mut self, m: &Matrix) -> &mut Self {
        *self = Matrix::new(
            m.scale_x * self.scale_x + m.rotate_y * self.rotate_x,
            m.rotate_x * self.rotate_y + m.scale_y * self.scale_y,
            m.rotate_x * self.scale_x + m.scale_y * self.rotate_x,
            m.scale_x * self.rotate_y + m.rotate_y * self.scale_y,
            m.scale_x * self.translate_x + m.rotate_y * self.translate_y + m.translate_x,
            m.rotate_x * self.translate_x + m.scale_y * self.translate_y + m.translate_y,
        );
        self
    }

    /// Prepend `m`: the result applies `m` first, then `self`
    pub fn concatenate(&mut self, m: &Matrix) -> &mut Self {
        let mut result = *m;
        result.multiply(self);
        *self = result;
        self
    }

    /// Invert in place
    ///
    /// A singular matrix has no inverse; it is reset to identity instead.
    pub fn invert(&mut self) -> &mut Self {
        let det = self.determinant();
        if det == Fixed::ZERO {
            tracing::debug!("singular matrix {}, inverting to identity", self);
            return self.reset();
        }

        *self = Matrix::new(
            self.scale_y / det,
            self.scale_x / det,
            -(self.rotate_x / det),
            -(self.rotate_y / det),
            (self.translate_y * self.rotate_y - self.translate_x * self.scale_y) / det,
            -((self.translate_y * self.scale_x - self.translate_x * self.rotate_x) / det),
        );
        self
    }

    /// Inverted copy
    pub fn inverted(&self) -> Matrix {
        let mut m = *self;
        m.invert();
        m
    }

    pub fn transform_point(&self, p: Point) -> Point {
        p.transform(self)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix(sx,sy,rx,ry,tx,ty)=({},{},{},{},{},{})",
            self.scale_x,
            self.scale_y,
            self.rotate_x,
            self.rotate_y,
            self.translate_x,
            self.translate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near_identity(m: &Matrix, tolerance: i32) {
        let fields = [
            (m.scale_x, Fixed::ONE),
            (m.scale_y, Fixed::ONE),
            (m.rotate_x, Fixed::ZERO),
            (m.rotate_y, Fixed::ZERO),
            (m.translate_x, Fixed::ZERO),
            (m.translate_y, Fixed::ZERO),
        ];
        for (actual, expected) in fields {
            assert!(
                (actual.raw() - expected.raw()).abs() <= tolerance,
                "not identity: {}",
                m
            );
        }
    }

    #[test]
    fn test_identity() {
        assert!(Matrix::IDENTITY.is_identity());
        assert!(Matrix::default().is_identity());
        let p = Point::from_int(5, 7);
        assert_eq!(Matrix::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn test_multiply_applies_self_first() {
        // scale by 2, then translate by 10
        let mut m = Matrix::scaling(Fixed::from_int(2), Fixed::from_int(2));
        m.multiply(&Matrix::translation(Fixed::from_int(10), Fixed::ZERO));
        assert_eq!(m.transform_point(Point::from_int(1, 1)), Point::from_int(12, 2));

        // concatenate puts the argument first
        let mut m = Matrix::scaling(Fixed::from_int(2), Fixed::from_int(2));
        m.concatenate(&Matrix::translation(Fixed::from_int(10), Fixed::ZERO));
        assert_eq!(m.transform_point(Point::from_int(1, 1)), Point::from_int(22, 2));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let m = Matrix::rotation(Fixed::PI_OVER_2);
        let p = m.transform_point(Point::from_int(10, 0));
        assert!(p.x.abs().to_f32() < 0.02, "x = {}", p.x);
        assert!((p.y.to_f32() - 10.0).abs() < 0.02, "y = {}", p.y);
    }

    #[test]
    fn test_scale_appends() {
        let mut m = Matrix::translation(Fixed::from_int(3), Fixed::from_int(4));
        m.scale(Fixed::from_int(2), Fixed::from_int(3));
        assert_eq!(m.transform_point(Point::from_int(1, 1)), Point::from_int(8, 15));
    }

    #[test]
    fn test_multiply_by_inverse_is_identity() {
        let mut samples = Vec::new();

        let mut m = Matrix::IDENTITY;
        m.translate(Fixed::from_int(25), Fixed::from_int(-40))
            .rotate(Fixed::from_f32(0.7))
            .scale(Fixed::from_f32(1.5), Fixed::from_f32(0.75));
        samples.push(m);

        let mut m = Matrix::IDENTITY;
        m.rotate_skew(Fixed::from_f32(0.3), Fixed::from_f32(-0.2))
            .translate(Fixed::from_int(7), Fixed::from_int(9));
        samples.push(m);

        samples.push(Matrix::scaling(Fixed::from_int(4), Fixed::from_f32(0.5)));

        for m in samples {
            let mut product = m;
            product.multiply(&m.inverted());
            assert_near_identity(&product, 256);
        }
    }

    #[test]
    fn test_singular_inverts_to_identity() {
        let m = Matrix::scaling(Fixed::ZERO, Fixed::ONE);
        assert!(!m.is_invertible());
        assert!(m.inverted().is_identity());
    }

    #[test]
    fn test_shear() {
        let mut m = Matrix::IDENTITY;
        m.shear(Fixed::ONE, Fixed::ZERO);
        assert_eq!(m.transform_point(Point::from_int(2, 3)), Point::from_int(5, 3));
    }
}
