use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::fixed::{Fixed, DECIMAL_BITS};
use crate::geometry::Matrix;

/// A 2D point in fixed-point coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Fixed,
    pub y: Fixed,
}

impl Point {
    /// Sentinel meaning "no point"
    pub const EMPTY: Point = Point {
        x: Fixed::NAN,
        y: Fixed::NAN,
    };

    pub const ORIGIN: Point = Point {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
    };

    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Point at integer pixel coordinates
    pub const fn from_int(x: i32, y: i32) -> Self {
        Self {
            x: Fixed::from_int(x),
            y: Fixed::from_int(y),
        }
    }

    pub fn from_f32(x: f32, y: f32) -> Self {
        Self {
            x: Fixed::from_f32(x),
            y: Fixed::from_f32(y),
        }
    }

    pub fn reset(&mut self, x: Fixed, y: Fixed) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    pub fn offset(self, dx: Fixed, dy: Fixed) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Map through an affine matrix
    pub fn transform(self, m: &Matrix) -> Point {
        Point::new(
            self.x * m.scale_x + self.y * m.rotate_y + m.translate_x,
            self.y * m.scale_y + self.x * m.rotate_x + m.translate_y,
        )
    }

    /// Distance between two points
    pub fn distance(a: Point, b: Point) -> Fixed {
        Self::distance_xy(a.x - b.x, a.y - b.y)
    }

    /// Length of the vector `(dx, dy)`
    ///
    /// Seeds with the octagonal estimate `max + min / 2` and refines with two
    /// Newton iterations in 64-bit arithmetic. Axis-aligned vectors are exact.
    pub fn distance_xy(dx: Fixed, dy: Fixed) -> Fixed {
        let dx = dx.abs().0 as i64;
        let dy = dy.abs().0 as i64;
        if dx == 0 {
            return Fixed(dy as i32);
        }
        if dy == 0 {
            return Fixed(dx as i32);
        }

        let len = ((dx * dx) >> DECIMAL_BITS) + ((dy * dy) >> DECIMAL_BITS);
        let mut s = (dx + dy) - (dx.min(dy) >> 1);
        for _ in 0..2 {
            s = (s + (len << DECIMAL_BITS) / s) >> 1;
        }
        Fixed(s as i32)
    }

    /// Length of this point seen as a vector
    pub fn length(self) -> Fixed {
        Self::distance_xy(self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        assert!(Point::EMPTY.is_empty());
        assert!(!Point::ORIGIN.is_empty());
    }

    #[test]
    fn test_axis_aligned_distance_is_exact() {
        assert_eq!(
            Point::distance(Point::from_int(0, 0), Point::from_int(100, 0)),
            Fixed::from_int(100)
        );
        assert_eq!(Point::distance_xy(Fixed::ZERO, Fixed::from_int(-7)), Fixed::from_int(7));
    }

    #[test]
    fn test_diagonal_distance() {
        let d = Point::distance(Point::from_int(0, 0), Point::from_int(3, 4));
        assert!((d.to_f32() - 5.0).abs() < 0.01, "got {}", d);

        let d = Point::distance_xy(Fixed::from_int(100), Fixed::from_int(100));
        assert!((d.to_f32() - 141.421).abs() < 0.05, "got {}", d);
    }

    #[test]
    fn test_transform_translate() {
        let m = Matrix::translation(Fixed::from_int(10), Fixed::from_int(-5));
        assert_eq!(Point::from_int(1, 2).transform(&m), Point::from_int(11, -3));
    }

    #[test]
    fn test_reset() {
        let mut p = Point::ORIGIN;
        p.reset(Fixed::ONE, Fixed::from_int(2));
        assert_eq!(p, Point::from_int(1, 2));
    }
}
