use std::fmt;

use crate::error::{CoreError, Result};
use crate::fixed::Fixed;
use crate::geometry::Point;

/// Axis-aligned rectangle in fixed point
///
/// Always normalized so that `left <= right` and `top <= bottom`. The
/// [`Rect::EMPTY`] sentinel carries NaN in every field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    xmin: Fixed,
    ymin: Fixed,
    xmax: Fixed,
    ymax: Fixed,
}

impl Default for Rect {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        xmin: Fixed::NAN,
        ymin: Fixed::NAN,
        xmax: Fixed::NAN,
        ymax: Fixed::NAN,
    };

    /// Rectangle spanning two corners given in any order
    pub fn new(x1: Fixed, y1: Fixed, x2: Fixed, y2: Fixed) -> Self {
        let mut r = Self::EMPTY;
        r.reset(x1, y1, x2, y2);
        r
    }

    /// Rectangle from origin and size
    pub fn from_xywh(x: Fixed, y: Fixed, width: Fixed, height: Fixed) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Smallest rectangle containing both points
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    pub fn reset(&mut self, x1: Fixed, y1: Fixed, x2: Fixed, y2: Fixed) -> &mut Self {
        self.xmin = x1.min(x2);
        self.xmax = x1.max(x2);
        self.ymin = y1.min(y2);
        self.ymax = y1.max(y2);
        self
    }

    pub fn left(&self) -> Fixed {
        self.xmin
    }

    pub fn top(&self) -> Fixed {
        self.ymin
    }

    pub fn right(&self) -> Fixed {
        self.xmax
    }

    pub fn bottom(&self) -> Fixed {
        self.ymax
    }

    pub fn x(&self) -> Fixed {
        self.xmin
    }

    pub fn y(&self) -> Fixed {
        self.ymin
    }

    pub fn width(&self) -> Fixed {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> Fixed {
        self.ymax - self.ymin
    }

    /// Move the left edge, keeping the right edge
    pub fn set_x(&mut self, x: Fixed) {
        self.reset(x, self.ymin, self.xmax, self.ymax);
    }

    /// Move the top edge, keeping the bottom edge
    pub fn set_y(&mut self, y: Fixed) {
        self.reset(self.xmin, y, self.xmax, self.ymax);
    }

    /// Resize horizontally from the left edge
    pub fn set_width(&mut self, width: Fixed) -> Result<()> {
        if width < Fixed::ZERO {
            return Err(CoreError::InvalidDimension {
                what: "rectangle width",
                value: width.raw() as i64,
            });
        }
        self.xmax = self.xmin + width;
        Ok(())
    }

    /// Resize vertically from the top edge
    pub fn set_height(&mut self, height: Fixed) -> Result<()> {
        if height < Fixed::ZERO {
            return Err(CoreError::InvalidDimension {
                what: "rectangle height",
                value: height.raw() as i64,
            });
        }
        self.ymax = self.ymin + height;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.xmin.is_nan() || self.xmax.is_nan() || self.ymin.is_nan() || self.ymax.is_nan()
    }

    pub fn offset(&mut self, dx: Fixed, dy: Fixed) -> &mut Self {
        if !self.is_empty() {
            self.xmin += dx;
            self.xmax += dx;
            self.ymin += dy;
            self.ymax += dy;
        }
        self
    }

    /// Grow to cover `other`
    pub fn union(&mut self, other: &Rect) -> &mut Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            *self = *other;
        } else {
            let (xmin, ymin) = (self.xmin.min(other.xmin), self.ymin.min(other.ymin));
            let (xmax, ymax) = (self.xmax.max(other.xmax), self.ymax.max(other.ymax));
            self.reset(xmin, ymin, xmax, ymax);
        }
        self
    }

    /// Grow to cover `p`; an empty rectangle becomes the degenerate box at `p`
    pub fn union_point(&mut self, p: Point) -> &mut Self {
        if p.is_empty() {
            return self;
        }
        if self.is_empty() {
            self.reset(p.x, p.y, p.x, p.y);
        } else {
            let (xmin, ymin) = (self.xmin.min(p.x), self.ymin.min(p.y));
            let (xmax, ymax) = (self.xmax.max(p.x), self.ymax.max(p.y));
            self.reset(xmin, ymin, xmax, ymax);
        }
        self
    }

    /// Edges touching counts as intersecting
    pub fn intersects_with(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.xmin <= other.xmax
            && other.xmin <= self.xmax
            && self.ymin <= other.ymax
            && other.ymin <= self.ymax
    }

    /// Overlapping region, or [`Rect::EMPTY`]
    pub fn intersection(&self, other: &Rect) -> Rect {
        if !self.intersects_with(other) {
            return Rect::EMPTY;
        }
        Rect::new(
            self.xmin.max(other.xmin),
            self.ymin.max(other.ymin),
            self.xmax.min(other.xmax),
            self.ymax.min(other.ymax),
        )
    }

    /// Inclusive on all four edges
    pub fn contains(&self, p: Point) -> bool {
        !self.is_empty()
            && self.xmin <= p.x
            && p.x <= self.xmax
            && self.ymin <= p.y
            && p.y <= self.ymax
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle ({},{})-({},{})",
            self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(n: i32) -> Fixed {
        Fixed::from_int(n)
    }

    #[test]
    fn test_reset_normalizes() {
        let inputs = [(0, 0, 10, 5), (10, 5, 0, 0), (10, 0, 0, 5), (-3, 8, 4, -9)];
        for (x1, y1, x2, y2) in inputs {
            let r = Rect::new(fx(x1), fx(y1), fx(x2), fx(y2));
            assert!(r.left() <= r.right());
            assert!(r.top() <= r.bottom());
        }
        let r = Rect::new(fx(10), fx(5), fx(0), fx(0));
        assert_eq!((r.width(), r.height()), (fx(10), fx(5)));
    }

    #[test]
    fn test_empty() {
        assert!(Rect::EMPTY.is_empty());
        assert!(Rect::default().is_empty());
        assert!(!Rect::new(fx(0), fx(0), fx(0), fx(0)).is_empty());
    }

    #[test]
    fn test_set_width_rejects_negative() {
        let mut r = Rect::from_xywh(fx(1), fx(1), fx(4), fx(4));
        assert!(r.set_width(fx(-1)).is_err());
        assert_eq!(r.width(), fx(4));
        r.set_width(fx(9)).unwrap();
        assert_eq!(r.right(), fx(10));
        assert!(r.set_height(fx(-2)).is_err());
    }

    #[test]
    fn test_union() {
        let mut r = Rect::EMPTY;
        r.union(&Rect::new(fx(0), fx(0), fx(5), fx(5)));
        r.union(&Rect::new(fx(3), fx(-2), fx(8), fx(4)));
        assert_eq!(r, Rect::new(fx(0), fx(-2), fx(8), fx(5)));

        r.union(&Rect::EMPTY);
        assert_eq!(r, Rect::new(fx(0), fx(-2), fx(8), fx(5)));
    }

    #[test]
    fn test_union_point() {
        let mut r = Rect::EMPTY;
        r.union_point(Point::from_int(3, 4));
        assert_eq!(r, Rect::new(fx(3), fx(4), fx(3), fx(4)));
        r.union_point(Point::from_int(-1, 10));
        assert_eq!(r, Rect::new(fx(-1), fx(4), fx(3), fx(10)));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(fx(0), fx(0), fx(10), fx(10));
        let b = Rect::new(fx(5), fx(5), fx(20), fx(20));
        let c = Rect::new(fx(11), fx(0), fx(12), fx(1));
        assert!(a.intersects_with(&b));
        assert!(!a.intersects_with(&c));
        assert_eq!(a.intersection(&b), Rect::new(fx(5), fx(5), fx(10), fx(10)));
        assert!(a.intersection(&c).is_empty());
    }

    #[test]
    fn test_contains_and_offset() {
        let mut r = Rect::new(fx(0), fx(0), fx(10), fx(10));
        assert!(r.contains(Point::from_int(10, 0)));
        r.offset(fx(5), fx(5));
        assert!(!r.contains(Point::from_int(2, 2)));
        assert!(r.contains(Point::from_int(15, 15)));
    }
}
