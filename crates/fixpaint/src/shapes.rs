//! Integer shapes
//!
//! Shapes in whole-pixel coordinates. Each converts into a fixed-point
//! [`Path`] through the [`Shape`] trait, which is also the seam for external
//! shape producers such as glyph outline generators.
//!
//! Arc angles are whole degrees, counter-clockwise on screen starting at
//! three o'clock.

use fixpaint_core::{shapes, Fixed, Path, Point};

/// Anything that can be drawn or filled
pub trait Shape {
    fn to_path(&self) -> Path;
}

impl Shape for Path {
    fn to_path(&self) -> Path {
        self.clone()
    }
}

impl<S: Shape + ?Sized> Shape for &S {
    fn to_path(&self) -> Path {
        (**self).to_path()
    }
}

fn fx(v: i32) -> Fixed {
    Fixed::from_int(v)
}

fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::from_int(x, y)).collect()
}

/// Degrees counter-clockwise to radians clockwise
fn screen_angle(degrees: i32) -> Fixed {
    -fx(degrees).to_radians()
}

/// A straight line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Line {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl Shape for Line {
    fn to_path(&self) -> Path {
        shapes::line(Point::from_int(self.x1, self.y1), Point::from_int(self.x2, self.y2))
    }
}

/// An open chain of line segments
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polyline {
    pub points: Vec<(i32, i32)>,
}

impl Polyline {
    pub fn new(points: Vec<(i32, i32)>) -> Self {
        Self { points }
    }
}

impl Shape for Polyline {
    fn to_path(&self) -> Path {
        shapes::polyline(&points(&self.points))
    }
}

/// A closed polygon
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    pub points: Vec<(i32, i32)>,
}

impl Polygon {
    pub fn new(points: Vec<(i32, i32)>) -> Self {
        Self { points }
    }
}

impl Shape for Polygon {
    fn to_path(&self) -> Path {
        shapes::polygon(&points(&self.points))
    }
}

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Right edge, saturating at the `i32` range
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge, saturating at the `i32` range
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Overlap of two rectangles; empty rectangles have zero size
    pub fn intersection(&self, other: &Rectangle) -> Rectangle {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rectangle::new(
            x,
            y,
            right.saturating_sub(x).max(0),
            bottom.saturating_sub(y).max(0),
        )
    }
}

impl Shape for Rectangle {
    fn to_path(&self) -> Path {
        shapes::rect(fx(self.x), fx(self.y), fx(self.right()), fx(self.bottom()))
    }
}

/// A rectangle with elliptical corners
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundRectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Corner ellipse width
    pub arc_width: i32,
    /// Corner ellipse height
    pub arc_height: i32,
}

impl RoundRectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32, arc_width: i32, arc_height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            arc_width,
            arc_height,
        }
    }
}

impl Shape for RoundRectangle {
    fn to_path(&self) -> Path {
        shapes::round_rect(
            fx(self.x),
            fx(self.y),
            fx(self.x + self.width),
            fx(self.y + self.height),
            fx(self.arc_width) / 2,
            fx(self.arc_height) / 2,
        )
    }
}

/// The ellipse inscribed in a box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ellipse {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Ellipse {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Shape for Ellipse {
    fn to_path(&self) -> Path {
        shapes::oval(
            fx(self.x),
            fx(self.y),
            fx(self.x + self.width),
            fx(self.y + self.height),
        )
    }
}

/// An open elliptic arc
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arc {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub start_angle: i32,
    pub sweep_angle: i32,
}

impl Arc {
    pub const fn new(x: i32, y: i32, width: i32, height: i32, start_angle: i32, sweep_angle: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            start_angle,
            sweep_angle,
        }
    }

    fn path(&self, pie: bool) -> Path {
        shapes::arc(
            fx(self.x),
            fx(self.y),
            fx(self.x + self.width),
            fx(self.y + self.height),
            screen_angle(self.start_angle),
            screen_angle(self.sweep_angle),
            pie,
        )
    }
}

impl Shape for Arc {
    fn to_path(&self) -> Path {
        self.path(false)
    }
}

/// An elliptic arc closed through its center
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pie(pub Arc);

impl Pie {
    pub const fn new(x: i32, y: i32, width: i32, height: i32, start_angle: i32, sweep_angle: i32) -> Self {
        Self(Arc::new(x, y, width, height, start_angle, sweep_angle))
    }
}

impl Shape for Pie {
    fn to_path(&self) -> Path {
        self.0.path(true)
    }
}

/// A smooth cardinal spline through a list of points
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    pub points: Vec<(i32, i32)>,
    /// Tangent scale; `0.5` gives a typical smooth curve
    pub tension: Fixed,
    pub closed: bool,
}

impl Curve {
    pub fn new(points: Vec<(i32, i32)>) -> Self {
        Self {
            points,
            tension: Fixed::HALF,
            closed: false,
        }
    }

    pub fn closed(points: Vec<(i32, i32)>) -> Self {
        Self {
            closed: true,
            ..Self::new(points)
        }
    }

    pub fn with_tension(mut self, tension: Fixed) -> Self {
        self.tension = tension;
        self
    }
}

impl Shape for Curve {
    fn to_path(&self) -> Path {
        let segments = self.points.len().saturating_sub(1);
        shapes::smooth_curves(&points(&self.points), 0, segments, self.tension, self.closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixpaint_core::{FillRule, PathCommand, Rect};

    #[test]
    fn test_rectangle_path_bounds() {
        let path = Rectangle::new(2, 3, 10, 5).to_path();
        assert_eq!(path.bounds(), Rect::new(fx(2), fx(3), fx(12), fx(8)));
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_rectangle_intersection() {
        let a = Rectangle::new(0, 0, 10, 10);
        assert_eq!(a.intersection(&Rectangle::new(5, -5, 10, 10)), Rectangle::new(5, 0, 5, 5));
        assert!(a.intersection(&Rectangle::new(20, 20, 5, 5)).is_empty());

        let far = Rectangle::new(i32::MAX - 2, i32::MAX - 2, 10, 10);
        assert_eq!((far.right(), far.bottom()), (i32::MAX, i32::MAX));
        assert!(a.intersection(&far).is_empty());
    }

    #[test]
    fn test_polyline_stays_open() {
        let path = Polyline::new(vec![(0, 0), (5, 5), (10, 0)]).to_path();
        assert!(!path.commands().contains(&PathCommand::Close));
        let path = Polygon::new(vec![(0, 0), (5, 5), (10, 0)]).to_path();
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_arc_degrees_counter_clockwise() {
        // quarter from three o'clock up to twelve o'clock
        let path = Arc::new(0, 0, 20, 20, 0, 90).to_path();
        let end = path.current_point();
        assert!((end.x.to_f32() - 10.0).abs() < 0.05, "got {}", end);
        assert!(end.y.to_f32().abs() < 0.05, "got {}", end);

        let pie = Pie::new(0, 0, 20, 20, 0, 90).to_path();
        assert!(pie.contains(Point::from_int(14, 6), FillRule::NonZero));
        assert!(!pie.contains(Point::from_int(14, 14), FillRule::NonZero));
    }

    #[test]
    fn test_round_rectangle_corner_cut() {
        let path = RoundRectangle::new(0, 0, 20, 20, 10, 10).to_path();
        assert!(!path.contains(Point::from_int(0, 0), FillRule::NonZero));
        assert!(path.contains(Point::from_int(10, 10), FillRule::NonZero));
    }

    #[test]
    fn test_curve_passes_through_points() {
        let curve = Curve::new(vec![(0, 0), (10, 10), (20, 0)]);
        let path = curve.to_path();
        assert_eq!(path.current_point(), Point::from_int(20, 0));
        let closed = Curve::closed(vec![(0, 0), (10, 10), (20, 0)]).to_path();
        assert_eq!(closed.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_shape_by_reference() {
        let ellipse = Ellipse::new(0, 0, 10, 4);
        let by_ref: &dyn Shape = &ellipse;
        assert_eq!(by_ref.to_path(), ellipse.to_path());
    }
}
