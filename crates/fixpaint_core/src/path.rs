//! Path model and iteration protocol
//!
//! A [`Path`] is an append-only list of [`PathCommand`]s in fixed-point user
//! coordinates. Consumers walk it either by pushing commands into a
//! [`PathVisitor`] with [`Path::visit`], or by pulling [`PathSegment`]s from
//! [`Path::segments`].
//!
//! # Example
//!
//! ```ignore
//! use fixpaint_core::{FillRule, Path, Point};
//!
//! let triangle = Path::new()
//!     .move_to(Point::from_int(0, 0))
//!     .line_to(Point::from_int(100, 0))
//!     .line_to(Point::from_int(50, 80))
//!     .close();
//!
//! assert!(triangle.contains(Point::from_int(50, 20), FillRule::NonZero));
//! ```

use std::slice;

use crate::dasher::Dasher;
use crate::geometry::{Matrix, Point, Rect};
use crate::outline::Outliner;
use crate::pen::Pen;
use crate::sketch::{self, PathSketch};

/// Inside test for filling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// Inside where the winding number is not zero
    #[default]
    NonZero,
    /// Inside where an odd number of edges are crossed
    EvenOdd,
}

impl FillRule {
    /// Whether a winding number counts as inside
    #[inline]
    pub fn is_inside(self, winding: i32) -> bool {
        match self {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding & 1 != 0,
        }
    }
}

/// Path command for building vector paths
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathCommand {
    /// Start a new sub-path
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Quadratic Bézier curve
    QuadTo { control: Point, end: Point },
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current sub-path
    Close,
}

impl PathCommand {
    /// Apply a matrix to every point of the command
    pub fn transformed(self, m: &Matrix) -> PathCommand {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p.transform(m)),
            PathCommand::LineTo(p) => PathCommand::LineTo(p.transform(m)),
            PathCommand::QuadTo { control, end } => PathCommand::QuadTo {
                control: control.transform(m),
                end: end.transform(m),
            },
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicTo {
                control1: control1.transform(m),
                control2: control2.transform(m),
                end: end.transform(m),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }

    /// End point, if the command has one
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadTo { end, .. } | PathCommand::CubicTo { end, .. } => Some(end),
            PathCommand::Close => None,
        }
    }
}

/// Receiver for the push-style path walk
///
/// `begin` and `end` bracket a walk; the rest mirror [`PathCommand`].
pub trait PathVisitor {
    fn begin(&mut self) {}
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn quad_to(&mut self, control: Point, end: Point);
    fn curve_to(&mut self, control1: Point, control2: Point, end: Point);
    fn close(&mut self);
    fn end(&mut self) {}
}

/// One command together with the pen position it starts from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathSegment {
    /// Current point before the command, [`Point::EMPTY`] before any `MoveTo`
    pub from: Point,
    pub command: PathCommand,
}

/// Pull enumerator over a path's segments
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    commands: slice::Iter<'a, PathCommand>,
    current: Point,
    start: Point,
}

impl Iterator for Segments<'_> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<PathSegment> {
        let command = *self.commands.next()?;
        let from = self.current;
        match command {
            PathCommand::MoveTo(p) => {
                self.start = p;
                self.current = p;
            }
            PathCommand::Close => self.current = self.start,
            other => {
                if let Some(p) = other.end_point() {
                    self.current = p;
                }
            }
        }
        Some(PathSegment { from, command })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.commands.size_hint()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path
// ─────────────────────────────────────────────────────────────────────────────

/// A vector path
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn add_move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn add_line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn add_quad_to(&mut self, control: Point, end: Point) {
        self.commands.push(PathCommand::QuadTo { control, end });
    }

    pub fn add_curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
    }

    pub fn add_close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Append every command of `other`
    pub fn add_path(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    /// Move to a point
    pub fn move_to(mut self, point: Point) -> Self {
        self.add_move_to(point);
        self
    }

    /// Line to a point
    pub fn line_to(mut self, point: Point) -> Self {
        self.add_line_to(point);
        self
    }

    /// Quadratic Bézier curve
    pub fn quad_to(mut self, control: Point, end: Point) -> Self {
        self.add_quad_to(control, end);
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, control1: Point, control2: Point, end: Point) -> Self {
        self.add_curve_to(control1, control2, end);
        self
    }

    /// Close the current sub-path
    pub fn close(mut self) -> Self {
        self.add_close();
        self
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Pen position after the last command, or [`Point::EMPTY`]
    pub fn current_point(&self) -> Point {
        let mut segments = self.segments();
        segments.by_ref().for_each(drop);
        segments.current
    }

    /// Pull-style walk over the commands
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            commands: self.commands.iter(),
            current: Point::EMPTY,
            start: Point::EMPTY,
        }
    }

    /// Push every command into `visitor`, bracketed by `begin` and `end`
    pub fn visit<V: PathVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.begin();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => visitor.move_to(p),
                PathCommand::LineTo(p) => visitor.line_to(p),
                PathCommand::QuadTo { control, end } => visitor.quad_to(control, end),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => visitor.curve_to(control1, control2, end),
                PathCommand::Close => visitor.close(),
            }
        }
        visitor.end();
    }

    /// Box around every point, control points included
    pub fn bounds(&self) -> Rect {
        let mut bounds = Rect::EMPTY;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    bounds.union_point(p);
                }
                PathCommand::QuadTo { control, end } => {
                    bounds.union_point(control).union_point(end);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    bounds
                        .union_point(control1)
                        .union_point(control2)
                        .union_point(end);
                }
                PathCommand::Close => {}
            }
        }
        bounds
    }

    /// Apply a matrix to every point in place
    pub fn transform(&mut self, m: &Matrix) {
        for command in &mut self.commands {
            *command = command.transformed(m);
        }
    }

    pub fn transformed(&self, m: &Matrix) -> Path {
        Path {
            commands: self.commands.iter().map(|c| c.transformed(m)).collect(),
        }
    }

    /// Same shape with curves replaced by line runs
    pub fn flatten(&self) -> Path {
        let mut out = Path::with_capacity(self.commands.len());
        self.visit(&mut PathSketch::new(&mut out));
        out
    }

    /// Point-in-fill test on the flattened path
    ///
    /// Open sub-paths are closed implicitly.
    pub fn contains(&self, point: Point, rule: FillRule) -> bool {
        let mut winding = 0;
        for sub in sketch::flatten_subpaths(self) {
            let n = sub.points.len();
            for i in 0..n {
                winding += crossing(sub.points[i], sub.points[(i + 1) % n], point);
            }
        }
        rule.is_inside(winding)
    }

    /// Stroke footprint of this path under `pen` as a fillable path
    ///
    /// A dashed pen is dashed first and the dashes stroked with
    /// [`Pen::dash_segment_pen`].
    pub fn outline(&self, pen: &Pen) -> Path {
        match pen.dash_array() {
            Some(pattern) => {
                let dashed = Dasher::new(pattern).apply(self);
                Outliner::new(&pen.dash_segment_pen()).outline(&dashed)
            }
            None => Outliner::new(pen).outline(self),
        }
    }
}

/// Signed crossing of the edge `a -> b` with the ray going right from `p`
fn crossing(a: Point, b: Point, p: Point) -> i32 {
    let (upward, lo, hi) = if a.y <= b.y { (true, a, b) } else { (false, b, a) };
    if !(lo.y <= p.y && p.y < hi.y) {
        return 0;
    }
    let t = (p.y - lo.y).raw() as i64;
    let dy = (hi.y - lo.y).raw() as i64;
    let x = lo.x.raw() as i64 + (hi.x - lo.x).raw() as i64 * t / dy;
    if x > p.x.raw() as i64 {
        if upward {
            1
        } else {
            -1
        }
    } else {
        0
    }
}

impl PathVisitor for Path {
    fn move_to(&mut self, point: Point) {
        self.add_move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        self.add_line_to(point);
    }

    fn quad_to(&mut self, control: Point, end: Point) {
        self.add_quad_to(control, end);
    }

    fn curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.add_curve_to(control1, control2, end);
    }

    fn close(&mut self) {
        self.add_close();
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Path {
            commands: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathCommand> for Path {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Fixed;

    fn square() -> Path {
        Path::new()
            .move_to(Point::from_int(0, 0))
            .line_to(Point::from_int(10, 0))
            .line_to(Point::from_int(10, 10))
            .line_to(Point::from_int(0, 10))
            .close()
    }

    #[derive(Default)]
    struct Recorder(Vec<&'static str>);

    impl PathVisitor for Recorder {
        fn begin(&mut self) {
            self.0.push("begin");
        }
        fn move_to(&mut self, _: Point) {
            self.0.push("move");
        }
        fn line_to(&mut self, _: Point) {
            self.0.push("line");
        }
        fn quad_to(&mut self, _: Point, _: Point) {
            self.0.push("quad");
        }
        fn curve_to(&mut self, _: Point, _: Point, _: Point) {
            self.0.push("curve");
        }
        fn close(&mut self) {
            self.0.push("close");
        }
        fn end(&mut self) {
            self.0.push("end");
        }
    }

    #[test]
    fn test_visit_order() {
        let path = Path::new()
            .move_to(Point::ORIGIN)
            .quad_to(Point::from_int(1, 1), Point::from_int(2, 0))
            .cubic_to(Point::from_int(3, 1), Point::from_int(4, 1), Point::from_int(5, 0))
            .close();
        let mut recorder = Recorder::default();
        path.visit(&mut recorder);
        assert_eq!(recorder.0, ["begin", "move", "quad", "curve", "close", "end"]);
    }

    #[test]
    fn test_segments_track_current_point() {
        let path = square();
        let froms: Vec<Point> = path.segments().map(|s| s.from).collect();
        assert!(froms[0].is_empty());
        assert_eq!(froms[1], Point::from_int(0, 0));
        assert_eq!(froms[4], Point::from_int(0, 10));
        assert_eq!(path.current_point(), Point::from_int(0, 0));
    }

    #[test]
    fn test_bounds_include_control_points() {
        let path = Path::new()
            .move_to(Point::from_int(0, 0))
            .quad_to(Point::from_int(5, 20), Point::from_int(10, 0));
        assert_eq!(
            path.bounds(),
            Rect::new(Fixed::ZERO, Fixed::ZERO, Fixed::from_int(10), Fixed::from_int(20))
        );
        assert!(Path::new().bounds().is_empty());
    }

    #[test]
    fn test_transformed() {
        let moved = square().transformed(&Matrix::translation(Fixed::from_int(5), Fixed::ZERO));
        assert_eq!(moved.commands()[0], PathCommand::MoveTo(Point::from_int(5, 0)));
        assert_eq!(moved.len(), 5);
    }

    #[test]
    fn test_contains_fill_rules() {
        assert!(square().contains(Point::from_int(5, 5), FillRule::NonZero));
        assert!(!square().contains(Point::from_int(15, 5), FillRule::NonZero));

        // Two overlapping squares with the same orientation
        let mut doubled = square();
        doubled.add_path(&square());
        assert!(doubled.contains(Point::from_int(5, 5), FillRule::NonZero));
        assert!(!doubled.contains(Point::from_int(5, 5), FillRule::EvenOdd));
    }

    #[test]
    fn test_flatten_removes_curves() {
        let path = Path::new()
            .move_to(Point::ORIGIN)
            .cubic_to(Point::from_int(0, 10), Point::from_int(10, 10), Point::from_int(10, 0));
        let flat = path.flatten();
        assert!(flat
            .commands()
            .iter()
            .all(|c| matches!(c, PathCommand::MoveTo(_) | PathCommand::LineTo(_))));
        assert_eq!(flat.current_point(), Point::from_int(10, 0));
    }
}
