//! Curve flattening
//!
//! [`PathSketch`] sits between a path walk and another [`PathVisitor`],
//! replacing every quadratic and cubic Bézier with a run of
//! [`SUBDIVIDE`] line segments computed by forward differencing.

use crate::fixed::Fixed;
use crate::geometry::Point;
use crate::path::{Path, PathVisitor};

/// Line segments per flattened curve
pub const SUBDIVIDE: i64 = 24;
const SUBDIVIDE2: i64 = SUBDIVIDE * SUBDIVIDE;
const SUBDIVIDE3: i64 = SUBDIVIDE2 * SUBDIVIDE;

/// Raw 16.16 pair for the difference loops
#[derive(Clone, Copy)]
struct Raw {
    x: i64,
    y: i64,
}

impl Raw {
    fn of(p: Point) -> Self {
        Raw {
            x: p.x.raw() as i64,
            y: p.y.raw() as i64,
        }
    }

    fn add(&mut self, other: Raw) {
        self.x += other.x;
        self.y += other.y;
    }

    fn point(self) -> Point {
        Point::new(Fixed(self.x as i32), Fixed(self.y as i32))
    }
}

/// Flattening adapter forwarding straight segments to `inner`
pub struct PathSketch<'a, V: PathVisitor + ?Sized> {
    inner: &'a mut V,
    start: Point,
    current: Point,
}

impl<'a, V: PathVisitor + ?Sized> PathSketch<'a, V> {
    pub fn new(inner: &'a mut V) -> Self {
        Self {
            inner,
            start: Point::EMPTY,
            current: Point::EMPTY,
        }
    }

    pub fn current_point(&self) -> Point {
        self.current
    }

    /// Start of the current sub-path
    pub fn start_point(&self) -> Point {
        self.start
    }

    fn origin(&mut self) -> Point {
        if self.current.is_empty() {
            self.current = Point::ORIGIN;
            self.start = Point::ORIGIN;
            self.inner.move_to(Point::ORIGIN);
        }
        self.current
    }
}

impl<V: PathVisitor + ?Sized> PathVisitor for PathSketch<'_, V> {
    fn begin(&mut self) {
        self.start = Point::EMPTY;
        self.current = Point::EMPTY;
        self.inner.begin();
    }

    fn move_to(&mut self, point: Point) {
        self.start = point;
        self.current = point;
        self.inner.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        self.origin();
        self.current = point;
        self.inner.line_to(point);
    }

    fn quad_to(&mut self, control: Point, end: Point) {
        let (p0, c, p) = (Raw::of(self.origin()), Raw::of(control), Raw::of(end));

        let tmp = Raw {
            x: (p0.x - c.x * 2 + p.x) / SUBDIVIDE2,
            y: (p0.y - c.y * 2 + p.y) / SUBDIVIDE2,
        };
        let ddf = Raw {
            x: tmp.x * 2,
            y: tmp.y * 2,
        };
        let mut df = Raw {
            x: tmp.x + (c.x - p0.x) * 2 / SUBDIVIDE,
            y: tmp.y + (c.y - p0.y) * 2 / SUBDIVIDE,
        };
        let mut f = p0;
        for _ in 0..SUBDIVIDE - 1 {
            f.add(df);
            df.add(ddf);
            self.line_to(f.point());
        }
        self.line_to(end);
    }

    fn curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        let p0 = Raw::of(self.origin());
        let (c1, c2, p) = (Raw::of(control1), Raw::of(control2), Raw::of(end));

        let tmp1 = Raw {
            x: p0.x - c1.x * 2 + c2.x,
            y: p0.y - c1.y * 2 + c2.y,
        };
        let tmp2 = Raw {
            x: (c1.x - c2.x) * 3 - p0.x + p.x,
            y: (c1.y - c2.y) * 3 - p0.y + p.y,
        };
        let mut df = Raw {
            x: (c1.x - p0.x) * 3 / SUBDIVIDE + tmp1.x * 3 / SUBDIVIDE2 + tmp2.x / SUBDIVIDE3,
            y: (c1.y - p0.y) * 3 / SUBDIVIDE + tmp1.y * 3 / SUBDIVIDE2 + tmp2.y / SUBDIVIDE3,
        };
        let mut ddf = Raw {
            x: tmp1.x * 6 / SUBDIVIDE2 + tmp2.x * 6 / SUBDIVIDE3,
            y: tmp1.y * 6 / SUBDIVIDE2 + tmp2.y * 6 / SUBDIVIDE3,
        };
        let dddf = Raw {
            x: tmp2.x * 6 / SUBDIVIDE3,
            y: tmp2.y * 6 / SUBDIVIDE3,
        };
        let mut f = p0;
        for _ in 0..SUBDIVIDE - 1 {
            f.add(df);
            df.add(ddf);
            ddf.add(dddf);
            self.line_to(f.point());
        }
        self.line_to(end);
    }

    fn close(&mut self) {
        if !self.start.is_empty() {
            self.line_to(self.start);
        }
        self.inner.close();
    }

    fn end(&mut self) {
        self.inner.end();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Flattened sub-paths
// ─────────────────────────────────────────────────────────────────────────────

/// A flattened sub-path as a point list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubPath {
    /// Vertices without consecutive duplicates; a closed sub-path does not
    /// repeat its first point at the end
    pub points: Vec<Point>,
    pub closed: bool,
}

#[derive(Default)]
struct SubPathCollector {
    done: Vec<SubPath>,
    open: SubPath,
    start: Point,
}

impl SubPathCollector {
    fn flush(&mut self) {
        let sub = std::mem::take(&mut self.open);
        if !sub.points.is_empty() {
            self.done.push(sub);
        }
    }
}

impl PathVisitor for SubPathCollector {
    fn move_to(&mut self, point: Point) {
        self.flush();
        self.start = point;
        self.open.points.push(point);
    }

    fn line_to(&mut self, point: Point) {
        if self.open.points.is_empty() {
            self.open.points.push(self.start);
        }
        if self.open.points.last() != Some(&point) {
            self.open.points.push(point);
        }
    }

    fn quad_to(&mut self, _control: Point, end: Point) {
        self.line_to(end);
    }

    fn curve_to(&mut self, _control1: Point, _control2: Point, end: Point) {
        self.line_to(end);
    }

    fn close(&mut self) {
        let points = &mut self.open.points;
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        self.open.closed = true;
        self.flush();
    }

    fn end(&mut self) {
        self.flush();
    }
}

/// Flatten `path` into its sub-paths
pub fn flatten_subpaths(path: &Path) -> Vec<SubPath> {
    let mut collector = SubPathCollector {
        start: Point::ORIGIN,
        ..Default::default()
    };
    path.visit(&mut PathSketch::new(&mut collector));
    collector.done
}
