//! Stroke outliner
//!
//! [`Outliner`] turns a path and pen attributes into closed polygons that
//! together cover the stroke footprint:
//!
//! - one quad per segment, offset by half the pen width on both sides
//! - one join polygon per interior vertex (and at the start vertex of a
//!   closed sub-path)
//! - one cap polygon at each end of an open sub-path
//!
//! Every polygon is emitted with the same orientation, so filling the result
//! with [`FillRule::NonZero`](crate::FillRule::NonZero) paints their union.

use smallvec::SmallVec;

use crate::fixed::Fixed;
use crate::geometry::Point;
use crate::path::Path;
use crate::pen::{LineCap, LineJoin, Pen};
use crate::sketch::flatten_subpaths;

type Polygon = SmallVec<[Point; 8]>;

/// Expands strokes into fillable outlines
#[derive(Clone, Debug)]
pub struct Outliner {
    half_width: Fixed,
    start_cap: LineCap,
    end_cap: LineCap,
    join: LineJoin,
    miter_limit: Fixed,
    /// Circle offsets of radius `half_width`
    circle: Vec<Point>,
}

impl Outliner {
    pub fn new(pen: &Pen) -> Self {
        let half_width = pen.half_width().abs();
        Self {
            half_width,
            start_cap: pen.start_cap,
            end_cap: pen.end_cap,
            join: pen.join,
            miter_limit: pen.miter_limit,
            circle: circle_offsets(half_width),
        }
    }

    /// Outline of `path`, as closed polygons
    pub fn outline(&self, path: &Path) -> Path {
        let mut out = Path::new();
        if self.half_width == Fixed::ZERO {
            tracing::debug!("zero width pen, outline is empty");
            return out;
        }

        for sub in flatten_subpaths(path) {
            let pts = &sub.points;
            let n = pts.len();

            if n == 1 {
                self.dot(&mut out, pts[0]);
                continue;
            }

            let closed = sub.closed && n > 2;
            let segment_count = if closed { n } else { n - 1 };
            for i in 0..segment_count {
                self.segment(&mut out, pts[i], pts[(i + 1) % n]);
            }

            if closed {
                for i in 0..n {
                    let prev = pts[(i + n - 1) % n];
                    self.join(&mut out, prev, pts[i], pts[(i + 1) % n]);
                }
            } else {
                for i in 1..n - 1 {
                    self.join(&mut out, pts[i - 1], pts[i], pts[i + 1]);
                }
                self.cap(&mut out, self.start_cap, pts[0], pts[1]);
                self.cap(&mut out, self.end_cap, pts[n - 1], pts[n - 2]);
            }
        }
        out
    }

    /// Offset of length `half_width` perpendicular to `a -> b`
    fn normal(&self, a: Point, b: Point) -> Option<Point> {
        let len = Point::distance(a, b).raw() as i64;
        if len == 0 {
            return None;
        }
        let hw = self.half_width.raw() as i64;
        let dx = (b.x - a.x).raw() as i64;
        let dy = (b.y - a.y).raw() as i64;
        Some(Point::new(
            Fixed((-dy * hw / len) as i32),
            Fixed((dx * hw / len) as i32),
        ))
    }

    fn segment(&self, out: &mut Path, a: Point, b: Point) {
        if let Some(n) = self.normal(a, b) {
            emit(out, [a + n, b + n, b - n, a - n].into_iter().collect());
        }
    }

    fn dot(&self, out: &mut Path, p: Point) {
        match self.start_cap {
            LineCap::Round => self.disc(out, p),
            LineCap::Square => {
                let h = self.half_width;
                emit(
                    out,
                    [
                        p.offset(-h, -h),
                        p.offset(h, -h),
                        p.offset(h, h),
                        p.offset(-h, h),
                    ]
                    .into_iter()
                    .collect(),
                );
            }
            LineCap::Butt => {}
        }
    }

    fn disc(&self, out: &mut Path, center: Point) {
        emit(out, self.circle.iter().map(|&o| center + o).collect());
    }

    /// Cap at `end`, where the stroke arrives from `toward`
    fn cap(&self, out: &mut Path, cap: LineCap, end: Point, toward: Point) {
        match cap {
            LineCap::Butt => {}
            LineCap::Round => self.disc(out, end),
            LineCap::Square => {
                let Some(n) = self.normal(toward, end) else {
                    return;
                };
                // Rotating the normal a quarter turn gives the outward direction
                let ahead = Point::new(n.y, -n.x);
                emit(
                    out,
                    [end + n, end + n + ahead, end - n + ahead, end - n]
                        .into_iter()
                        .collect(),
                );
            }
        }
    }

    fn join(&self, out: &mut Path, prev: Point, v: Point, next: Point) {
        let (Some(n0), Some(n1)) = (self.normal(prev, v), self.normal(v, next)) else {
            return;
        };

        let d0 = v - prev;
        let d1 = next - v;
        let cross = d0.x.raw() as i128 * d1.y.raw() as i128 - d0.y.raw() as i128 * d1.x.raw() as i128;
        if cross == 0 {
            // Straight through, or a full reversal that only a round join covers
            let dot = d0.x.raw() as i128 * d1.x.raw() as i128 + d0.y.raw() as i128 * d1.y.raw() as i128;
            if dot < 0 && self.join == LineJoin::Round {
                self.disc(out, v);
            }
            return;
        }

        // The gap opens away from the direction of the turn
        let (o0, o1) = if cross > 0 { (-n0, -n1) } else { (n0, n1) };

        match self.join {
            LineJoin::Round => self.disc(out, v),
            LineJoin::Bevel => emit(out, [v, v + o0, v + o1].into_iter().collect()),
            LineJoin::Miter => match self.miter_tip(v, o0, o1) {
                Some(tip) => emit(out, [v, v + o0, tip, v + o1].into_iter().collect()),
                None => emit(out, [v, v + o0, v + o1].into_iter().collect()),
            },
        }
    }

    /// Miter point for offsets `o0`, `o1`, or `None` past the miter limit
    fn miter_tip(&self, v: Point, o0: Point, o1: Point) -> Option<Point> {
        let hw2 = (self.half_width.raw() as i128).pow(2);
        let dot = o0.x.raw() as i128 * o1.x.raw() as i128 + o0.y.raw() as i128 * o1.y.raw() as i128;
        let denom = hw2 + dot;
        if denom <= 0 {
            return None;
        }

        // miter length / half width = 1 / cos(angle / 2), and
        // cos²(angle / 2) = (hw² + o0·o1) / (2 hw²)
        let limit2 = (self.miter_limit.raw() as i128).pow(2);
        if 2 * hw2 * (1i128 << 32) > limit2 * denom {
            return None;
        }

        let mx = o0.x.raw() as i128 + o1.x.raw() as i128;
        let my = o0.y.raw() as i128 + o1.y.raw() as i128;
        let reach = |m: i128| Fixed((m * hw2 / denom).clamp(i32::MIN as i128, i32::MAX as i128) as i32);
        Some(Point::new(v.x + reach(mx), v.y + reach(my)))
    }
}

/// Signed doubled area, positive for clockwise on screen
fn signed_area(poly: &[Point]) -> i128 {
    let n = poly.len();
    (0..n)
        .map(|i| {
            let (a, b) = (poly[i], poly[(i + 1) % n]);
            a.x.raw() as i128 * b.y.raw() as i128 - b.x.raw() as i128 * a.y.raw() as i128
        })
        .sum()
}

/// Append `poly` as a closed sub-path with positive orientation
fn emit(out: &mut Path, mut poly: Polygon) {
    let area = signed_area(&poly);
    if area == 0 {
        return;
    }
    if area < 0 {
        poly.reverse();
    }
    out.add_move_to(poly[0]);
    for &p in &poly[1..] {
        out.add_line_to(p);
    }
    out.add_close();
}

/// Vertices of a circle of radius `r` around the origin
fn circle_offsets(r: Fixed) -> Vec<Point> {
    let steps = (r.to_int() * 2 + 8).clamp(8, 64);
    (0..steps)
        .map(|k| {
            let angle = Fixed::TWO_PI * k / steps;
            Point::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}
