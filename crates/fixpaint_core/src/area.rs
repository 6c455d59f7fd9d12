//! Region decomposition
//!
//! [`Area`] turns the filled region of a path into non-overlapping
//! trapezoids with horizontal top and bottom edges. The sweep splits the
//! plane at every vertex and every edge crossing, so overlapping sub-paths
//! (such as the pieces produced by the outliner) collapse into one region.

use std::cmp::Ordering;

use crate::fixed::Fixed;
use crate::geometry::{Point, Rect};
use crate::path::{FillRule, Path};
use crate::sketch::flatten_subpaths;

/// A horizontal band slice bounded by two edges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trapezoid {
    pub top: Fixed,
    pub bottom: Fixed,
    pub top_left: Fixed,
    pub top_right: Fixed,
    pub bottom_left: Fixed,
    pub bottom_right: Fixed,
}

impl Trapezoid {
    /// Left and right x at `y`, which must lie in `top..=bottom`
    fn span_at(&self, y: Fixed) -> (Fixed, Fixed) {
        let h = (self.bottom - self.top).raw() as i64;
        let t = (y - self.top).raw() as i64;
        let lerp = |a: Fixed, b: Fixed| {
            if h == 0 {
                a
            } else {
                a + Fixed(((b - a).raw() as i64 * t / h) as i32)
            }
        };
        (
            lerp(self.top_left, self.bottom_left),
            lerp(self.top_right, self.bottom_right),
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    winding: i32,
}

impl Edge {
    fn new(a: Point, b: Point) -> Option<Self> {
        let (ax, ay) = (a.x.raw() as i64, a.y.raw() as i64);
        let (bx, by) = (b.x.raw() as i64, b.y.raw() as i64);
        let (top, bottom, winding) = match ay.cmp(&by) {
            Ordering::Equal => return None,
            Ordering::Less => ((ax, ay), (bx, by), 1),
            Ordering::Greater => ((bx, by), (ax, ay), -1),
        };
        Some(Edge {
            x0: top.0,
            y0: top.1,
            x1: bottom.0,
            y1: bottom.1,
            winding,
        })
    }

    fn x_at(&self, y: i64) -> i64 {
        self.x0 + (self.x1 - self.x0) * (y - self.y0) / (self.y1 - self.y0)
    }

    /// y of the interior crossing with `other`, if any
    fn crossing_y(&self, other: &Edge) -> Option<i64> {
        let (rx, ry) = ((self.x1 - self.x0) as i128, (self.y1 - self.y0) as i128);
        let (sx, sy) = ((other.x1 - other.x0) as i128, (other.y1 - other.y0) as i128);
        let denom = rx * sy - ry * sx;
        if denom == 0 {
            return None;
        }
        let (qx, qy) = ((other.x0 - self.x0) as i128, (other.y0 - self.y0) as i128);
        let t_num = qx * sy - qy * sx;
        let u_num = qx * ry - qy * rx;
        let inside = |num: i128| {
            if denom > 0 {
                num > 0 && num < denom
            } else {
                num < 0 && num > denom
            }
        };
        if !inside(t_num) || !inside(u_num) {
            return None;
        }
        Some(self.y0 + (t_num * ry / denom) as i64)
    }
}

/// A filled region as disjoint trapezoids
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Area {
    trapezoids: Vec<Trapezoid>,
}

impl Area {
    /// Decompose the region `path` encloses under `rule`
    ///
    /// Every sub-path is treated as closed.
    pub fn from_path(path: &Path, rule: FillRule) -> Self {
        let mut edges = Vec::new();
        for sub in flatten_subpaths(path) {
            let n = sub.points.len();
            for i in 0..n {
                if let Some(edge) = Edge::new(sub.points[i], sub.points[(i + 1) % n]) {
                    edges.push(edge);
                }
            }
        }
        if edges.is_empty() {
            return Area::default();
        }

        let mut ys: Vec<i64> = edges.iter().flat_map(|e| [e.y0, e.y1]).collect();
        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                if a.y0.max(b.y0) < a.y1.min(b.y1) {
                    ys.extend(a.crossing_y(b));
                }
            }
        }
        ys.sort_unstable();
        ys.dedup();

        let mut trapezoids = Vec::new();
        let mut active: Vec<(i64, i64, i32)> = Vec::new();
        for band in ys.windows(2) {
            let (top, bottom) = (band[0], band[1]);
            active.clear();
            active.extend(
                edges
                    .iter()
                    .filter(|e| e.y0 <= top && e.y1 >= bottom)
                    .map(|e| (e.x_at(top), e.x_at(bottom), e.winding)),
            );
            active.sort_by_key(|&(xt, xb, _)| xt + xb);

            let mut winding = 0;
            let mut left = None;
            for &(xt, xb, w) in &active {
                let was_inside = rule.is_inside(winding);
                winding += w;
                match (was_inside, rule.is_inside(winding)) {
                    (false, true) => left = Some((xt, xb)),
                    (true, false) => {
                        if let Some((lt, lb)) = left.take() {
                            if xt > lt || xb > lb {
                                trapezoids.push(Trapezoid {
                                    top: Fixed(top as i32),
                                    bottom: Fixed(bottom as i32),
                                    top_left: Fixed(lt as i32),
                                    top_right: Fixed(xt as i32),
                                    bottom_left: Fixed(lb as i32),
                                    bottom_right: Fixed(xb as i32),
                                });
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        tracing::trace!(
            edges = edges.len(),
            trapezoids = trapezoids.len(),
            "area decomposed"
        );
        Area { trapezoids }
    }

    pub fn trapezoids(&self) -> &[Trapezoid] {
        &self.trapezoids
    }

    pub fn is_empty(&self) -> bool {
        self.trapezoids.is_empty()
    }

    /// The trapezoids as closed polygons, all with the same orientation
    pub fn to_path(&self) -> Path {
        let mut path = Path::with_capacity(self.trapezoids.len() * 5);
        for t in &self.trapezoids {
            path.add_move_to(Point::new(t.top_left, t.top));
            path.add_line_to(Point::new(t.top_right, t.top));
            path.add_line_to(Point::new(t.bottom_right, t.bottom));
            path.add_line_to(Point::new(t.bottom_left, t.bottom));
            path.add_close();
        }
        path
    }

    /// Whether `point` lies inside; left and top edges are inclusive
    pub fn contains(&self, point: Point) -> bool {
        self.trapezoids.iter().any(|t| {
            if point.y < t.top || point.y >= t.bottom {
                return false;
            }
            let (left, right) = t.span_at(point.y);
            point.x >= left && point.x < right
        })
    }

    pub fn bounds(&self) -> Rect {
        let mut bounds = Rect::EMPTY;
        for t in &self.trapezoids {
            bounds
                .union_point(Point::new(t.top_left.min(t.bottom_left), t.top))
                .union_point(Point::new(t.top_right.max(t.bottom_right), t.bottom));
        }
        bounds
    }
}
