//! Dash pattern path transformer
//!
//! [`Dasher`] cuts a path into the "on" runs of an alternating on/off length
//! pattern. The pattern phase carries over from one segment to the next and
//! across sub-paths. Curves are flattened first; the output holds open
//! polylines only.

use smallvec::SmallVec;

use crate::fixed::Fixed;
use crate::geometry::Point;
use crate::path::Path;
use crate::sketch::flatten_subpaths;

/// Splits paths into dashes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dasher {
    pattern: SmallVec<[Fixed; 8]>,
}

impl Dasher {
    /// Pattern of alternating on/off lengths, starting with "on"
    pub fn new(pattern: &[Fixed]) -> Self {
        Self::with_offset(pattern, 0)
    }

    /// Pattern starting at entry `offset`
    pub fn with_offset(pattern: &[Fixed], offset: usize) -> Self {
        Self {
            pattern: pattern.get(offset..).unwrap_or_default().iter().copied().collect(),
        }
    }

    pub fn pattern(&self) -> &[Fixed] {
        &self.pattern
    }

    /// Whether the pattern cuts anything at all
    pub fn is_effective(&self) -> bool {
        if self.pattern.len() <= 1 {
            return false;
        }
        let total = self
            .pattern
            .iter()
            .fold(0i64, |sum, len| sum + len.raw().max(0) as i64);
        total > 0
    }

    /// The dashed version of `path`
    ///
    /// Patterns that cannot cut (fewer than two entries, or no positive
    /// length) hand the path back unchanged.
    pub fn apply(&self, path: &Path) -> Path {
        if !self.is_effective() {
            if self.pattern.len() > 1 {
                tracing::debug!("dash pattern has no positive length, drawing solid");
            }
            return path.clone();
        }

        let mut walker = DashWalker {
            pattern: &self.pattern,
            index: 0,
            remaining: self.pattern[0].raw().max(0) as i64,
            on: true,
            current: Vec::new(),
            out: Path::new(),
        };

        for sub in flatten_subpaths(path) {
            let mut points = sub.points;
            if sub.closed && points.len() > 1 {
                points.push(points[0]);
            }
            walker.begin_subpath(points[0]);
            for pair in points.windows(2) {
                walker.walk(pair[0], pair[1]);
            }
            walker.flush();
        }
        walker.out
    }
}

struct DashWalker<'a> {
    pattern: &'a [Fixed],
    index: usize,
    /// Raw length left in the current entry
    remaining: i64,
    on: bool,
    current: Vec<Point>,
    out: Path,
}

impl DashWalker<'_> {
    fn begin_subpath(&mut self, start: Point) {
        self.current.clear();
        if self.on {
            self.current.push(start);
        }
    }

    fn advance(&mut self) {
        self.on = !self.on;
        self.index = (self.index + 1) % self.pattern.len();
        self.remaining = self.pattern[self.index].raw().max(0) as i64;
    }

    fn push(&mut self, p: Point) {
        if self.current.last() != Some(&p) {
            self.current.push(p);
        }
    }

    fn flush(&mut self) {
        if self.current.len() > 1 {
            let mut points = self.current.drain(..);
            if let Some(first) = points.next() {
                self.out.add_move_to(first);
            }
            for p in points {
                self.out.add_line_to(p);
            }
        }
        self.current.clear();
    }

    fn walk(&mut self, a: Point, b: Point) {
        let length = Point::distance(a, b).raw() as i64;
        if length == 0 {
            return;
        }

        let mut pos = 0i64;
        while self.remaining <= length - pos {
            pos += self.remaining;
            let pt = point_along(a, b, pos, length);
            if self.on {
                self.push(pt);
                self.flush();
            } else {
                self.current.clear();
                self.current.push(pt);
            }
            self.advance();
        }

        self.remaining -= length - pos;
        if self.on {
            self.push(b);
        }
    }
}

/// Point `distance` along `a -> b`, both raw lengths
fn point_along(a: Point, b: Point, distance: i64, length: i64) -> Point {
    let dx = (b.x - a.x).raw() as i64;
    let dy = (b.y - a.y).raw() as i64;
    Point::new(
        a.x + Fixed((dx * distance / length) as i32),
        a.y + Fixed((dy * distance / length) as i32),
    )
}
