use smallvec::SmallVec;

use super::{wrap_ratio, BrushPlacement, FillMode};
use crate::color::Color;
use crate::fixed::{Fixed, DECIMAL_BITS};
use crate::geometry::{Matrix, Point, Rect};

/// Bits of gradient table resolution
pub const RATIO_BITS: u32 = 10;
/// Last gradient table index
pub const RATIO_MAX: usize = (1 << RATIO_BITS) - 1;

const TABLE_SIZE: usize = 1 << RATIO_BITS;

/// The box center sits at the start of the linear ramp
const AXIS_OFFSET: i64 = 1 << (RATIO_BITS - 1);

/// Precomputed 1024-entry color ramp built from sorted stops
///
/// Stops are added with [`GradientTable::set_color`]; the ramp is only
/// rebuilt by [`GradientTable::update`].
#[derive(Clone, Debug, PartialEq)]
pub struct GradientTable {
    colors: Vec<Color>,
    stops: SmallVec<[usize; 8]>,
    stale: bool,
    warned: bool,
}

impl Default for GradientTable {
    fn default() -> Self {
        Self {
            colors: vec![Color::TRANSPARENT; TABLE_SIZE],
            stops: SmallVec::new(),
            stale: false,
            warned: false,
        }
    }
}

impl GradientTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a stop at `ratio` (`0..=ONE`), replacing any stop at the same index
    pub fn set_color(&mut self, ratio: Fixed, color: Color) {
        let index = (ratio.raw() >> (DECIMAL_BITS - RATIO_BITS)).clamp(0, RATIO_MAX as i32);
        let index = index as usize;
        self.colors[index] = color;
        if let Err(at) = self.stops.binary_search(&index) {
            self.stops.insert(at, index);
        }
        self.stale = true;
    }

    /// Rebuild the ramp from the current stops
    pub fn update(&mut self) {
        self.stale = false;
        self.warned = false;
        let (Some(&first), Some(&last)) = (self.stops.first(), self.stops.last()) else {
            return;
        };

        let head = self.colors[first];
        self.colors[..first].fill(head);

        for pair in self.stops.windows(2) {
            let (r1, r2) = (pair[0], pair[1]);
            let (c1, c2) = (self.colors[r1], self.colors[r2]);
            for j in r1 + 1..r2 {
                let pos = (256 * (j - r1) / (r2 - r1)) as u32;
                self.colors[j] = Color::interpolate(c1, c2, pos);
            }
        }

        let tail = self.colors[last];
        self.colors[last..].fill(tail);
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Ramp color for a raw position, wrapped by `mode`
    pub fn lookup(&mut self, pos: i64, mode: FillMode) -> Color {
        if self.stale && !self.warned {
            tracing::warn!("gradient stops changed without updating the table");
            self.warned = true;
        }
        self.colors[wrap_ratio(pos, mode)]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Linear gradient
// ─────────────────────────────────────────────────────────────────────────────

/// Gradient varying along one axis through a bounding box
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradientBrush {
    table: GradientTable,
    bounds: Rect,
    center: Point,
    length: Fixed,
    current: i64,
    delta: i64,
    pub(crate) placement: BrushPlacement,
}

impl LinearGradientBrush {
    /// Gradient across the box `(x_min, y_min)-(x_max, y_max)` at `angle` radians
    pub fn new(x_min: Fixed, y_min: Fixed, x_max: Fixed, y_max: Fixed, angle: Fixed) -> Self {
        let bounds = Rect::new(
            x_min,
            y_min,
            if x_max == x_min { x_min + Fixed(1) } else { x_max },
            if y_max == y_min { y_min + Fixed(1) } else { y_max },
        );
        let center = Point::new(x_min + (x_max - x_min) / 2, y_min + (y_max - y_min) / 2);

        let mut matrix = Matrix::translation(-center.x, -center.y);
        matrix.rotate(-angle);

        let theta = (bounds.height() / bounds.width()).atan();
        let diagonal = Point::distance_xy(bounds.height(), bounds.width());
        let spread = (angle - theta).cos().abs().max((angle + theta).cos().abs());
        let mut length = diagonal * spread;
        if length <= Fixed::ZERO {
            tracing::debug!("degenerate linear gradient extent, using one unit");
            length = Fixed::ONE;
        }

        Self {
            table: GradientTable::new(),
            bounds,
            center,
            length,
            current: 0,
            delta: 0,
            placement: BrushPlacement::with_matrix(matrix),
        }
    }

    /// Add every stop and rebuild the table
    pub fn with_stops(mut self, stops: &[(Fixed, Color)]) -> Self {
        for &(ratio, color) in stops {
            self.table.set_color(ratio, color);
        }
        self.table.update();
        self
    }

    pub fn with_fill_mode(mut self, mode: FillMode) -> Self {
        self.placement.fill_mode = mode;
        self
    }

    pub fn set_gradient_color(&mut self, ratio: Fixed, color: Color) {
        self.table.set_color(ratio, color);
    }

    pub fn update_gradient_table(&mut self) {
        self.table.update();
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Projected length of the box onto the gradient axis
    pub fn length(&self) -> Fixed {
        self.length
    }

    fn lookup_current(&mut self) -> Color {
        let pos = (self.current >> DECIMAL_BITS) - AXIS_OFFSET;
        self.table.lookup(pos, self.placement.fill_mode)
    }

    fn axis_position(&self, x: Fixed) -> i64 {
        let v = x.raw() as i64 + (self.length.raw() / 2) as i64;
        (v << (RATIO_BITS + DECIMAL_BITS)) / self.length.raw() as i64
    }

    pub(crate) fn color_at(&mut self, x: i32, y: i32, single_point: bool) -> Color {
        let m = self.placement.final_matrix;
        let p = Point::from_int(x, y).transform(&m);
        self.current = self.axis_position(p.x);
        if !single_point {
            let p1 = Point::from_int(x + 1, y).transform(&m);
            let step = (p1.x - p.x).raw() as i64;
            self.delta = (step << (RATIO_BITS + DECIMAL_BITS)) / self.length.raw() as i64;
        }
        self.lookup_current()
    }

    pub(crate) fn next_color(&mut self) -> Color {
        self.current += self.delta;
        self.lookup_current()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Radial gradient
// ─────────────────────────────────────────────────────────────────────────────

/// Gradient varying with distance from a center point
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradientBrush {
    table: GradientTable,
    center: Point,
    radius: Fixed,
    next: (i32, i32),
    pub(crate) placement: BrushPlacement,
}

impl RadialGradientBrush {
    /// Gradient centered at `(x, y)` reaching its last stop at `radius`
    pub fn new(x: Fixed, y: Fixed, radius: Fixed, angle: Fixed) -> Self {
        let center = Point::new(x, y);
        let mut matrix = Matrix::translation(-x, -y);
        matrix.rotate(-angle);
        Self {
            table: GradientTable::new(),
            center,
            radius,
            next: (0, 0),
            placement: BrushPlacement::with_matrix(matrix),
        }
    }

    pub fn with_stops(mut self, stops: &[(Fixed, Color)]) -> Self {
        for &(ratio, color) in stops {
            self.table.set_color(ratio, color);
        }
        self.table.update();
        self
    }

    pub fn with_fill_mode(mut self, mode: FillMode) -> Self {
        self.placement.fill_mode = mode;
        self
    }

    pub fn set_gradient_color(&mut self, ratio: Fixed, color: Color) {
        self.table.set_color(ratio, color);
    }

    pub fn update_gradient_table(&mut self) {
        self.table.update();
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> Fixed {
        self.radius
    }

    fn sample(&mut self, x: i32, y: i32) -> Color {
        // The brush matrix already moves the center to the origin
        let p = Point::from_int(x, y).transform(&self.placement.final_matrix);
        let ratio = p.length() / self.radius;
        let pos = (ratio.raw() >> (DECIMAL_BITS - RATIO_BITS)) as i64;
        self.table.lookup(pos, self.placement.fill_mode)
    }

    pub(crate) fn color_at(&mut self, x: i32, y: i32, _single_point: bool) -> Color {
        self.next = (x + 1, y);
        self.sample(x, y)
    }

    pub(crate) fn next_color(&mut self) -> Color {
        let (x, y) = self.next;
        self.next = (x + 1, y);
        self.sample(x, y)
    }
}
