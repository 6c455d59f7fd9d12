//! Brushes
//!
//! A brush answers "what color is device pixel `(x, y)`". Four variants
//! exist: [`SolidBrush`], [`LinearGradientBrush`], [`RadialGradientBrush`]
//! and [`TextureBrush`], wrapped by the [`Brush`] enum.
//!
//! Each brush owns two matrices:
//!
//! - the brush matrix, mapping user space into brush space (set through
//!   [`Brush::set_matrix`] and [`Brush::transform`])
//! - the graphics matrix, the inverse of the canvas transform at paint time
//!
//! The renderer calls [`Brush::update_graphics_matrix`] before every fill,
//! which caches `graphics then brush` as the final matrix used for lookups.
//!
//! Colors are fetched in two steps along a span: [`Brush::color_at`] for the
//! first pixel, then [`Brush::next_color`] for each pixel to its right.
//!
//! # Example
//!
//! ```ignore
//! use fixpaint_core::{Brush, Color, Fixed, LinearGradientBrush, Matrix};
//!
//! let gradient = LinearGradientBrush::new(
//!     Fixed::ZERO, Fixed::ZERO, Fixed::from_int(100), Fixed::from_int(20), Fixed::ZERO,
//! )
//! .with_stops(&[(Fixed::ZERO, Color::BLACK), (Fixed::ONE, Color::WHITE)]);
//!
//! let mut brush = Brush::from(gradient);
//! brush.update_graphics_matrix(&Matrix::IDENTITY);
//! let left = brush.color_at(0, 10, false);
//! let next = brush.next_color();
//! ```

mod gradient;
mod texture;

pub use gradient::{GradientTable, LinearGradientBrush, RadialGradientBrush, RATIO_BITS, RATIO_MAX};
pub use texture::TextureBrush;

use crate::color::Color;
use crate::geometry::Matrix;

/// How a gradient extends past its end stops
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillMode {
    /// Clamp to the end colors
    NoCycle,
    /// Mirror back and forth
    Reflect,
    /// Start over from the first color
    #[default]
    Repeat,
}

/// Map a raw gradient position onto a table index in `0..=RATIO_MAX`
pub fn wrap_ratio(pos: i64, mode: FillMode) -> usize {
    let max = RATIO_MAX as i64;
    let index = match mode {
        FillMode::NoCycle => pos.clamp(0, max),
        FillMode::Repeat => pos.rem_euclid(max),
        FillMode::Reflect => {
            let p = pos.rem_euclid(max * 2);
            if p < max {
                p
            } else {
                max * 2 - p
            }
        }
    };
    index as usize
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared brush placement
// ─────────────────────────────────────────────────────────────────────────────

/// Matrices and fill mode common to every brush variant
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct BrushPlacement {
    pub(crate) fill_mode: FillMode,
    pub(crate) matrix: Matrix,
    pub(crate) graphics_matrix: Matrix,
    pub(crate) final_matrix: Matrix,
}

impl BrushPlacement {
    pub(crate) fn with_matrix(matrix: Matrix) -> Self {
        Self {
            final_matrix: matrix,
            matrix,
            ..Default::default()
        }
    }

    fn refresh(&mut self) {
        let mut m = self.graphics_matrix;
        m.multiply(&self.matrix);
        self.final_matrix = m;
    }
}

/// A single flat color
#[derive(Clone, Debug, PartialEq)]
pub struct SolidBrush {
    color: Color,
    pub(crate) placement: BrushPlacement,
}

impl SolidBrush {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            placement: BrushPlacement::default(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for SolidBrush {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Brush
// ─────────────────────────────────────────────────────────────────────────────

/// Fill color source
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(SolidBrush),
    LinearGradient(LinearGradientBrush),
    RadialGradient(RadialGradientBrush),
    Texture(TextureBrush),
}

impl Default for Brush {
    fn default() -> Self {
        Brush::Solid(SolidBrush::default())
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(SolidBrush::new(color))
    }
}

impl From<SolidBrush> for Brush {
    fn from(brush: SolidBrush) -> Self {
        Brush::Solid(brush)
    }
}

impl From<LinearGradientBrush> for Brush {
    fn from(brush: LinearGradientBrush) -> Self {
        Brush::LinearGradient(brush)
    }
}

impl From<RadialGradientBrush> for Brush {
    fn from(brush: RadialGradientBrush) -> Self {
        Brush::RadialGradient(brush)
    }
}

impl From<TextureBrush> for Brush {
    fn from(brush: TextureBrush) -> Self {
        Brush::Texture(brush)
    }
}

impl Brush {
    /// Solid brush of the given color
    pub fn solid(color: Color) -> Self {
        Self::from(color)
    }

    fn placement(&self) -> &BrushPlacement {
        match self {
            Brush::Solid(b) => &b.placement,
            Brush::LinearGradient(b) => &b.placement,
            Brush::RadialGradient(b) => &b.placement,
            Brush::Texture(b) => &b.placement,
        }
    }

    fn placement_mut(&mut self) -> &mut BrushPlacement {
        match self {
            Brush::Solid(b) => &mut b.placement,
            Brush::LinearGradient(b) => &mut b.placement,
            Brush::RadialGradient(b) => &mut b.placement,
            Brush::Texture(b) => &mut b.placement,
        }
    }

    /// True when every pixel gets the same color
    pub fn is_mono_color(&self) -> bool {
        matches!(self, Brush::Solid(_))
    }

    /// The flat color of a solid brush
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Brush::Solid(b) => Some(b.color),
            _ => None,
        }
    }

    /// Color at device pixel `(x, y)`
    ///
    /// Unless `single_point` is set, the brush also prepares to stream the
    /// pixels to the right through [`Brush::next_color`].
    pub fn color_at(&mut self, x: i32, y: i32, single_point: bool) -> Color {
        match self {
            Brush::Solid(b) => b.color,
            Brush::LinearGradient(b) => b.color_at(x, y, single_point),
            Brush::RadialGradient(b) => b.color_at(x, y, single_point),
            Brush::Texture(b) => b.color_at(x, y),
        }
    }

    /// Color one pixel to the right of the previous lookup
    pub fn next_color(&mut self) -> Color {
        match self {
            Brush::Solid(b) => b.color,
            Brush::LinearGradient(b) => b.next_color(),
            Brush::RadialGradient(b) => b.next_color(),
            Brush::Texture(b) => b.next_color(),
        }
    }

    pub fn fill_mode(&self) -> FillMode {
        self.placement().fill_mode
    }

    pub fn set_fill_mode(&mut self, mode: FillMode) {
        self.placement_mut().fill_mode = mode;
    }

    pub fn with_fill_mode(mut self, mode: FillMode) -> Self {
        self.set_fill_mode(mode);
        self
    }

    /// The user-to-brush matrix
    pub fn matrix(&self) -> Matrix {
        self.placement().matrix
    }

    /// Replace the brush placement with `m` (stored inverted)
    pub fn set_matrix(&mut self, m: &Matrix) {
        let placement = self.placement_mut();
        placement.matrix = m.inverted();
        placement.refresh();
    }

    /// Move the brush by `m` on top of its current placement
    pub fn transform(&mut self, m: &Matrix) {
        let placement = self.placement_mut();
        placement.matrix.multiply(&m.inverted());
        placement.refresh();
    }

    /// Cache the final matrix for the canvas transform `canvas`
    pub fn update_graphics_matrix(&mut self, canvas: &Matrix) {
        let placement = self.placement_mut();
        placement.graphics_matrix = canvas.inverted();
        placement.refresh();
    }

    pub(crate) fn final_matrix(&self) -> Matrix {
        self.placement().final_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Fixed;
    use crate::geometry::Point;

    #[test]
    fn test_wrap_ratio_edges() {
        let max = RATIO_MAX as i64;

        assert_eq!(wrap_ratio(-1, FillMode::Repeat), RATIO_MAX - 1);
        assert_eq!(wrap_ratio(max + 1, FillMode::Repeat), 1);

        assert_eq!(wrap_ratio(-1, FillMode::Reflect), 1);
        assert_eq!(wrap_ratio(max + 1, FillMode::Reflect), RATIO_MAX - 1);

        assert_eq!(wrap_ratio(-1, FillMode::NoCycle), 0);
        assert_eq!(wrap_ratio(max + 1, FillMode::NoCycle), RATIO_MAX);
    }

    #[test]
    fn test_wrap_ratio_in_range_is_identity() {
        for mode in [FillMode::NoCycle, FillMode::Reflect, FillMode::Repeat] {
            assert_eq!(wrap_ratio(0, mode), 0);
            assert_eq!(wrap_ratio(500, mode), 500);
        }
    }

    #[test]
    fn test_solid_brush() {
        let mut brush = Brush::solid(Color::RED);
        assert!(brush.is_mono_color());
        assert_eq!(brush.color_at(10, 10, false), Color::RED);
        assert_eq!(brush.next_color(), Color::RED);
        assert_eq!(Brush::default().solid_color(), Some(Color::WHITE));
    }

    #[test]
    fn test_default_fill_mode_is_repeat() {
        assert_eq!(Brush::default().fill_mode(), FillMode::Repeat);
        let brush = Brush::default().with_fill_mode(FillMode::Reflect);
        assert_eq!(brush.fill_mode(), FillMode::Reflect);
    }

    #[test]
    fn test_set_matrix_stores_inverse() {
        let mut brush = Brush::default();
        let m = Matrix::translation(Fixed::from_int(10), Fixed::from_int(20));
        brush.set_matrix(&m);
        assert_eq!(
            brush.matrix().transform_point(Point::from_int(10, 20)),
            Point::ORIGIN
        );
    }

    #[test]
    fn test_final_matrix_combines_canvas_and_brush() {
        let mut brush = Brush::default();
        brush.set_matrix(&Matrix::translation(Fixed::from_int(5), Fixed::ZERO));
        brush.update_graphics_matrix(&Matrix::scaling(Fixed::from_int(2), Fixed::from_int(2)));
        // device (20, 10) -> user (10, 5) -> brush (5, 5)
        assert_eq!(
            brush.final_matrix().transform_point(Point::from_int(20, 10)),
            Point::from_int(5, 5)
        );
    }

    #[test]
    fn test_transform_accumulates() {
        let mut brush = Brush::default();
        brush.transform(&Matrix::translation(Fixed::from_int(3), Fixed::ZERO));
        brush.transform(&Matrix::translation(Fixed::from_int(4), Fixed::ZERO));
        assert_eq!(
            brush.matrix().transform_point(Point::from_int(7, 0)),
            Point::ORIGIN
        );
    }

    #[test]
    fn test_transform_applies_after_placement() {
        let mut brush = Brush::default();
        brush.set_matrix(&Matrix::translation(Fixed::from_int(10), Fixed::ZERO));
        brush.transform(&Matrix::scaling(Fixed::from_int(2), Fixed::from_int(2)));

        // undo the translation first, then the scale
        assert_eq!(brush.matrix().translate_x, Fixed::from_int(-5));
        assert_eq!(
            brush.matrix().transform_point(Point::from_int(30, 0)),
            Point::from_int(10, 0)
        );
    }
}
