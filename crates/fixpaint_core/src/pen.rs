//! Stroke attributes

use crate::brush::Brush;
use crate::color::Color;
use crate::fixed::Fixed;

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Half disc centered on the endpoint
    Round,
    /// Square extending half the width past the endpoint
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineJoin {
    /// Sharp corner, beveled past the miter limit
    #[default]
    Miter,
    /// Round join
    Round,
    /// Flat corner
    Bevel,
}

/// Miter length over half width above which a miter join becomes a bevel
pub const DEFAULT_MITER_LIMIT: Fixed = Fixed::from_int(4);

/// Stroke style: width, caps, join, dashing and the brush painting it
#[derive(Clone, Debug, PartialEq)]
pub struct Pen {
    pub width: Fixed,
    pub start_cap: LineCap,
    pub end_cap: LineCap,
    pub join: LineJoin,
    pub miter_limit: Fixed,
    pub brush: Brush,
    dash: Option<Vec<Fixed>>,
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

impl Pen {
    /// One unit wide solid pen
    pub fn new(color: Color) -> Self {
        Self::with_width(color, Fixed::ONE)
    }

    pub fn with_width(color: Color, width: Fixed) -> Self {
        Self::with_brush(
            Brush::solid(color),
            width,
            LineCap::Butt,
            LineCap::Butt,
            LineJoin::Miter,
        )
    }

    pub fn with_brush(
        brush: Brush,
        width: Fixed,
        start_cap: LineCap,
        end_cap: LineCap,
        join: LineJoin,
    ) -> Self {
        Self {
            width,
            start_cap,
            end_cap,
            join,
            miter_limit: DEFAULT_MITER_LIMIT,
            brush,
            dash: None,
        }
    }

    /// Set both caps
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.start_cap = cap;
        self.end_cap = cap;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    pub fn with_miter_limit(mut self, limit: Fixed) -> Self {
        self.miter_limit = limit;
        self
    }

    /// Set dash pattern, see [`Pen::set_dash_array`]
    pub fn with_dash(mut self, pattern: &[Fixed], offset: usize) -> Self {
        self.set_dash_array(pattern, offset);
        self
    }

    /// Dash pattern starting at entry `offset` of `pattern`
    ///
    /// Fewer than two remaining entries clear dashing.
    pub fn set_dash_array(&mut self, pattern: &[Fixed], offset: usize) {
        self.dash = match pattern.get(offset..) {
            Some(rest) if rest.len() > 1 => Some(rest.to_vec()),
            _ => None,
        };
    }

    pub fn dash_array(&self) -> Option<&[Fixed]> {
        self.dash.as_deref()
    }

    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }

    /// Undashed Butt/Butt/Miter pen of the same width and brush, used to
    /// stroke the pieces a dash pattern produces
    pub fn dash_segment_pen(&self) -> Pen {
        Pen::with_brush(
            self.brush.clone(),
            self.width,
            LineCap::Butt,
            LineCap::Butt,
            LineJoin::Miter,
        )
        .with_miter_limit(self.miter_limit)
    }

    /// Half the stroke width
    pub fn half_width(&self) -> Fixed {
        self.width / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pen = Pen::default();
        assert_eq!(pen.width, Fixed::ONE);
        assert_eq!(pen.start_cap, LineCap::Butt);
        assert_eq!(pen.join, LineJoin::Miter);
        assert_eq!(pen.miter_limit, Fixed::from_int(4));
        assert_eq!(pen.brush.solid_color(), Some(Color::BLACK));
        assert!(!pen.is_dashed());
    }

    #[test]
    fn test_builder() {
        let pen = Pen::with_width(Color::RED, Fixed::from_int(3))
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Bevel);
        assert_eq!(pen.start_cap, LineCap::Round);
        assert_eq!(pen.end_cap, LineCap::Round);
        assert_eq!(pen.join, LineJoin::Bevel);
        assert_eq!(pen.half_width(), Fixed::from_f32(1.5));
    }

    #[test]
    fn test_dash_offset_skips_entries() {
        let on_off = [Fixed::from_int(1), Fixed::from_int(2), Fixed::from_int(3)];
        let pen = Pen::default().with_dash(&on_off, 1);
        assert_eq!(pen.dash_array(), Some(&on_off[1..]));

        let pen = Pen::default().with_dash(&on_off, 2);
        assert!(!pen.is_dashed());

        let pen = Pen::default().with_dash(&on_off, 9);
        assert!(!pen.is_dashed());
    }

    #[test]
    fn test_dash_segment_pen() {
        let pen = Pen::with_width(Color::BLUE, Fixed::from_int(5))
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Round)
            .with_dash(&[Fixed::ONE, Fixed::ONE], 0);
        let segment = pen.dash_segment_pen();
        assert_eq!(segment.start_cap, LineCap::Butt);
        assert_eq!(segment.end_cap, LineCap::Butt);
        assert_eq!(segment.join, LineJoin::Miter);
        assert_eq!(segment.width, Fixed::from_int(5));
        assert!(!segment.is_dashed());
    }
}
