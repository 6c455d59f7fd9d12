//! Low-level drawing surface
//!
//! [`GraphicsState`] binds a [`Renderer`] to the current pen, brush, paint
//! mode, fill rule and canvas matrix. Coordinates are fixed-point user
//! space; the matrix maps them to pixels. Arc angles are radians, measured
//! clockwise on screen.

use crate::brush::Brush;
use crate::color::Color;
use crate::error::Result;
use crate::fixed::Fixed;
use crate::geometry::{Matrix, Point};
use crate::path::{FillRule, Path};
use crate::pen::Pen;
use crate::raster::{PaintMode, Renderer};
use crate::shapes;

/// Drawing surface with current attributes
#[derive(Clone, Debug)]
pub struct GraphicsState {
    renderer: Renderer,
    pen: Pen,
    brush: Brush,
    paint_mode: PaintMode,
    fill_rule: FillRule,
    matrix: Matrix,
}

impl GraphicsState {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            renderer: Renderer::new(width, height)?,
            pen: default_pen(),
            brush: default_brush(),
            paint_mode: PaintMode::default(),
            fill_rule: FillRule::default(),
            matrix: Matrix::IDENTITY,
        })
    }

    /// Restore default attributes, identity matrix and full clip
    ///
    /// Pixels are kept.
    pub fn reset(&mut self) {
        self.pen = default_pen();
        self.brush = default_brush();
        self.paint_mode = PaintMode::default();
        self.fill_rule = FillRule::default();
        self.matrix = Matrix::IDENTITY;
        self.renderer.reset_clip();
    }

    /// Resize the buffer; pixels are cleared and the clip reset
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.renderer.reset(width, height)
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attributes
    // ─────────────────────────────────────────────────────────────────────────

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    pub fn paint_mode(&self) -> PaintMode {
        self.paint_mode
    }

    pub fn set_paint_mode(&mut self, mode: PaintMode) {
        self.paint_mode = mode;
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    pub fn set_fill_rule(&mut self, rule: FillRule) {
        self.fill_rule = rule;
    }

    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Buffer and clip
    // ─────────────────────────────────────────────────────────────────────────

    pub fn clear(&mut self, color: Color) {
        self.renderer.clear(color);
    }

    /// Row-major ARGB pixels
    pub fn rgb(&self) -> &[Color] {
        self.renderer.buffer()
    }

    pub fn rgb_mut(&mut self) -> &mut [Color] {
        self.renderer.buffer_mut()
    }

    pub fn finalize_buffer(&mut self, color: Color) {
        self.renderer.finalize_buffer(color);
    }

    pub fn set_clip(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.renderer.set_clip(x, y, width, height)
    }

    pub fn clip_x(&self) -> i32 {
        self.renderer.clip_x()
    }

    pub fn clip_y(&self) -> i32 {
        self.renderer.clip_y()
    }

    pub fn clip_width(&self) -> i32 {
        self.renderer.clip_width()
    }

    pub fn clip_height(&self) -> i32 {
        self.renderer.clip_height()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stroking
    // ─────────────────────────────────────────────────────────────────────────

    /// Stroke `path` with the current pen
    ///
    /// The outline is always painted in [`PaintMode::Zero`] under
    /// [`FillRule::NonZero`], whatever the current mode and rule are.
    pub fn draw_path(&mut self, path: &Path) {
        let outline = path.outline(&self.pen);
        self.renderer.draw_path(
            &outline,
            &self.matrix,
            &mut self.pen.brush,
            PaintMode::Zero,
            FillRule::NonZero,
        );
    }

    pub fn draw_line(&mut self, from: Point, to: Point) {
        self.draw_path(&shapes::line(from, to));
    }

    pub fn draw_polyline(&mut self, points: &[Point]) {
        self.draw_path(&shapes::polyline(points));
    }

    pub fn draw_polygon(&mut self, points: &[Point]) {
        self.draw_path(&shapes::polygon(points));
    }

    /// Open cardinal spline through `points[offset..=offset + segments]`
    pub fn draw_curves(&mut self, points: &[Point], offset: usize, segments: usize, tension: Fixed) {
        self.draw_path(&shapes::smooth_curves(points, offset, segments, tension, false));
    }

    pub fn draw_closed_curves(&mut self, points: &[Point], tension: Fixed) {
        self.draw_path(&closed_curves(points, tension));
    }

    pub fn draw_rect(&mut self, x: Fixed, y: Fixed, width: Fixed, height: Fixed) {
        self.draw_path(&shapes::rect(x, y, x + width, y + height));
    }

    pub fn draw_round_rect(
        &mut self,
        x: Fixed,
        y: Fixed,
        width: Fixed,
        height: Fixed,
        rx: Fixed,
        ry: Fixed,
    ) {
        self.draw_path(&shapes::round_rect(x, y, x + width, y + height, rx, ry));
    }

    pub fn draw_oval(&mut self, x: Fixed, y: Fixed, width: Fixed, height: Fixed) {
        self.draw_path(&shapes::oval(x, y, x + width, y + height));
    }

    pub fn draw_arc(
        &mut self,
        x: Fixed,
        y: Fixed,
        width: Fixed,
        height: Fixed,
        start: Fixed,
        sweep: Fixed,
    ) {
        self.draw_path(&shapes::arc(x, y, x + width, y + height, start, sweep, false));
    }

    pub fn draw_pie(
        &mut self,
        x: Fixed,
        y: Fixed,
        width: Fixed,
        height: Fixed,
        start: Fixed,
        sweep: Fixed,
    ) {
        self.draw_path(&shapes::arc(x, y, x + width, y + height, start, sweep, true));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filling
    // ─────────────────────────────────────────────────────────────────────────

    /// Fill `path` with the current brush, paint mode and fill rule
    pub fn fill_path(&mut self, path: &Path) {
        self.renderer.draw_path(
            path,
            &self.matrix,
            &mut self.brush,
            self.paint_mode,
            self.fill_rule,
        );
    }

    pub fn fill_polygon(&mut self, points: &[Point]) {
        self.fill_path(&shapes::polygon(points));
    }

    pub fn fill_closed_curves(&mut self, points: &[Point], tension: Fixed) {
        self.fill_path(&closed_curves(points, tension));
    }

    pub fn fill_rect(&mut self, x: Fixed, y: Fixed, width: Fixed, height: Fixed) {
        self.fill_path(&shapes::rect(x, y, x + width, y + height));
    }

    pub fn fill_round_rect(
        &mut self,
        x: Fixed,
        y: Fixed,
        width: Fixed,
        height: Fixed,
        rx: Fixed,
        ry: Fixed,
    ) {
        self.fill_path(&shapes::round_rect(x, y, x + width, y + height, rx, ry));
    }

    pub fn fill_oval(&mut self, x: Fixed, y: Fixed, width: Fixed, height: Fixed) {
        self.fill_path(&shapes::oval(x, y, x + width, y + height));
    }

    pub fn fill_pie(
        &mut self,
        x: Fixed,
        y: Fixed,
        width: Fixed,
        height: Fixed,
        start: Fixed,
        sweep: Fixed,
    ) {
        self.fill_path(&shapes::arc(x, y, x + width, y + height, start, sweep, true));
    }
}

fn default_pen() -> Pen {
    Pen::with_width(Color(0), Fixed::ONE)
}

fn default_brush() -> Brush {
    Brush::solid(Color(0))
}

fn closed_curves(points: &[Point], tension: Fixed) -> Path {
    shapes::smooth_curves(points, 0, points.len().saturating_sub(1), tension, true)
}
