//! Graphics - thread-safe drawing surface
//!
//! [`Graphics`] wraps a [`GraphicsState`] behind a mutex and offers an
//! integer-coordinate drawing API on top of it. Every method takes `&self`
//! and holds the lock for that call only, so a surface can be shared between
//! threads through [`SharedGraphics`].
//!
//! Drawing methods accept an optional pen or brush. Passing one makes it the
//! new default; passing `None` uses the current default.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fixpaint_core::{
    Area, Brush, Color, FillRule, Matrix, PaintMode, Path, Pen, GraphicsState,
};

use crate::config::GraphicsConfig;
use crate::error::{GraphicsError, Result};
use crate::image::{self, ArgbImage, BlitOptions, Region};
use crate::pixmap::Pixmap;
use crate::shapes::{Ellipse, Line, Polygon, Polyline, Rectangle, Shape};

/// Color `clear_default` paints
pub const DEFAULT_BACKGROUND: Color = Color(0x00FF_FFFF);

/// Graphics shared between threads
pub type SharedGraphics = Arc<Graphics>;

/// Lock-protected surface state
struct Surface {
    state: GraphicsState,
    prepared: bool,
}

impl Surface {
    fn use_pen(&mut self, pen: Option<&Pen>) {
        if let Some(pen) = pen {
            self.state.set_pen(pen.clone());
        }
    }

    fn use_brush(&mut self, brush: Option<&Brush>) {
        if let Some(brush) = brush {
            self.state.set_brush(brush.clone());
        }
    }

    fn stroke(&mut self, shape: &dyn Shape) {
        self.state.draw_path(&shape.to_path());
    }

    fn fill(&mut self, shape: &dyn Shape) {
        self.state.fill_path(&shape.to_path());
    }

    fn clip(&self) -> Rectangle {
        Rectangle::new(
            self.state.clip_x(),
            self.state.clip_y(),
            self.state.clip_width(),
            self.state.clip_height(),
        )
    }

    fn blit(&mut self, img: &ArgbImage, region: Region, dx: i32, dy: i32, options: BlitOptions) {
        let clip = self.clip();
        let stride = self.state.width();
        image::blit(self.state.rgb_mut(), stride, clip, img, region, dx, dy, options);
    }

    /// Black one pixel pen, white brush, overwrite painting, identity matrix
    fn apply_defaults(&mut self) {
        self.state.reset();
        self.state.set_pen(default_pen());
        self.state.set_brush(default_brush());
        self.state.set_paint_mode(PaintMode::Zero);
        self.state.set_fill_rule(FillRule::NonZero);
    }
}

fn default_pen() -> Pen {
    Pen::new(Color::BLACK)
}

fn default_brush() -> Brush {
    Brush::solid(Color::WHITE)
}

/// A drawing surface of fixed size
pub struct Graphics {
    inner: Mutex<Surface>,
    width: u32,
    height: u32,
}

impl Graphics {
    /// Create a `width` x `height` surface cleared to transparent black
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut surface = Surface {
            state: GraphicsState::new(width, height)?,
            prepared: false,
        };
        surface.apply_defaults();
        tracing::debug!(width, height, "graphics created");
        Ok(Self {
            inner: Mutex::new(surface),
            width,
            height,
        })
    }

    /// Create a surface described by `config`
    pub fn from_config(config: &GraphicsConfig) -> Result<Self> {
        let graphics = Self::new(config.width, config.height)?;
        {
            let mut surface = graphics.lock();
            surface.state.clear(Color(config.background));
            surface.state.set_matrix(config.matrix()?);
            surface.state.set_pen(config.pen()?);
            surface.state.set_brush(config.brush());
            surface.state.set_paint_mode(config.paint_mode.into());
            surface.state.set_fill_rule(config.fill_rule.into());
        }
        Ok(graphics)
    }

    /// Create a surface ready to be shared between threads
    pub fn new_shared(width: u32, height: u32) -> Result<SharedGraphics> {
        Ok(Arc::new(Self::new(width, height)?))
    }

    fn lock(&self) -> MutexGuard<'_, Surface> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Drawing
    // ═══════════════════════════════════════════════════════════════════════════

    /// Stroke the outline of `shape`
    pub fn draw(&self, pen: Option<&Pen>, shape: &dyn Shape) {
        let mut surface = self.lock();
        surface.use_pen(pen);
        surface.stroke(shape);
    }

    /// Fill the interior of `shape`
    pub fn fill(&self, brush: Option<&Brush>, shape: &dyn Shape) {
        let mut surface = self.lock();
        surface.use_brush(brush);
        surface.fill(shape);
    }

    pub fn draw_line(&self, pen: Option<&Pen>, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.draw(pen, &Line::new(x1, y1, x2, y2));
    }

    pub fn draw_rectangle(&self, pen: Option<&Pen>, x: i32, y: i32, width: i32, height: i32) {
        self.draw(pen, &Rectangle::new(x, y, width, height));
    }

    pub fn fill_rectangle(&self, brush: Option<&Brush>, x: i32, y: i32, width: i32, height: i32) {
        self.fill(brush, &Rectangle::new(x, y, width, height));
    }

    pub fn draw_oval(&self, pen: Option<&Pen>, x: i32, y: i32, width: i32, height: i32) {
        self.draw(pen, &Ellipse::new(x, y, width, height));
    }

    pub fn fill_oval(&self, brush: Option<&Brush>, x: i32, y: i32, width: i32, height: i32) {
        self.fill(brush, &Ellipse::new(x, y, width, height));
    }

    pub fn draw_polyline(&self, pen: Option<&Pen>, points: &[(i32, i32)]) {
        self.draw(pen, &Polyline::new(points.to_vec()));
    }

    pub fn draw_polygon(&self, pen: Option<&Pen>, points: &[(i32, i32)]) {
        self.draw(pen, &Polygon::new(points.to_vec()));
    }

    pub fn fill_polygon(&self, brush: Option<&Brush>, points: &[(i32, i32)]) {
        self.fill(brush, &Polygon::new(points.to_vec()));
    }

    /// Fill each shape with `brush`, then stroke it with `pen`
    ///
    /// Unlike [`draw`](Self::draw) and [`fill`](Self::fill), a `None` pen or
    /// brush skips that pass.
    pub fn draw_glyphs<S: Shape>(&self, brush: Option<&Brush>, pen: Option<&Pen>, shapes: &[S]) {
        let mut surface = self.lock();
        for shape in shapes {
            if brush.is_some() {
                surface.use_brush(brush);
                surface.fill(shape);
            }
            if pen.is_some() {
                surface.use_pen(pen);
                surface.stroke(shape);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // State
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn default_pen(&self) -> Pen {
        self.lock().state.pen().clone()
    }

    pub fn set_default_pen(&self, pen: Pen) {
        self.lock().state.set_pen(pen);
    }

    pub fn default_brush(&self) -> Brush {
        self.lock().state.brush().clone()
    }

    pub fn set_default_brush(&self, brush: Brush) {
        self.lock().state.set_brush(brush);
    }

    /// Replace the default pen, and the default brush when one is given
    pub fn set_pen_and_brush(&self, pen: Pen, brush: Option<Brush>) {
        let mut surface = self.lock();
        surface.state.set_pen(pen);
        if let Some(brush) = brush {
            surface.state.set_brush(brush);
        }
    }

    pub fn matrix(&self) -> Matrix {
        self.lock().state.matrix()
    }

    pub fn set_matrix(&self, matrix: Matrix) {
        self.lock().state.set_matrix(matrix);
    }

    pub fn paint_mode(&self) -> PaintMode {
        self.lock().state.paint_mode()
    }

    pub fn set_paint_mode(&self, mode: PaintMode) {
        self.lock().state.set_paint_mode(mode);
    }

    pub fn fill_rule(&self) -> FillRule {
        self.lock().state.fill_rule()
    }

    pub fn set_fill_rule(&self, rule: FillRule) {
        self.lock().state.set_fill_rule(rule);
    }

    /// Current clip, always inside the surface
    pub fn clip(&self) -> Rectangle {
        self.lock().clip()
    }

    /// Restrict drawing to a rectangle; parts outside the surface are dropped
    pub fn set_clip(&self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        Ok(self.lock().state.set_clip(x, y, width, height)?)
    }

    pub fn set_clip_rect(&self, rect: &Rectangle) -> Result<()> {
        self.set_clip(rect.x, rect.y, rect.width, rect.height)
    }

    /// Fill the whole surface with `color`, ignoring the clip
    pub fn clear(&self, color: Color) {
        self.lock().state.clear(color);
    }

    pub fn clear_default(&self) {
        self.clear(DEFAULT_BACKGROUND);
    }

    /// Copy of the row-major ARGB pixels
    pub fn rgb(&self) -> Vec<Color> {
        self.lock().state.rgb().to_vec()
    }

    /// Restore identity matrix, default pen and brush and full clip
    ///
    /// Pixels are kept.
    pub fn reset(&self) {
        self.lock().apply_defaults();
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Images
    // ═══════════════════════════════════════════════════════════════════════════
    //
    // Images are placed in surface pixels; the matrix does not apply.

    /// Merge `img` with its top-left corner at `(dx, dy)`
    pub fn draw_image(&self, img: &ArgbImage, dx: i32, dy: i32) {
        self.lock()
            .blit(img, Region::whole(img), dx, dy, BlitOptions::default());
    }

    /// Merge the `width` x `height` window of `img` starting at `(sx, sy)`
    ///
    /// The window is cut to the image bounds.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_image_region(
        &self,
        img: &ArgbImage,
        dx: i32,
        dy: i32,
        sx: u32,
        sy: u32,
        width: u32,
        height: u32,
    ) {
        let region = Region {
            x: sx,
            y: sy,
            width,
            height,
        };
        self.lock().blit(img, region, dx, dy, BlitOptions::default());
    }

    /// Merge `img`, skipping pixels whose RGB matches `key`
    pub fn draw_image_keyed(&self, img: &ArgbImage, dx: i32, dy: i32, key: Color) {
        let options = BlitOptions {
            key: Some(key),
            alpha: None,
        };
        self.lock().blit(img, Region::whole(img), dx, dy, options);
    }

    /// Merge `img` with every pixel's alpha replaced by `alpha`, skipping
    /// pixels whose RGB matches `key`
    pub fn draw_image_alpha(&self, img: &ArgbImage, dx: i32, dy: i32, key: Color, alpha: u8) {
        let options = BlitOptions {
            key: Some(key),
            alpha: Some(alpha),
        };
        self.lock().blit(img, Region::whole(img), dx, dy, options);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Outlines and export
    // ═══════════════════════════════════════════════════════════════════════════

    /// The region `pen` would paint when stroking `shape`, as a path of
    /// non-overlapping pieces
    pub fn get_outline(pen: &Pen, shape: &dyn Shape) -> Path {
        let outline = shape.to_path().outline(pen);
        Area::from_path(&outline, FillRule::NonZero).to_path()
    }

    pub fn is_prepared(&self) -> bool {
        self.lock().prepared
    }

    /// Mark the pixel data as prepared for upload
    pub fn prepare(&self) -> Result<()> {
        let mut surface = self.lock();
        if surface.prepared {
            return Err(GraphicsError::AlreadyPrepared);
        }
        surface.prepared = true;
        Ok(())
    }

    /// Export the current pixels as RGBA8888
    ///
    /// Each call builds a fresh pixmap; nothing is retained by the surface.
    pub fn consume_pixmap(&self) -> Pixmap {
        let surface = self.lock();
        Pixmap::from_argb(surface.state.rgb(), self.width, self.height)
    }
}

impl std::fmt::Debug for Graphics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graphics")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
