//! Scanline renderer
//!
//! [`Renderer`] owns a row-major ARGB pixel buffer and fills paths into it
//! one scanline at a time. Rows are sampled at their vertical center
//! (`y + 0.5`); a pixel belongs to a span when its horizontal center
//! (`x + 0.5`) lies inside the region under the active [`FillRule`].
//!
//! There is no coverage anti-aliasing: every pixel is either painted or not.

use crate::brush::Brush;
use crate::color::Color;
use crate::error::{CoreError, Result};
use crate::fixed::DECIMAL_BITS;
use crate::geometry::{Matrix, Point};
use crate::path::{FillRule, Path};
use crate::sketch::flatten_subpaths;

/// How painted pixels combine with the buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaintMode {
    /// Overwrite the destination
    Zero,
    /// XOR the source into the destination
    #[default]
    Xor,
}

impl PaintMode {
    #[inline]
    fn apply(self, dst: &mut Color, src: Color) {
        match self {
            PaintMode::Zero => *dst = src,
            PaintMode::Xor => dst.0 ^= src.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edges
// ─────────────────────────────────────────────────────────────────────────────

/// Non-horizontal edge in raw 16.16 units, top to bottom
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
        if ay == by {
            return None;
        }
        let ((x0, y0), (x1, y1), winding) = if ay < by {
            ((ax, ay), (bx, by), 1)
        } else {
            ((bx, by), (ax, ay), -1)
        };
        Some(Edge {
            x0,
            y0,
            x1,
            y1,
            winding,
        })
    }

    /// Half-open: the bottom end belongs to the next edge
    #[inline]
    fn covers(&self, y: i64) -> bool {
        self.y0 <= y && y < self.y1
    }

    #[inline]
    fn x_at(&self, y: i64) -> i64 {
        self.x0 + (self.x1 - self.x0) * (y - self.y0) / (self.y1 - self.y0)
    }
}

const HALF_RAW: i64 = 1 << (DECIMAL_BITS - 1);

/// First pixel whose center is at or right of raw x
#[inline]
fn first_pixel(x: i64) -> i64 {
    (x - HALF_RAW + (1 << DECIMAL_BITS) - 1) >> DECIMAL_BITS
}

// ─────────────────────────────────────────────────────────────────────────────
// Renderer
// ─────────────────────────────────────────────────────────────────────────────

/// Pixel buffer plus clip rectangle
#[derive(Clone, Debug)]
pub struct Renderer {
    width: u32,
    height: u32,
    buffer: Vec<Color>,
    clip_x: i32,
    clip_y: i32,
    clip_width: i32,
    clip_height: i32,
}

impl Renderer {
    /// A transparent `width` x `height` buffer, clipped to its full extent
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_size(width, height)?;
        Ok(Self {
            width,
            height,
            buffer: vec![Color::TRANSPARENT; width as usize * height as usize],
            clip_x: 0,
            clip_y: 0,
            clip_width: width as i32,
            clip_height: height as i32,
        })
    }

    /// Resize, clear to transparent and reset the clip
    pub fn reset(&mut self, width: u32, height: u32) -> Result<()> {
        check_size(width, height)?;
        self.width = width;
        self.height = height;
        self.buffer.clear();
        self.buffer.resize(width as usize * height as usize, Color::TRANSPARENT);
        self.reset_clip();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn buffer(&self) -> &[Color] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [Color] {
        &mut self.buffer
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.buffer[y as usize * self.width as usize + x as usize])
    }

    /// Set every pixel to `color`, ignoring the clip
    pub fn clear(&mut self, color: Color) {
        self.buffer.fill(color);
    }

    /// Replace fully transparent pixels by `color`
    pub fn finalize_buffer(&mut self, color: Color) {
        for pixel in &mut self.buffer {
            if pixel.alpha() == 0 {
                *pixel = color;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Clip
    // ─────────────────────────────────────────────────────────────────────────

    /// Restrict painting to a rectangle, clamped to the buffer
    pub fn set_clip(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        if width < 0 {
            return Err(CoreError::InvalidDimension {
                what: "clip width",
                value: width as i64,
            });
        }
        if height < 0 {
            return Err(CoreError::InvalidDimension {
                what: "clip height",
                value: height as i64,
            });
        }
        let x0 = x.clamp(0, self.width as i32);
        let y0 = y.clamp(0, self.height as i32);
        let x1 = x.saturating_add(width).clamp(x0, self.width as i32);
        let y1 = y.saturating_add(height).clamp(y0, self.height as i32);
        self.clip_x = x0;
        self.clip_y = y0;
        self.clip_width = x1 - x0;
        self.clip_height = y1 - y0;
        Ok(())
    }

    pub fn reset_clip(&mut self) {
        self.clip_x = 0;
        self.clip_y = 0;
        self.clip_width = self.width as i32;
        self.clip_height = self.height as i32;
    }

    pub fn clip_x(&self) -> i32 {
        self.clip_x
    }

    pub fn clip_y(&self) -> i32 {
        self.clip_y
    }

    pub fn clip_width(&self) -> i32 {
        self.clip_width
    }

    pub fn clip_height(&self) -> i32 {
        self.clip_height
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filling
    // ─────────────────────────────────────────────────────────────────────────

    /// Fill the region `path` encloses, after transforming it by `matrix`
    ///
    /// Open sub-paths are closed implicitly.
    pub fn draw_path(
        &mut self,
        path: &Path,
        matrix: &Matrix,
        brush: &mut Brush,
        mode: PaintMode,
        rule: FillRule,
    ) {
        brush.update_graphics_matrix(matrix);

        let mut edges = Vec::new();
        for sub in flatten_subpaths(&path.transformed(matrix)) {
            let n = sub.points.len();
            for i in 0..n {
                edges.extend(Edge::new(sub.points[i], sub.points[(i + 1) % n]));
            }
        }
        if edges.is_empty() || self.clip_width == 0 || self.clip_height == 0 {
            return;
        }

        let top = edges.iter().map(|e| e.y0).min().unwrap_or(0);
        let bottom = edges.iter().map(|e| e.y1).max().unwrap_or(0);
        let row_start = first_pixel(top).max(self.clip_y as i64);
        let row_end = first_pixel(bottom).min((self.clip_y + self.clip_height) as i64);
        let (clip_left, clip_right) = (self.clip_x as i64, (self.clip_x + self.clip_width) as i64);

        let mono = brush.solid_color();
        let stride = self.width as usize;
        let mut crossings: Vec<(i64, i32)> = Vec::with_capacity(edges.len());
        let mut painted = 0usize;

        for py in row_start..row_end {
            let sample = (py << DECIMAL_BITS) + HALF_RAW;
            crossings.clear();
            crossings.extend(
                edges
                    .iter()
                    .filter(|e| e.covers(sample))
                    .map(|e| (e.x_at(sample), e.winding)),
            );
            crossings.sort_unstable_by_key(|&(x, _)| x);

            let row = py as usize * stride;
            let mut winding = 0;
            let mut span_start = 0i64;
            for &(x, w) in &crossings {
                let was_inside = rule.is_inside(winding);
                winding += w;
                let inside = rule.is_inside(winding);
                if !was_inside && inside {
                    span_start = x;
                    continue;
                }
                if !was_inside || inside {
                    continue;
                }

                let px_start = first_pixel(span_start).max(clip_left);
                let px_end = first_pixel(x).min(clip_right);
                if px_start >= px_end {
                    continue;
                }
                let span = &mut self.buffer[row + px_start as usize..row + px_end as usize];
                painted += span.len();
                match mono {
                    Some(color) => {
                        for pixel in span {
                            mode.apply(pixel, color);
                        }
                    }
                    None => {
                        let mut pixels = span.iter_mut();
                        if let Some(first) = pixels.next() {
                            mode.apply(first, brush.color_at(px_start as i32, py as i32, false));
                        }
                        for pixel in pixels {
                            mode.apply(pixel, brush.next_color());
                        }
                    }
                }
            }
        }

        tracing::trace!(
            edges = edges.len(),
            rows = (row_end - row_start).max(0),
            painted,
            "path filled"
        );
    }
}

/// Largest surface edge that still fits the 16.16 coordinate range
pub const MAX_DIMENSION: u32 = i16::MAX as u32;

fn check_size(width: u32, height: u32) -> Result<()> {
    for (what, value) in [("width", width), ("height", height)] {
        if value == 0 || value > MAX_DIMENSION {
            return Err(CoreError::InvalidDimension { what, value: value as i64 });
        }
    }
    Ok(())
}
