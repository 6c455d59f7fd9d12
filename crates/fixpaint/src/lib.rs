//! Fixpaint
//!
//! A thread-safe 2D drawing surface built on the fixed-point rasterizer in
//! [`fixpaint_core`]. Shapes use integer pixel coordinates; the surface
//! matrix maps them onto the pixel buffer.
//!
//! # Example
//!
//! ```rust
//! use fixpaint::{Brush, Color, Ellipse, Graphics, Pen};
//!
//! let graphics = Graphics::new(64, 64)?;
//! graphics.clear(Color::WHITE);
//! graphics.fill(Some(&Brush::solid(Color::RED)), &Ellipse::new(8, 8, 48, 48));
//! graphics.draw_line(Some(&Pen::new(Color::BLACK)), 0, 32, 64, 32);
//!
//! let pixmap = graphics.consume_pixmap();
//! assert_eq!(pixmap.data().len(), 64 * 64 * 4);
//! # Ok::<(), fixpaint::GraphicsError>(())
//! ```
//!
//! A surface can also be set up from TOML through [`GraphicsConfig`].

pub mod config;
pub mod error;
pub mod graphics;
pub mod image;
pub mod pixmap;
pub mod shapes;

pub use config::{FillRuleSetting, GraphicsConfig, PaintModeSetting};
pub use error::{GraphicsError, Result};
pub use graphics::{Graphics, SharedGraphics, DEFAULT_BACKGROUND};
pub use image::ArgbImage;
pub use pixmap::{Pixmap, BYTES_PER_PIXEL};
pub use shapes::{
    Arc, Curve, Ellipse, Line, Pie, Polygon, Polyline, Rectangle, RoundRectangle, Shape,
};

// Re-export the core drawing types used with the surface
pub use fixpaint_core::{
    Brush, Color, FillMode, FillRule, Fixed, LineCap, LineJoin, LinearGradientBrush, Matrix,
    PaintMode, Path, Pen, Point, RadialGradientBrush, SolidBrush, TextureBrush,
};
