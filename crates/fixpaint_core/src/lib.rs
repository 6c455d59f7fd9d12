//! Fixpaint Core
//!
//! A 2D vector rasterizer built entirely on 16.16 fixed-point arithmetic.
//!
//! # Features
//!
//! - Fixed-point scalar with trigonometry, square root and parsing
//! - Points, affine matrices and rectangles
//! - Solid, linear gradient, radial gradient and texture brushes
//! - Paths with Bézier flattening, dashing and stroke outlining
//! - Region decomposition into non-overlapping trapezoids
//! - Scanline renderer with NonZero and EvenOdd fill rules, clip rectangle
//!   and XOR or overwrite paint modes
//!
//! # Example
//!
//! ```ignore
//! use fixpaint_core::{Brush, Color, Fixed, GraphicsState, PaintMode, Pen, Point};
//!
//! let mut state = GraphicsState::new(200, 100)?;
//! state.set_paint_mode(PaintMode::Zero);
//!
//! state.set_brush(Brush::solid(Color::RED));
//! state.fill_rect(Fixed::ZERO, Fixed::ZERO, Fixed::from_int(100), Fixed::from_int(50));
//!
//! state.set_pen(Pen::with_width(Color::BLACK, Fixed::from_int(3)));
//! state.draw_line(Point::from_int(10, 80), Point::from_int(190, 80));
//!
//! let pixels = state.rgb();
//! ```

pub mod area;
pub mod brush;
pub mod color;
pub mod dasher;
pub mod error;
pub mod fixed;
pub mod geometry;
pub mod math;
pub mod outline;
pub mod path;
pub mod pen;
pub mod raster;
pub mod shapes;
pub mod sketch;
pub mod state;

pub use area::{Area, Trapezoid};
pub use brush::{
    wrap_ratio, Brush, FillMode, GradientTable, LinearGradientBrush, RadialGradientBrush,
    SolidBrush, TextureBrush,
};
pub use color::Color;
pub use dasher::Dasher;
pub use error::{CoreError, Result};
pub use fixed::{Fixed, ParseFixedError};
pub use geometry::{Matrix, Point, Rect};
pub use outline::Outliner;
pub use path::{FillRule, Path, PathCommand, PathSegment, PathVisitor, Segments};
pub use pen::{LineCap, LineJoin, Pen, DEFAULT_MITER_LIMIT};
pub use raster::{PaintMode, Renderer, MAX_DIMENSION};
pub use sketch::{flatten_subpaths, PathSketch, SubPath};
pub use state::GraphicsState;
