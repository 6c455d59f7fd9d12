//! Fixed-point geometry primitives
//!
//! - [`Point`]: a coordinate pair with the [`Point::EMPTY`] sentinel
//! - [`Matrix`]: a six-coefficient affine transform
//! - [`Rect`]: a normalized bounding box

mod matrix;
mod point;
mod rect;

pub use matrix::Matrix;
pub use point::Point;
pub use rect::Rect;
