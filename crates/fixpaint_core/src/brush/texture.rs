use std::sync::Arc;

use super::BrushPlacement;
use crate::color::Color;
use crate::error::{CoreError, Result};
use crate::geometry::Point;

/// Brush tiling an ARGB pixel buffer across the plane
#[derive(Clone, Debug, PartialEq)]
pub struct TextureBrush {
    pixels: Arc<[Color]>,
    width: u32,
    height: u32,
    next: (i32, i32),
    pub(crate) placement: BrushPlacement,
}

impl TextureBrush {
    /// Copy a `width * height` row-major buffer into a new texture brush
    pub fn new(pixels: &[Color], width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(CoreError::InvalidDimension {
                what: "texture width",
                value: 0,
            });
        }
        if height == 0 {
            return Err(CoreError::InvalidDimension {
                what: "texture height",
                value: 0,
            });
        }
        if pixels.len() != width as usize * height as usize {
            return Err(CoreError::BufferSizeMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            pixels: Arc::from(pixels),
            width,
            height,
            next: (0, 0),
            placement: BrushPlacement::default(),
        })
    }

    /// Same as [`TextureBrush::new`] from packed `0xAARRGGBB` values
    pub fn from_argb(pixels: &[u32], width: u32, height: u32) -> Result<Self> {
        let colors: Vec<Color> = pixels.iter().copied().map(Color).collect();
        Self::new(&colors, width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn sample(&self, x: i32, y: i32) -> Color {
        let p = Point::from_int(x, y).transform(&self.placement.final_matrix);
        let tx = p.x.to_int().rem_euclid(self.width as i32) as usize;
        let ty = p.y.to_int().rem_euclid(self.height as i32) as usize;
        self.pixels[tx + ty * self.width as usize]
    }

    pub(crate) fn color_at(&mut self, x: i32, y: i32) -> Color {
        self.next = (x + 1, y);
        self.sample(x, y)
    }

    pub(crate) fn next_color(&mut self) -> Color {
        let (x, y) = self.next;
        self.next = (x + 1, y);
        self.sample(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::Brush;
    use crate::fixed::Fixed;
    use crate::geometry::Matrix;

    fn checker() -> TextureBrush {
        let pixels = [Color::RED, Color::GREEN, Color::BLUE, Color::WHITE];
        TextureBrush::new(&pixels, 2, 2).unwrap()
    }

    #[test]
    fn test_rejects_bad_buffers() {
        assert!(matches!(
            TextureBrush::new(&[Color::RED; 3], 2, 2),
            Err(CoreError::BufferSizeMismatch { actual: 3, .. })
        ));
        assert!(matches!(
            TextureBrush::new(&[], 0, 2),
            Err(CoreError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_tiles_in_both_directions() {
        let mut brush = Brush::from(checker());
        brush.update_graphics_matrix(&Matrix::IDENTITY);
        assert!(!brush.is_mono_color());
        assert_eq!(brush.color_at(0, 0, true), Color::RED);
        assert_eq!(brush.color_at(1, 1, true), Color::WHITE);
        assert_eq!(brush.color_at(2, 0, true), Color::RED);
        assert_eq!(brush.color_at(-1, 0, true), Color::GREEN);
        assert_eq!(brush.color_at(0, -1, true), Color::BLUE);
    }

    #[test]
    fn test_next_color_walks_the_row() {
        let mut brush = Brush::from(checker());
        brush.update_graphics_matrix(&Matrix::IDENTITY);
        assert_eq!(brush.color_at(0, 1, false), Color::BLUE);
        assert_eq!(brush.next_color(), Color::WHITE);
        assert_eq!(brush.next_color(), Color::BLUE);
    }

    #[test]
    fn test_follows_canvas_transform() {
        let mut brush = Brush::from(checker());
        brush.update_graphics_matrix(&Matrix::translation(Fixed::ONE, Fixed::ZERO));
        // device x=1 maps back to texture column 0
        assert_eq!(brush.color_at(1, 0, true), Color::RED);
    }
}
