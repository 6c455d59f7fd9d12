//! RGBA8888 pixel export

use fixpaint_core::Color;

/// Bytes per exported pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// A snapshot of a surface as tightly packed RGBA8888 rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Convert row-major ARGB pixels
    pub(crate) fn from_argb(pixels: &[Color], width: u32, height: u32) -> Self {
        let mut data = Vec::with_capacity(pixels.len() * BYTES_PER_PIXEL);
        for pixel in pixels {
            data.extend_from_slice(&pixel.to_rgba8());
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// RGBA bytes of pixel `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.data[i..i + BYTES_PER_PIXEL]);
        Some(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_to_rgba_bytes() {
        let pixmap = Pixmap::from_argb(&[Color(0x80112233), Color::WHITE], 2, 1);
        assert_eq!(pixmap.data(), &[0x11, 0x22, 0x33, 0x80, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(pixmap.pixel(0, 0), Some([0x11, 0x22, 0x33, 0x80]));
        assert_eq!(pixmap.pixel(2, 0), None);
    }
}
