//! ARGB images and compositing onto a surface

use fixpaint_core::{Color, CoreError};

use crate::error::Result;
use crate::shapes::Rectangle;

/// A validated row-major ARGB pixel array
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgbImage {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl ArgbImage {
    /// Wrap `pixels`, which must hold exactly `width * height` entries
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            let (what, value) = if width == 0 { ("width", width) } else { ("height", height) };
            return Err(CoreError::InvalidDimension {
                what,
                value: value as i64,
            }
            .into());
        }
        if pixels.len() != width as usize * height as usize {
            return Err(CoreError::BufferSizeMismatch {
                width,
                height,
                actual: pixels.len(),
            }
            .into());
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn from_argb(width: u32, height: u32, argb: &[u32]) -> Result<Self> {
        Self::new(width, height, argb.iter().map(|&c| Color(c)).collect())
    }

    /// A `width` x `height` image of a single color
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }
}

/// How source pixels are filtered before merging
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BlitOptions {
    /// Skip source pixels whose RGB equals this color's RGB
    pub key: Option<Color>,
    /// Replace the source alpha
    pub alpha: Option<u8>,
}

/// Source window of an image
#[derive(Clone, Copy, Debug)]
pub(crate) struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn whole(image: &ArgbImage) -> Self {
        Self {
            x: 0,
            y: 0,
            width: image.width,
            height: image.height,
        }
    }
}

/// Merge `region` of `image` onto `target` with its top-left corner at
/// `(dx, dy)`, touching only pixels inside `clip`
///
/// `clip` must already lie inside the `stride`-wide target.
#[allow(clippy::too_many_arguments)]
pub(crate) fn blit(
    target: &mut [Color],
    stride: u32,
    clip: Rectangle,
    image: &ArgbImage,
    region: Region,
    dx: i32,
    dy: i32,
    options: BlitOptions,
) {
    let sx = region.x.min(image.width);
    let sy = region.y.min(image.height);
    let w = region.width.min(image.width - sx) as i32;
    let h = region.height.min(image.height - sy) as i32;

    let visible = clip.intersection(&Rectangle::new(dx, dy, w, h));
    if visible.is_empty() {
        return;
    }

    let key = options.key.map(|k| k.0 & 0x00FF_FFFF);
    for y in visible.y..visible.bottom() {
        let src_row = (sy as i32 + y - dy) as usize * image.width as usize;
        let dst_row = y as usize * stride as usize;
        for x in visible.x..visible.right() {
            let mut src = image.pixels[src_row + (sx as i32 + x - dx) as usize];
            if key == Some(src.0 & 0x00FF_FFFF) {
                continue;
            }
            if let Some(alpha) = options.alpha {
                src = src.with_alpha(alpha);
            }
            let dst = &mut target[dst_row + x as usize];
            *dst = Color::merge(*dst, src);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphicsError;

    fn target(w: u32, h: u32) -> Vec<Color> {
        vec![Color::TRANSPARENT; (w * h) as usize]
    }

    #[test]
    fn test_new_validates_size() {
        assert!(matches!(
            ArgbImage::new(2, 2, vec![Color::RED; 3]),
            Err(GraphicsError::Core(CoreError::BufferSizeMismatch { actual: 3, .. }))
        ));
        assert!(matches!(
            ArgbImage::new(0, 2, Vec::new()),
            Err(GraphicsError::Core(CoreError::InvalidDimension { what: "width", .. }))
        ));
        let image = ArgbImage::from_argb(2, 1, &[0xFF00FF00, 0xFF0000FF]).unwrap();
        assert_eq!(image.pixel(1, 0), Some(Color::BLUE));
        assert_eq!(image.pixel(0, 1), None);
    }

    #[test]
    fn test_blit_clips_to_target() {
        let image = ArgbImage::filled(4, 4, Color::RED).unwrap();
        let mut pixels = target(6, 6);
        let clip = Rectangle::new(0, 0, 6, 6);
        blit(&mut pixels, 6, clip, &image, Region::whole(&image), 4, -2, BlitOptions::default());

        let painted: Vec<usize> = pixels
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Color::RED)
            .map(|(i, _)| i)
            .collect();
        // columns 4..6, rows 0..2
        assert_eq!(painted, vec![4, 5, 10, 11]);
    }

    #[test]
    fn test_blit_far_offsets_draw_nothing() {
        let image = ArgbImage::filled(4, 4, Color::RED).unwrap();
        let mut pixels = target(6, 6);
        let clip = Rectangle::new(0, 0, 6, 6);
        let whole = Region::whole(&image);
        blit(&mut pixels, 6, clip, &image, whole, i32::MAX - 1, 0, BlitOptions::default());
        blit(&mut pixels, 6, clip, &image, whole, 0, i32::MAX - 1, BlitOptions::default());
        blit(&mut pixels, 6, clip, &image, whole, i32::MIN, i32::MIN, BlitOptions::default());
        assert!(pixels.iter().all(|c| *c == Color::TRANSPARENT));
    }

    #[test]
    fn test_blit_region_key_and_alpha() {
        let image = ArgbImage::from_argb(
            2,
            2,
            &[0xFFFF0000, 0xFF00FF00, 0xFF0000FF, 0x00FF0000],
        )
        .unwrap();
        let clip = Rectangle::new(0, 0, 2, 2);

        let mut pixels = target(2, 2);
        let region = Region { x: 1, y: 0, width: 5, height: 5 };
        blit(&mut pixels, 2, clip, &image, region, 0, 0, BlitOptions::default());
        assert_eq!(pixels[0], Color::GREEN);
        assert_eq!(pixels[1], Color::TRANSPARENT);

        let mut pixels = vec![Color::WHITE; 4];
        let options = BlitOptions { key: Some(Color::RED), alpha: None };
        blit(&mut pixels, 2, clip, &image, Region::whole(&image), 0, 0, options);
        assert_eq!(pixels, vec![Color::WHITE, Color::GREEN, Color::BLUE, Color::WHITE]);

        let mut pixels = vec![Color::WHITE; 4];
        let options = BlitOptions { key: None, alpha: Some(0) };
        blit(&mut pixels, 2, clip, &image, Region::whole(&image), 0, 0, options);
        assert_eq!(pixels, vec![Color::WHITE; 4]);
    }
}
