//! 32-bit ARGB color
//!
//! Colors are straight (non-premultiplied) alpha packed as `0xAARRGGBB`.

use std::fmt;

/// A packed `0xAARRGGBB` color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const YELLOW: Color = Color(0xFFFF_FF00);

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque color from RGB channels
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Color((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Channel-wise blend, `pos` in `0..=256` where 256 is entirely `b`
    pub fn interpolate(a: Color, b: Color, pos: u32) -> Color {
        let p2 = pos.min(256);
        let p1 = 256 - p2;
        let mix = |ca: u8, cb: u8| ((ca as u32 * p1 + cb as u32 * p2) >> 8) as u8;
        Color::from_argb(
            mix(a.alpha(), b.alpha()),
            mix(a.red(), b.red()),
            mix(a.green(), b.green()),
            mix(a.blue(), b.blue()),
        )
    }

    /// Straight-alpha "over": `foreground` composited onto `background`
    pub fn merge(background: Color, foreground: Color) -> Color {
        let a2 = foreground.alpha() as u32;
        if a2 == 0xFF || background.0 == 0 {
            return foreground;
        }
        if a2 == 0 {
            return background;
        }

        let a1 = 0xFF - background.alpha() as u32;
        let a3 = 0xFF - a2;
        let alpha = (0xFF * 0xFF - a1 * a3) >> 8;
        let blend = |c1: u8, c2: u8| ((c1 as u32 * a3 + c2 as u32 * a2) >> 8) as u8;
        Color::from_argb(
            alpha as u8,
            blend(background.red(), foreground.red()),
            blend(background.green(), foreground.green()),
            blend(background.blue(), foreground.blue()),
        )
    }

    /// Byte order for RGBA8888 export
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    #[inline]
    pub const fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::from_argb(rgba[3], rgba[0], rgba[1], rgba[2])
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Color::from_argb(0x80, 0x12, 0x34, 0x56);
        assert_eq!(c.0, 0x8012_3456);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x80, 0x12, 0x34, 0x56));
        assert_eq!(c.with_alpha(0xFF).0, 0xFF12_3456);
        assert_eq!(c.to_rgba8(), [0x12, 0x34, 0x56, 0x80]);
        assert_eq!(Color::from_rgba8(c.to_rgba8()), c);
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(Color::interpolate(Color::BLACK, Color::WHITE, 0), Color::BLACK);
        assert_eq!(Color::interpolate(Color::BLACK, Color::WHITE, 256), Color::WHITE);
        assert_eq!(
            Color::interpolate(Color::BLACK, Color::WHITE, 128),
            Color(0xFF7F_7F7F)
        );
    }

    #[test]
    fn test_merge_early_outs() {
        let bg = Color(0xFF10_2030);
        assert_eq!(Color::merge(bg, Color::RED), Color::RED);
        assert_eq!(Color::merge(Color::TRANSPARENT, Color(0x40FF_0000)), Color(0x40FF_0000));
        assert_eq!(Color::merge(bg, Color(0x00FF_FFFF)), bg);
    }

    #[test]
    fn test_merge_half_alpha() {
        let out = Color::merge(Color::WHITE, Color(0x8000_0000));
        assert_eq!(out.alpha(), 0xFE);
        assert!(out.red() > 0x70 && out.red() < 0x80, "got {}", out);
        assert_eq!(out.red(), out.green());
    }
}
