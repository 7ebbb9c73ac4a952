//! 8-bit RGB colors and the packed pixel encoding.

use serde::{Deserialize, Serialize};

/// An opaque 8-bit-per-channel color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 128, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const DARK_CYAN: Color = Color::new(0, 139, 139);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Move each channel `t` of the way toward `other`.
    ///
    /// `t = 0` keeps `self`, `t = 1` yields `other`. The per-channel
    /// offset truncates toward zero.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let channel = |a: u8, b: u8| {
            let offset = ((b as i32 - a as i32) as f32 * t) as i32;
            (a as i32 + offset).clamp(0, 255) as u8
        };

        Color::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Scale every channel by `brightness`, truncating and clamping to 0..=255.
    pub fn scale(self, brightness: f32) -> Color {
        let channel = |c: u8| ((brightness * c as f32) as i32).clamp(0, 255) as u8;
        Color::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Pack as `0xAARRGGBB` with full alpha.
    #[inline]
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack a `0xAARRGGBB` pixel, ignoring alpha.
    #[inline]
    pub fn from_argb(pixel: u32) -> Color {
        Color::new((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}
