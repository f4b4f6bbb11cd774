//! Color type and display conversion.

use bytemuck::{Pod, Zeroable};

use crate::Vec3;

/// Color type alias (r = x, g = y, b = z).
///
/// Channels are unbounded while shading; they are only clamped when a pixel
/// is emitted.
pub type Color = Vec3;

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const GREY: Color = Color::new(0.5, 0.5, 0.5);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

/// An 8-bit display pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Clamp every channel into [0, 1]. NaN channels become 0.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Convert a color to an 8-bit pixel.
///
/// Values <= 0 map to 0, values >= 1 map to 255, everything in between is
/// scaled linearly and truncated.
#[inline]
pub fn color_to_rgb8(color: Color) -> Rgb8 {
    let c = clamp_color(color) * 255.0;
    Rgb8::new(c.x as u8, c.y as u8, c.z as u8)
}

/// View a pixel slice as tightly packed RGB bytes.
pub fn pixels_as_bytes(pixels: &[Rgb8]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}
