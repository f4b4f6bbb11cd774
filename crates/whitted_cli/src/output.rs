//! Encoding rendered frames to image files.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;
use whitted_math::pixels_as_bytes;
use whitted_renderer::ImageBuffer;

/// Clamp a rendered frame into an 8-bit RGB image.
pub fn to_rgb_image(image: &ImageBuffer) -> Result<RgbImage> {
    let pixels = image.to_rgb8();
    RgbImage::from_raw(image.width, image.height, pixels_as_bytes(&pixels).to_vec())
        .context("Pixel buffer does not match image dimensions")
}

/// Write a rendered frame. The format follows the file extension
/// (png, bmp, ppm, ...).
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    to_rgb_image(image)?
        .save(path)
        .with_context(|| format!("Failed to write image {}", path.display()))?;
    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
