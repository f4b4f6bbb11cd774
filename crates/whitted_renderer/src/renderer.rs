//! Core ray tracing renderer.
//!
//! Implements single-sample Whitted ray tracing with:
//! - One primary ray per pixel through the camera's image plane
//! - Depth-limited mirror reflection
//! - Row-major framebuffer output (origin at top-left)

use crate::shading::trace_ray;
use thiserror::Error;
use whitted_core::Scene;
use whitted_math::{color_to_rgb8, Camera, Color, Ray, Rgb8, BLACK, GREY};

/// Default maximum reflection depth.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Errors that can occur when starting a render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Bucket size must be positive")]
    InvalidBucketSize,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum reflection depth; at this depth the fallback color is used
    pub max_depth: u32,
    /// Color for rays that hit nothing, also added to every lit surface
    pub background: Color,
    /// Stands in for the reflected color once `max_depth` is reached
    pub reflection_fallback: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            background: BLACK,
            reflection_fallback: GREY,
        }
    }
}

/// Build the primary ray for pixel (x, y) of a `width` x `height` image.
///
/// Pixel coordinates are recentered and divided by twice the shorter image
/// side, then offset from the camera's forward direction along right/up.
pub fn primary_ray(camera: &Camera, x: u32, y: u32, width: u32, height: u32) -> Ray {
    let w = width as f32;
    let h = height as f32;
    let scale = w.min(h);

    let rx = (x as f32 - w / 2.0) / 2.0 / scale;
    let ry = -(y as f32 - h / 2.0) / 2.0 / scale;

    Ray::new(camera.position, camera.direction(rx, ry))
}

/// Render a single pixel.
pub fn render_pixel(
    scene: &Scene,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Color {
    let ray = primary_ray(scene.camera(), x, y, width, height);
    trace_ray(&ray, scene, 0, config)
}

/// Image buffer storing unclamped render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Clamp and convert every pixel to 8-bit RGB.
    pub fn to_rgb8(&self) -> Vec<Rgb8> {
        self.pixels.iter().map(|&c| color_to_rgb8(c)).collect()
    }
}

/// Check that the image has at least one pixel.
pub(crate) fn validate_dimensions(width: u32, height: u32) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Render the entire scene to an image buffer.
///
/// Pixels are processed one at a time in row-major order.
pub fn render(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    validate_dimensions(width, height)?;
    log::debug!(
        "Rendering {}x{} (max depth {}) on one thread",
        width,
        height,
        config.max_depth
    );

    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(scene, x, y, width, height, config);
            image.set(x, y, color);
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::default_scene;
    use whitted_math::Vec3;

    #[test]
    fn test_primary_ray_center() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let ray = primary_ray(&camera, 50, 50, 100, 100);

        assert_eq!(ray.origin(), camera.position);
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_primary_ray_is_normalized() {
        let camera = Camera::new(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0));

        for (x, y) in [(0, 0), (199, 0), (0, 99), (199, 99), (37, 81)] {
            let ray = primary_ray(&camera, x, y, 200, 100);
            assert!((ray.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_primary_ray_top_row_points_up() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let top = primary_ray(&camera, 50, 0, 100, 100);
        let bottom = primary_ray(&camera, 50, 99, 100, 100);

        assert!(top.direction().y > 0.0);
        assert!(bottom.direction().y < 0.0);
    }

    #[test]
    fn test_primary_ray_uses_shorter_side() {
        // Same offset from center in a wide and a square image gives the same ray
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let wide = primary_ray(&camera, 100 + 10, 50, 200, 100);
        let square = primary_ray(&camera, 50 + 10, 50, 100, 100);

        assert!((wide.direction() - square.direction()).length() < 1e-6);
    }

    #[test]
    fn test_image_buffer() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.pixels.len(), 12);

        image.set(3, 2, Color::new(2.0, 0.5, -1.0));
        assert_eq!(image.get(3, 2), Color::new(2.0, 0.5, -1.0));
        assert_eq!(image.to_rgb8()[11], Rgb8::new(255, 127, 0));
    }

    #[test]
    fn test_render_rejects_empty_image() {
        let scene = default_scene();
        let config = RenderConfig::default();

        assert_eq!(
            render(&scene, 0, 10, &config).unwrap_err(),
            RenderError::InvalidDimensions { width: 0, height: 10 }
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let scene = default_scene();
        let config = RenderConfig::default();

        let a = render(&scene, 48, 48, &config).unwrap();
        let b = render(&scene, 48, 48, &config).unwrap();

        assert_eq!(a.pixels.len(), 48 * 48);
        assert!(a
            .pixels
            .iter()
            .zip(&b.pixels)
            .all(|(p, q)| p.to_array().map(f32::to_bits) == q.to_array().map(f32::to_bits)));
    }

    #[test]
    fn test_render_default_scene_hits_geometry() {
        let scene = default_scene();
        let config = RenderConfig::default();
        let image = render(&scene, 32, 32, &config).unwrap();

        // The camera looks down at the floor and spheres, so the center pixel
        // is lit and the frame is not uniformly background.
        assert_ne!(image.get(16, 16), config.background);
        assert!(image.pixels.iter().any(|&c| c != image.pixels[0]));
    }
}
