//! Pixel-by-pixel comparison of two images.

use anyhow::{bail, Result};
use image::{Rgb, RgbImage};

/// Outcome of comparing two images of the same size.
#[derive(Debug, Clone)]
pub struct ImageDiff {
    /// Per-channel absolute difference, stretched so the largest difference
    /// in each channel becomes 255
    pub image: RgbImage,
    /// Pixels where any channel differs
    pub changed_pixels: u64,
    pub total_pixels: u64,
    /// Largest raw difference seen in each channel
    pub max_difference: [u8; 3],
}

impl ImageDiff {
    pub fn is_identical(&self) -> bool {
        self.changed_pixels == 0
    }
}

/// Compare `source` against `target`.
pub fn diff_images(source: &RgbImage, target: &RgbImage) -> Result<ImageDiff> {
    if source.dimensions() != target.dimensions() {
        let (sw, sh) = source.dimensions();
        let (tw, th) = target.dimensions();
        bail!("Image size does not match ({}, {}) != ({}, {})", sw, sh, tw, th);
    }

    let (width, height) = source.dimensions();
    let mut raw = RgbImage::new(width, height);
    let mut max_difference = [0u8; 3];
    let mut changed_pixels = 0u64;

    for (x, y, a) in source.enumerate_pixels() {
        let b = target.get_pixel(x, y);
        let mut diff = [0u8; 3];
        for c in 0..3 {
            diff[c] = a.0[c].abs_diff(b.0[c]);
            max_difference[c] = max_difference[c].max(diff[c]);
        }
        if diff != [0, 0, 0] {
            changed_pixels += 1;
        }
        raw.put_pixel(x, y, Rgb(diff));
    }

    let image = RgbImage::from_fn(width, height, |x, y| {
        let d = raw.get_pixel(x, y).0;
        Rgb([
            stretch(d[0], max_difference[0]),
            stretch(d[1], max_difference[1]),
            stretch(d[2], max_difference[2]),
        ])
    });

    Ok(ImageDiff {
        image,
        changed_pixels,
        total_pixels: width as u64 * height as u64,
        max_difference,
    })
}

/// Map `value` from [0, max] onto [0, 255].
#[inline]
fn stretch(value: u8, max: u8) -> u8 {
    if max > 0 {
        (255.0 * (value as f32 / max as f32)) as u8
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_images() {
        let a = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
        let diff = diff_images(&a, &a.clone()).unwrap();

        assert!(diff.is_identical());
        assert_eq!(diff.total_pixels, 16);
        assert_eq!(diff.max_difference, [0, 0, 0]);
        assert!(diff.image.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_changed_pixels_are_counted_and_stretched() {
        let a = RgbImage::from_pixel(3, 2, Rgb([100, 100, 100]));
        let mut b = a.clone();
        b.put_pixel(0, 0, Rgb([110, 100, 100]));
        b.put_pixel(2, 1, Rgb([95, 100, 140]));

        let diff = diff_images(&a, &b).unwrap();

        assert_eq!(diff.changed_pixels, 2);
        assert_eq!(diff.total_pixels, 6);
        assert_eq!(diff.max_difference, [10, 0, 40]);
        assert_eq!(diff.image.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(diff.image.get_pixel(2, 1).0, [127, 0, 255]);
        assert_eq!(diff.image.get_pixel(1, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_size_mismatch() {
        let a = RgbImage::new(4, 4);
        let b = RgbImage::new(4, 5);

        let err = diff_images(&a, &b).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }
}
