//! Output image buffer.
//!
//! Stores linear colors in row-major order and converts them to 8-bit RGBA
//! for display or for encoding with the `image` crate.

use std::path::Path;

use thiserror::Error;

use crate::Color;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Pixel count mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Encode(#[from] ::image::ImageError),
}

pub type ImageResult<T> = Result<T, ImageError>;

/// Clamp a value to [0, 1] range.
#[inline]
fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to 8-bit RGBA.
///
/// Channels are clamped to [0, 1] and scaled to 0-255 without a gamma curve.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b, 255]
}

/// A `width x height` grid of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel colors.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// True if the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) lies outside the image.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) lies outside the image.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Encode the image to `path`. The format is picked from the file extension.
    ///
    /// Missing parent directories are created.
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let rgba = ::image::RgbaImage::from_raw(self.width, self.height, self.to_rgba()).ok_or(
            ImageError::SizeMismatch {
                expected: self.width as usize * self.height as usize * 4,
                actual: self.pixels.len() * 4,
            },
        )?;
        rgba.save(path)?;

        log::info!(
            "Saved {}x{} image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert_eq!(image.pixels().len(), 12);
        assert_eq!(image.get(3, 2), Color::ZERO);

        image.set(3, 2, Color::new(0.1, 0.2, 0.3));
        assert_eq!(image.get(3, 2), Color::new(0.1, 0.2, 0.3));
        // Row-major: (3, 2) is the last pixel
        assert_eq!(image.pixels()[11], Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::ONE), [255, 255, 255, 255]);
        assert_eq!(color_to_rgba(Color::new(2.0, -1.0, 0.5)), [255, 0, 127, 255]);
    }

    #[test]
    fn test_to_rgba_layout() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(1, 0, Color::ONE);
        assert_eq!(image.to_rgba(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn test_save_png() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));

        let dir = std::env::temp_dir().join(format!("lumen_core_test_{}", std::process::id()));
        let path = dir.join("out.png");
        image.save(&path).unwrap();

        let decoded = ::image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 1).0, [0, 0, 0, 255]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
