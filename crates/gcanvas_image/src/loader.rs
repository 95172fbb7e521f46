//! Image loading and pixel data management

use std::path::Path;

use base64::Engine;
use gcanvas_core::{Color, Size};
use image::{DynamicImage, GenericImageView};

use crate::error::{ImageError, Result};

/// Decoded image data, RGBA8 with straight alpha
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pixels: Vec<u8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl ImageData {
    /// Create ImageData from raw RGBA pixels
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected_len {
            return Err(ImageError::Decode(format!(
                "Invalid pixel data length: expected {}, got {}",
                expected_len,
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// An image filled with a single color
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let rgba = color.to_rgba8();
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * 4)
            .collect();
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Load an image file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| ImageError::FileLoad(format!("{}: {}", path.display(), e)))?;
        let image = Self::from_bytes(&data)?;
        tracing::debug!(
            "Loaded image {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        Ok(image)
    }

    /// Decode image from raw bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        Ok(Self::from_dynamic_image(img))
    }

    /// Decode image from base64 string
    ///
    /// Supports both plain base64 and data URIs like:
    /// - `iVBORw0KGgo...` (plain base64)
    /// - `data:image/png;base64,iVBORw0KGgo...` (data URI)
    pub fn from_base64(data: &str) -> Result<Self> {
        let base64_data = if data.starts_with("data:") {
            data.find(";base64,")
                .map(|pos| &data[pos + 8..])
                .ok_or_else(|| ImageError::Base64("Invalid data URI format".to_string()))?
        } else {
            data
        };

        let bytes = base64::engine::general_purpose::STANDARD.decode(base64_data.trim())?;
        Self::from_bytes(&bytes)
    }

    fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_raw();
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Copy a rectangular region into a new image
    pub fn sub_image(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self> {
        let fits_x = x.checked_add(width).is_some_and(|right| right <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|bottom| bottom <= self.height);
        if !fits_x || !fits_y {
            return Err(ImageError::OutOfBounds(format!(
                "{}x{} at ({}, {}) in a {}x{} image",
                width, height, x, y, self.width, self.height
            )));
        }

        let row_len = width as usize * 4;
        let mut pixels = Vec::with_capacity(row_len * height as usize);
        for row in y..y + height {
            let start = (row as usize * self.width as usize + x as usize) * 4;
            pixels.extend_from_slice(&self.pixels[start..start + row_len]);
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// RGBA value of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Get the raw RGBA pixel data
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get image dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Natural size in canvas units
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Take ownership of the pixel data
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba() {
        // Create a 2x2 red image
        let pixels = vec![
            255, 0, 0, 255, // Red
            255, 0, 0, 255, // Red
            255, 0, 0, 255, // Red
            255, 0, 0, 255, // Red
        ];

        let data = ImageData::from_rgba(pixels, 2, 2).unwrap();
        assert_eq!(data.dimensions(), (2, 2));
        assert_eq!(data.pixel(1, 1), Some([255, 0, 0, 255]));
        assert_eq!(data.pixel(2, 0), None);
    }

    #[test]
    fn test_invalid_rgba_length() {
        let pixels = vec![255, 0, 0, 255]; // Only 1 pixel for 2x2
        let result = ImageData::from_rgba(pixels, 2, 2);
        assert!(result.is_err());
    }

    #[test]
    fn test_base64_data_uri() {
        // 1x1 red PNG as base64
        let data_uri = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";
        let img = ImageData::from_base64(data_uri).unwrap();
        assert_eq!(img.width(), 1);
        assert_eq!(img.height(), 1);
    }

    #[test]
    fn test_bad_data_uri() {
        assert!(matches!(
            ImageData::from_base64("data:image/png,AAAA"),
            Err(ImageError::Base64(_))
        ));
    }

    #[test]
    fn test_sub_image_copies_rows() {
        let mut pixels = Vec::new();
        for i in 0..9u8 {
            pixels.extend_from_slice(&[i, 0, 0, 255]);
        }
        let img = ImageData::from_rgba(pixels, 3, 3).unwrap();

        let sub = img.sub_image(1, 1, 2, 2).unwrap();
        assert_eq!(sub.dimensions(), (2, 2));
        assert_eq!(sub.pixel(0, 0), Some([4, 0, 0, 255]));
        assert_eq!(sub.pixel(1, 1), Some([8, 0, 0, 255]));

        assert!(img.sub_image(2, 0, 2, 1).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ImageData::load("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, ImageError::FileLoad(_)));
    }
}
