// SPDX-License-Identifier: MPL-2.0
//! Name card photo: decoded RGBA pixels shared behind an `Arc`.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, ExtendedColorType, RgbaImage};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A decoded photo. Cloning is cheap; equality compares pixels.
#[derive(Clone, PartialEq)]
pub struct Photo {
    pixels: Arc<RgbaImage>,
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Photo {
    #[must_use]
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Decodes an encoded image (JPEG, PNG, …).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image_rs::load_from_memory(bytes)?;
        Ok(Self::from_rgba(image.to_rgba8()))
    }

    /// Loads a picked image file and applies the card's editing step:
    /// a centred square crop scaled down to at most `max_dimension` pixels.
    pub fn open_cropped(path: &Path, max_dimension: u32) -> Result<Self> {
        let image = image_rs::open(path)?;
        Self::square_from(image, max_dimension)
    }

    /// Centre-crops `image` to a square no larger than `max_dimension`.
    pub fn square_from(image: DynamicImage, max_dimension: u32) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        let side = width.min(height);
        if side == 0 {
            return Err(Error::Image("image has no pixels".to_string()));
        }

        let square = image.crop_imm((width - side) / 2, (height - side) / 2, side, side);
        let square = if side > max_dimension {
            square.resize_exact(max_dimension, max_dimension, FilterType::Triangle)
        } else {
            square
        };
        Ok(Self::from_rgba(square.to_rgba8()))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Encodes the photo as JPEG. Alpha is dropped.
    pub fn to_jpeg(&self, quality: u8) -> Result<Vec<u8>> {
        let rgb = DynamicImage::ImageRgba8(self.pixels.as_ref().clone()).to_rgb8();
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, quality).encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(bytes)
    }

    /// Image handle for rendering. Create once per load and keep it: every
    /// new handle is uploaded to the GPU again.
    #[must_use]
    pub fn handle(&self) -> Handle {
        Handle::from_rgba(self.width(), self.height(), self.pixels.as_raw().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    #[test]
    fn square_from_crops_landscape_to_centre() {
        let mut image = RgbaImage::from_pixel(30, 10, Rgba([0, 0, 0, 255]));
        for y in 0..10 {
            for x in 10..20 {
                image.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }

        let photo = Photo::square_from(DynamicImage::ImageRgba8(image), 512).unwrap();

        assert_eq!((photo.width(), photo.height()), (10, 10));
        assert!(photo.pixels().pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn square_from_scales_down_large_images() {
        let photo = Photo::square_from(solid(2000, 1000, [10, 20, 30, 255]), 256).unwrap();
        assert_eq!((photo.width(), photo.height()), (256, 256));
    }

    #[test]
    fn square_from_rejects_empty_image() {
        let result = Photo::square_from(solid(0, 5, [0, 0, 0, 255]), 256);
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[test]
    fn jpeg_encoding_decodes_back_to_same_size() {
        let photo = Photo::from_rgba(RgbaImage::from_pixel(16, 8, Rgba([200, 40, 40, 255])));
        let bytes = photo.to_jpeg(80).unwrap();
        let decoded = Photo::decode(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(Photo::decode(b"not an image"), Err(Error::Image(_))));
    }

    #[test]
    fn debug_output_omits_pixels() {
        let photo = Photo::from_rgba(RgbaImage::new(3, 4));
        assert_eq!(format!("{photo:?}"), "Photo { width: 3, height: 4 }");
    }
}
