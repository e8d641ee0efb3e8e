//! Decoded image resources embedded in the output.

use image::GenericImageView;

/// A decoded logo ready for embedding.
///
/// Pixel data is kept uncompressed; the PDF writer compresses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Packed 8-bit RGB samples, row-major
    pub rgb: Vec<u8>,

    /// 8-bit alpha samples, present only for images with transparency
    pub alpha: Option<Vec<u8>>,
}

impl LogoImage {
    /// Decode PNG or JPEG bytes.
    ///
    /// Returns `None` for anything the decoder rejects or for zero-sized
    /// images, so a bad logo never fails document generation.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let img = match image::load_from_memory(bytes) {
            Ok(img) => img,
            Err(e) => {
                log::debug!("Skipping logo that failed to decode: {}", e);
                return None;
            }
        };

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            log::debug!("Skipping zero-sized logo");
            return None;
        }

        let alpha = img.color().has_alpha().then(|| {
            img.to_rgba8()
                .pixels()
                .map(|p| p.0[3])
                .collect::<Vec<u8>>()
        });

        Some(Self {
            width,
            height,
            rgb: img.to_rgb8().into_raw(),
            alpha,
        })
    }

    /// Largest `(width, height)` that fits the box while keeping aspect ratio.
    pub fn fit_within(&self, max_width: f32, max_height: f32) -> (f32, f32) {
        let iw = self.width as f32;
        let ih = self.height as f32;
        let scale = (max_width / iw).min(max_height / ih);
        (iw * scale, ih * scale)
    }
}

#[cfg(test)]
pub(crate) fn test_png(width: u32, height: u32, with_alpha: bool) -> Vec<u8> {
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    let img = if with_alpha {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([37, 99, 235, 128])))
    } else {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([37, 99, 235])))
    };
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encode test png");
    out.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png() {
        let logo = LogoImage::decode(&test_png(4, 2, false)).unwrap();
        assert_eq!((logo.width, logo.height), (4, 2));
        assert_eq!(logo.rgb.len(), 4 * 2 * 3);
        assert!(logo.alpha.is_none());
        assert_eq!(&logo.rgb[..3], &[37, 99, 235]);
    }

    #[test]
    fn test_decode_png_with_alpha() {
        let logo = LogoImage::decode(&test_png(3, 3, true)).unwrap();
        let alpha = logo.alpha.unwrap();
        assert_eq!(alpha.len(), 9);
        assert!(alpha.iter().all(|&a| a == 128));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(LogoImage::decode(b"definitely not an image").is_none());
        assert!(LogoImage::decode(&[]).is_none());
    }

    #[test]
    fn test_fit_within_keeps_aspect() {
        let logo = LogoImage {
            width: 200,
            height: 100,
            rgb: Vec::new(),
            alpha: None,
        };
        let (w, h) = logo.fit_within(26.0, 14.0);
        assert!((w - 26.0).abs() < 1e-4);
        assert!((h - 13.0).abs() < 1e-4);

        let (w, h) = logo.fit_within(100.0, 10.0);
        assert!((w - 20.0).abs() < 1e-4);
        assert!((h - 10.0).abs() < 1e-4);
    }
}
