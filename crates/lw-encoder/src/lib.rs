//! RGB565 logo blob encoding
//!
//! Converts a decoded logo image into the fixed-size binary format the
//! display firmware reads from flash: `width * height * 2` bytes of
//! little-endian RGB565 pixels in row-major order. Transparent pixels are
//! encoded as a magenta sentinel so the renderer can skip them and let the
//! black LED background show through.

use image::{imageops::FilterType, DynamicImage};
use thiserror::Error;
use tracing::debug;

/// Transparency sentinel: pure magenta in RGB565. The renderer skips any
/// pixel with this exact value.
pub const TRANSPARENT: u16 = 0xF81F;

/// Substituted when an opaque pixel happens to quantize to [`TRANSPARENT`].
/// The blue LSB is flipped; visually identical, but never mistaken for a
/// skip pixel.
pub const TRANSPARENT_COLLISION: u16 = 0xF81E;

/// Pixels with alpha below this are treated as fully transparent.
pub const ALPHA_THRESHOLD: u8 = 16;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Blob size mismatch: got {got} bytes, expected {expected}")]
    SizeMismatch { got: usize, expected: usize },
}

/// Expected blob length in bytes for the given logo dimensions.
pub fn expected_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 2
}

/// Pack 8-bit RGB into 16-bit RGB565.
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = u16::from(r >> 3);
    let g6 = u16::from(g >> 2);
    let b5 = u16::from(b >> 3);
    (r5 << 11) | (g6 << 5) | b5
}

/// Decode raw fetched bytes (PNG) into an image.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, EncodeError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Encode a logo image as an RGB565 blob.
///
/// The image is resized to exactly `width x height` with a Lanczos3 filter,
/// then each pixel is converted in row-major order:
/// - alpha below [`ALPHA_THRESHOLD`] emits [`TRANSPARENT`];
/// - otherwise the channels are premultiplied by alpha (blending onto the
///   black LED background) and quantized to RGB565;
/// - an opaque pixel that quantizes to the sentinel is perturbed to
///   [`TRANSPARENT_COLLISION`].
///
/// The returned buffer is always exactly `width * height * 2` bytes,
/// little-endian.
pub fn encode(img: &DynamicImage, width: u32, height: u32) -> Vec<u8> {
    let resized = img
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgba8();

    let mut blob = Vec::with_capacity(expected_len(width, height));
    for pixel in resized.pixels() {
        let [r, g, b, a] = pixel.0;
        let pixel16 = if a < ALPHA_THRESHOLD {
            TRANSPARENT
        } else {
            // Blend onto black proportionally to alpha.
            let r = (u16::from(r) * u16::from(a) / 255) as u8;
            let g = (u16::from(g) * u16::from(a) / 255) as u8;
            let b = (u16::from(b) * u16::from(a) / 255) as u8;
            match pack_rgb565(r, g, b) {
                TRANSPARENT => TRANSPARENT_COLLISION,
                packed => packed,
            }
        };
        blob.extend_from_slice(&pixel16.to_le_bytes());
    }

    debug!(
        "Encoded {}x{} logo blob ({} bytes)",
        width,
        height,
        blob.len()
    );
    blob
}

/// Validate a blob read back from disk and reinterpret it as RGB565 pixels.
///
/// This mirrors the check the display firmware performs before drawing: the
/// file must be exactly `width * height * 2` bytes.
pub fn validate_blob(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u16>, EncodeError> {
    let expected = expected_len(width, height);
    if bytes.len() != expected {
        return Err(EncodeError::SizeMismatch {
            got: bytes.len(),
            expected,
        });
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect())
}
