//! Color space conversion between RGB and YCbCr
//!
//! Full-range JFIF/BT.601 coefficients over real-valued components. Nothing
//! here clamps: out-of-range values ride through the pipeline and are only
//! quantized when a buffer is packed for display.

use crate::pixel::{Pixel, PixelBuffer};
use crate::types::ColorMode;

/// Convert RGB components to YCbCr using JFIF/BT.601 coefficients
///
/// The conversion formula is:
/// - Y  =  0.299 * R + 0.587 * G + 0.114 * B
/// - Cb = -0.168736 * R - 0.331264 * G + 0.5 * B + 128
/// - Cr =  0.5 * R - 0.418688 * G - 0.081312 * B + 128
#[inline]
pub fn rgb_to_ycc(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = -0.168736 * r - 0.331264 * g + 0.5 * b + 128.0;
    let cr = 0.5 * r - 0.418688 * g - 0.081312 * b + 128.0;
    (y, cb, cr)
}

/// Convert YCbCr components back to RGB
#[inline]
pub fn ycc_to_rgb(y: f64, cb: f64, cr: f64) -> (f64, f64, f64) {
    let cb = cb - 128.0;
    let cr = cr - 128.0;

    let r = y + 1.402 * cr;
    let g = y - 0.34414 * cb - 0.71414 * cr;
    let b = y + 1.772 * cb;
    (r, g, b)
}

/// Convert a whole buffer to the target color mode.
///
/// Returns the buffer unchanged when it is already in the target mode, so a
/// repeated conversion is exactly lossless when it is a no-op. `row`/`col`
/// are carried through untouched.
#[must_use]
pub fn convert(buffer: PixelBuffer, target: ColorMode) -> PixelBuffer {
    if buffer.color_mode() == target {
        return buffer;
    }
    let width = buffer.width();
    let height = buffer.height();
    let pixels = buffer
        .into_pixels()
        .into_iter()
        .map(convert_pixel)
        .collect();
    PixelBuffer::from_parts(pixels, width, height, target)
}

/// Flip one pixel to the other color mode
fn convert_pixel(pixel: Pixel) -> Pixel {
    match pixel {
        Pixel::Rgb { r, g, b, row, col } => {
            let (y, cb, cr) = rgb_to_ycc(r, g, b);
            Pixel::Ycc { y, cb, cr, row, col }
        }
        Pixel::Ycc { y, cb, cr, row, col } => {
            let (r, g, b) = ycc_to_rgb(y, cb, cr);
            Pixel::Rgb { r, g, b, row, col }
        }
    }
}
