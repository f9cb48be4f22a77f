//! Channel isolation for single-component display
//!
//! In RGB mode the selected channel is kept and the others are zeroed, which
//! renders as a tinted image. In YCbCr mode the selected component is copied
//! into all three slots, which renders as a gray-level image once the buffer
//! is converted back to RGB (or packed positionally).

use crate::error::{Error, Result};
use crate::pixel::{Pixel, PixelBuffer};
use crate::types::Channel;

/// Isolate one channel of the buffer for display.
///
/// `channel` must belong to the buffer's current component set; asking for a
/// chroma channel on an RGB buffer (or a color channel on a YCbCr buffer)
/// fails with [`Error::InvalidChannel`]. Every output pixel is a fresh
/// record; the input is never aliased.
pub fn isolate(buffer: PixelBuffer, channel: Channel) -> Result<PixelBuffer> {
    if channel.mode() != buffer.color_mode() {
        return Err(Error::InvalidChannel {
            channel,
            mode: buffer.color_mode(),
        });
    }
    let width = buffer.width();
    let height = buffer.height();
    let mode = buffer.color_mode();
    let pixels = buffer
        .into_pixels()
        .into_iter()
        .map(|pixel| isolate_pixel(pixel, channel))
        .collect();
    Ok(PixelBuffer::from_parts(pixels, width, height, mode))
}

fn isolate_pixel(pixel: Pixel, channel: Channel) -> Pixel {
    match (pixel, channel) {
        (Pixel::Rgb { r, row, col, .. }, Channel::R) => Pixel::Rgb {
            r,
            g: 0.0,
            b: 0.0,
            row,
            col,
        },
        (Pixel::Rgb { g, row, col, .. }, Channel::G) => Pixel::Rgb {
            r: 0.0,
            g,
            b: 0.0,
            row,
            col,
        },
        (Pixel::Rgb { b, row, col, .. }, Channel::B) => Pixel::Rgb {
            r: 0.0,
            g: 0.0,
            b,
            row,
            col,
        },
        (Pixel::Ycc { y, row, col, .. }, Channel::Y) => Pixel::Ycc {
            y,
            cb: y,
            cr: y,
            row,
            col,
        },
        (Pixel::Ycc { cb, row, col, .. }, Channel::Cb) => Pixel::Ycc {
            y: cb,
            cb,
            cr: cb,
            row,
            col,
        },
        (Pixel::Ycc { cr, row, col, .. }, Channel::Cr) => Pixel::Ycc {
            y: cr,
            cb: cr,
            cr,
            row,
            col,
        },
        // The mode check above rules out cross-mode pairs
        _ => unreachable!("channel validated against buffer mode"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorMode;

    fn rgb_buffer() -> PixelBuffer {
        let pixels = vec![
            Pixel::Rgb {
                r: 10.0,
                g: 20.0,
                b: 30.0,
                row: 0,
                col: 0,
            },
            Pixel::Rgb {
                r: 40.0,
                g: 50.0,
                b: 60.0,
                row: 0,
                col: 1,
            },
        ];
        PixelBuffer::new(pixels, 2, 1, ColorMode::Rgb).unwrap()
    }

    fn ycc_buffer() -> PixelBuffer {
        let pixels = vec![
            Pixel::Ycc {
                y: 100.0,
                cb: 110.0,
                cr: 120.0,
                row: 0,
                col: 0,
            },
            Pixel::Ycc {
                y: 130.0,
                cb: 140.0,
                cr: 150.0,
                row: 0,
                col: 1,
            },
        ];
        PixelBuffer::new(pixels, 2, 1, ColorMode::Ycc).unwrap()
    }

    #[test]
    fn test_rgb_isolation_zeroes_other_components() {
        let isolated = isolate(rgb_buffer(), Channel::R).unwrap();
        assert_eq!(
            isolated.pixels(),
            &[
                Pixel::Rgb {
                    r: 10.0,
                    g: 0.0,
                    b: 0.0,
                    row: 0,
                    col: 0
                },
                Pixel::Rgb {
                    r: 40.0,
                    g: 0.0,
                    b: 0.0,
                    row: 0,
                    col: 1
                },
            ]
        );
    }

    #[test]
    fn test_ycc_isolation_replicates_component() {
        let isolated = isolate(ycc_buffer(), Channel::Y).unwrap();
        for pixel in isolated.pixels() {
            let [y, cb, cr] = pixel.components();
            assert_eq!(y, cb);
            assert_eq!(y, cr);
        }
        assert_eq!(isolated.pixels()[1].components(), [130.0, 130.0, 130.0]);
    }

    #[test]
    fn test_chroma_isolation_replicates_chroma() {
        let isolated = isolate(ycc_buffer(), Channel::Cb).unwrap();
        assert_eq!(isolated.pixels()[0].components(), [110.0, 110.0, 110.0]);
    }

    #[test]
    fn test_cross_mode_channel_rejected() {
        let result = isolate(rgb_buffer(), Channel::Cb);
        assert!(matches!(
            result,
            Err(Error::InvalidChannel {
                channel: Channel::Cb,
                mode: ColorMode::Rgb
            })
        ));
    }
}
