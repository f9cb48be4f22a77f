//! Chroma subsampling by block-averaged chroma
//!
//! Partitions a YCbCr buffer into blocks according to the configured scheme
//! and replaces each member's chroma with the block mean, leaving luma
//! untouched. Block shapes: 4:4:4 uses singletons, 4:2:2 uses pairs of
//! consecutive pixels in the flat sequence, 4:2:0 uses 2x2 cells.

use crate::error::{Error, Result};
use crate::pixel::{Pixel, PixelBuffer};
use crate::types::{ColorMode, Subsampling};

/// Average chroma over blocks of the given scheme.
///
/// The buffer must be in YCbCr mode. The output sequence is the
/// concatenation of blocks in formation order, which for 4:2:0 is not
/// raster order; every pixel still carries its `(row, col)` for placement.
/// Each member is re-emitted as a fresh record, never mutated in place.
pub fn subsample(buffer: PixelBuffer, scheme: Subsampling) -> Result<PixelBuffer> {
    if buffer.color_mode() != ColorMode::Ycc {
        return Err(Error::ModeMismatch {
            operation: "chroma subsampling",
            expected: ColorMode::Ycc,
            actual: buffer.color_mode(),
        });
    }

    let width = buffer.width();
    let height = buffer.height();
    let blocks = partition(buffer.pixels(), scheme, width);

    let mut pixels = Vec::with_capacity(width * height);
    for block in blocks {
        let (cb_mean, cr_mean) = chroma_means(&block);
        for member in block {
            if let Pixel::Ycc { y, row, col, .. } = member {
                pixels.push(Pixel::Ycc {
                    y,
                    cb: cb_mean,
                    cr: cr_mean,
                    row,
                    col,
                });
            }
        }
    }
    Ok(PixelBuffer::from_parts(pixels, width, height, ColorMode::Ycc))
}

/// Form the blocks for a scheme over the flat pixel sequence
fn partition(pixels: &[Pixel], scheme: Subsampling, width: usize) -> Vec<Vec<Pixel>> {
    match scheme {
        // Fixed-length chunking of the flat sequence; a 4:2:2 pair may span
        // the end of one row and the start of the next.
        Subsampling::S444 | Subsampling::S422 => chunks(pixels, scheme.h_factor()),
        Subsampling::S420 => squares(pixels, scheme.h_factor(), scheme.v_factor(), width),
    }
}

/// Chunks of `len` consecutive pixels; the last chunk may be short
fn chunks(pixels: &[Pixel], len: usize) -> Vec<Vec<Pixel>> {
    pixels.chunks(len).map(<[Pixel]>::to_vec).collect()
}

/// `h`x`v` cells: rows grouped into bands of `v`, columns within each band
/// grouped into spans of `h`. Edge bands and spans may be partial. Blocks
/// are emitted band-major, then by span.
fn squares(pixels: &[Pixel], h: usize, v: usize, width: usize) -> Vec<Vec<Pixel>> {
    let mut blocks = Vec::new();
    if pixels.is_empty() {
        return blocks;
    }
    for band in pixels.chunks(width * v) {
        for start in (0..width).step_by(h) {
            let end = (start + h).min(width);
            let mut block = Vec::new();
            for line in band.chunks(width) {
                block.extend_from_slice(&line[start..end]);
            }
            blocks.push(block);
        }
    }
    blocks
}

/// Unweighted means of `cb` and `cr` over the block members.
///
/// A block always has at least one member, so the division is safe.
fn chroma_means(block: &[Pixel]) -> (f64, f64) {
    let mut cb_sum = 0.0;
    let mut cr_sum = 0.0;
    for member in block {
        if let Pixel::Ycc { cb, cr, .. } = member {
            cb_sum += cb;
            cr_sum += cr;
        }
    }
    let count = block.len() as f64;
    (cb_sum / count, cr_sum / count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ycc(y: f64, cb: f64, cr: f64, row: usize, col: usize) -> Pixel {
        Pixel::Ycc { y, cb, cr, row, col }
    }

    fn ycc_buffer(width: usize, height: usize, pixels: Vec<Pixel>) -> PixelBuffer {
        PixelBuffer::new(pixels, width, height, ColorMode::Ycc).unwrap()
    }

    /// Chroma of the pixel at `(row, col)`, found by position, not sequence
    fn chroma_at(buffer: &PixelBuffer, row: usize, col: usize) -> (f64, f64) {
        let pixel = buffer
            .pixels()
            .iter()
            .find(|p| p.row() == row && p.col() == col)
            .expect("pixel present");
        let [_, cb, cr] = pixel.components();
        (cb, cr)
    }

    #[test]
    fn test_rgb_buffer_rejected() {
        let pixels = vec![Pixel::Rgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            row: 0,
            col: 0,
        }];
        let buffer = PixelBuffer::new(pixels, 1, 1, ColorMode::Rgb).unwrap();
        assert!(matches!(
            subsample(buffer, Subsampling::S422),
            Err(Error::ModeMismatch {
                expected: ColorMode::Ycc,
                actual: ColorMode::Rgb,
                ..
            })
        ));
    }

    #[test]
    fn test_444_leaves_chroma_unchanged() {
        let buffer = ycc_buffer(
            2,
            1,
            vec![ycc(50.0, 10.0, 30.0, 0, 0), ycc(60.0, 20.0, 40.0, 0, 1)],
        );
        let out = subsample(buffer.clone(), Subsampling::S444).unwrap();
        assert_eq!(out, buffer);
    }

    #[test]
    fn test_422_averages_pairs() {
        let buffer = ycc_buffer(
            2,
            1,
            vec![ycc(50.0, 10.0, 30.0, 0, 0), ycc(60.0, 20.0, 40.0, 0, 1)],
        );
        let out = subsample(buffer, Subsampling::S422).unwrap();
        for pixel in out.pixels() {
            let [_, cb, cr] = pixel.components();
            assert_eq!(cb, 15.0);
            assert_eq!(cr, 35.0);
        }
        // Luma untouched
        assert_eq!(out.pixels()[0].components()[0], 50.0);
        assert_eq!(out.pixels()[1].components()[0], 60.0);
    }

    #[test]
    fn test_422_pairs_span_row_boundaries() {
        // 3x2: flat pairs are (0,0)+(0,1), (0,2)+(1,0), (1,1)+(1,2).
        // The middle pair crosses the row boundary by design.
        let buffer = ycc_buffer(
            3,
            2,
            vec![
                ycc(0.0, 0.0, 0.0, 0, 0),
                ycc(0.0, 10.0, 0.0, 0, 1),
                ycc(0.0, 20.0, 0.0, 0, 2),
                ycc(0.0, 40.0, 0.0, 1, 0),
                ycc(0.0, 60.0, 0.0, 1, 1),
                ycc(0.0, 80.0, 0.0, 1, 2),
            ],
        );
        let out = subsample(buffer, Subsampling::S422).unwrap();
        assert_eq!(chroma_at(&out, 0, 2).0, 30.0);
        assert_eq!(chroma_at(&out, 1, 0).0, 30.0);
        assert_eq!(chroma_at(&out, 0, 0).0, 5.0);
        assert_eq!(chroma_at(&out, 1, 1).0, 70.0);
    }

    #[test]
    fn test_420_averages_square() {
        let buffer = ycc_buffer(
            2,
            2,
            vec![
                ycc(1.0, 10.0, 40.0, 0, 0),
                ycc(2.0, 20.0, 30.0, 0, 1),
                ycc(3.0, 30.0, 20.0, 1, 0),
                ycc(4.0, 40.0, 10.0, 1, 1),
            ],
        );
        let out = subsample(buffer, Subsampling::S420).unwrap();
        for pixel in out.pixels() {
            let [_, cb, cr] = pixel.components();
            assert_eq!(cb, 25.0);
            assert_eq!(cr, 25.0);
        }
    }

    #[test]
    fn test_420_partial_edge_blocks() {
        // 3x3: cells are 2x2 (rows 0-1, cols 0-1), 2x1 (rows 0-1, col 2),
        // 1x2 (row 2, cols 0-1), 1x1 (row 2, col 2).
        let mut pixels = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                pixels.push(ycc(0.0, (row * 3 + col) as f64 * 10.0, 0.0, row, col));
            }
        }
        let buffer = ycc_buffer(3, 3, pixels);
        let out = subsample(buffer, Subsampling::S420).unwrap();

        // cb values: 0 10 20 / 30 40 50 / 60 70 80
        assert_eq!(chroma_at(&out, 0, 0).0, 20.0); // (0+10+30+40)/4
        assert_eq!(chroma_at(&out, 1, 1).0, 20.0);
        assert_eq!(chroma_at(&out, 0, 2).0, 35.0); // (20+50)/2
        assert_eq!(chroma_at(&out, 1, 2).0, 35.0);
        assert_eq!(chroma_at(&out, 2, 0).0, 65.0); // (60+70)/2
        assert_eq!(chroma_at(&out, 2, 2).0, 80.0); // singleton
    }

    #[test]
    fn test_420_reorders_sequence_but_keeps_positions() {
        let mut pixels = Vec::new();
        for row in 0..2 {
            for col in 0..4 {
                pixels.push(ycc(0.0, 0.0, 0.0, row, col));
            }
        }
        let buffer = ycc_buffer(4, 2, pixels);
        let out = subsample(buffer, Subsampling::S420).unwrap();

        // Block order: cell (cols 0-1), then cell (cols 2-3); within each
        // cell row 0 before row 1.
        let order: Vec<(usize, usize)> =
            out.pixels().iter().map(|p| (p.row(), p.col())).collect();
        assert_eq!(
            order,
            vec![
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (0, 2),
                (0, 3),
                (1, 2),
                (1, 3)
            ]
        );
    }

    #[test]
    fn test_uniform_chroma_is_fixed_point() {
        let mut pixels = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                pixels.push(ycc(90.0, 120.0, 130.0, row, col));
            }
        }
        let buffer = ycc_buffer(3, 3, pixels);
        for scheme in [Subsampling::S444, Subsampling::S422, Subsampling::S420] {
            let out = subsample(buffer.clone(), scheme).unwrap();
            for pixel in out.pixels() {
                assert_eq!(pixel.components(), [90.0, 120.0, 130.0]);
            }
        }
    }
}
