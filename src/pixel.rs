//! Pixel and buffer data model
//!
//! A [`PixelBuffer`] is an ordered sequence of mode-tagged pixels plus its
//! dimensions. Components stay real-valued through the pipeline; quantization
//! to 8-bit happens only when a buffer is packed for display.

use imgref::ImgRef;
use rgb::RGBA8;

use crate::error::{Error, Result};
use crate::types::ColorMode;

/// A single pixel, tagged with its color mode and source position.
///
/// `row`/`col` identify the pixel's position in the source image and are
/// carried unchanged through every pipeline stage. Subsampling reorders the
/// pixel sequence, so placement always goes through these coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pixel {
    /// RGB components
    Rgb {
        r: f64,
        g: f64,
        b: f64,
        row: usize,
        col: usize,
    },
    /// Luma plus blue-difference and red-difference chroma
    Ycc {
        y: f64,
        cb: f64,
        cr: f64,
        row: usize,
        col: usize,
    },
}

impl Pixel {
    /// The color mode implied by this pixel's component set
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        match self {
            Pixel::Rgb { .. } => ColorMode::Rgb,
            Pixel::Ycc { .. } => ColorMode::Ycc,
        }
    }

    /// Source row of this pixel
    #[must_use]
    pub const fn row(&self) -> usize {
        match *self {
            Pixel::Rgb { row, .. } | Pixel::Ycc { row, .. } => row,
        }
    }

    /// Source column of this pixel
    #[must_use]
    pub const fn col(&self) -> usize {
        match *self {
            Pixel::Rgb { col, .. } | Pixel::Ycc { col, .. } => col,
        }
    }

    /// Components in display order: `(r, g, b)` or `(y, cb, cr)`
    #[must_use]
    pub fn components(&self) -> [f64; 3] {
        match *self {
            Pixel::Rgb { r, g, b, .. } => [r, g, b],
            Pixel::Ycc { y, cb, cr, .. } => [y, cb, cr],
        }
    }
}

/// An image as an ordered sequence of tagged pixels.
///
/// Invariants, enforced at construction: the sequence holds exactly
/// `width * height` pixels and every pixel's variant matches the buffer's
/// color mode. Sequence order is raster order on ingestion, but subsampling
/// emits pixels in block order; consumers must key on `(row, col)`, never on
/// sequence position.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
    color_mode: ColorMode,
}

impl PixelBuffer {
    /// Create a buffer, validating the dimension and mode invariants
    pub fn new(
        pixels: Vec<Pixel>,
        width: usize,
        height: usize,
        color_mode: ColorMode,
    ) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(Error::DimensionMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        for pixel in &pixels {
            if pixel.mode() != color_mode {
                return Err(Error::ModeMismatch {
                    operation: "buffer construction",
                    expected: color_mode,
                    actual: pixel.mode(),
                });
            }
        }
        Ok(Self {
            pixels,
            width,
            height,
            color_mode,
        })
    }

    /// Build an RGB buffer from an 8-bit RGBA raster, in raster order.
    ///
    /// Alpha is dropped; the pipeline treats every pixel as opaque.
    #[must_use]
    pub fn from_rgba(raster: ImgRef<'_, RGBA8>) -> Self {
        let width = raster.width();
        let height = raster.height();
        let mut pixels = Vec::with_capacity(width * height);
        for (row, line) in raster.rows().enumerate() {
            for (col, px) in line.iter().enumerate() {
                pixels.push(Pixel::Rgb {
                    r: px.r as f64,
                    g: px.g as f64,
                    b: px.b as f64,
                    row,
                    col,
                });
            }
        }
        Self {
            pixels,
            width,
            height,
            color_mode: ColorMode::Rgb,
        }
    }

    /// Internal constructor for pipeline stages that preserve the invariants
    /// of a buffer they already validated.
    pub(crate) fn from_parts(
        pixels: Vec<Pixel>,
        width: usize,
        height: usize,
        color_mode: ColorMode,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            pixels,
            width,
            height,
            color_mode,
        }
    }

    /// Width of the source image in pixels
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the source image in pixels
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Color mode shared by every pixel in the buffer
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// The pixel sequence (not necessarily in raster order)
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub(crate) fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}
