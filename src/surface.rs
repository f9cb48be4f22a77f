//! Rendering-surface ports
//!
//! The pipeline sees the host's canvas as two narrow capabilities: a read
//! port supplying the source raster and a write port accepting the rendered
//! one. Hosts with a real canvas implement [`RenderSurface`] themselves;
//! [`MemorySurface`] is the in-memory implementation used for headless
//! rendering and tests.

use imgref::{Img, ImgRef, ImgVec};
use rgb::RGBA8;

/// Read/write ports onto an 8-bit RGBA rendering surface.
///
/// The pipeline reads the surface once per source-image change and writes
/// once per recompute; it never reads back what it wrote.
pub trait RenderSurface {
    /// Read the full surface as an RGBA raster
    fn read_pixels(&self) -> ImgVec<RGBA8>;

    /// Blit a raster onto the surface with its top-left corner at `(x, y)`
    fn write_pixels(&mut self, raster: ImgRef<'_, RGBA8>, x: usize, y: usize);
}

/// In-memory surface backed by an RGBA raster
#[derive(Debug, Clone)]
pub struct MemorySurface {
    raster: ImgVec<RGBA8>,
}

impl MemorySurface {
    /// Create an opaque black surface of the given size
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            raster: Img::new(vec![RGBA8::new(0, 0, 0, 255); width * height], width, height),
        }
    }

    /// Wrap an existing raster as a surface
    #[must_use]
    pub fn from_raster(raster: ImgVec<RGBA8>) -> Self {
        Self { raster }
    }

    /// The surface contents
    #[must_use]
    pub fn raster(&self) -> ImgRef<'_, RGBA8> {
        self.raster.as_ref()
    }
}

impl RenderSurface for MemorySurface {
    fn read_pixels(&self) -> ImgVec<RGBA8> {
        self.raster.clone()
    }

    fn write_pixels(&mut self, raster: ImgRef<'_, RGBA8>, x: usize, y: usize) {
        let width = self.raster.width();
        let height = self.raster.height();
        let stride = self.raster.stride();
        let buf = self.raster.buf_mut();

        // Pixels falling outside the surface are clipped
        for (sy, line) in raster.rows().enumerate() {
            let dy = y + sy;
            if dy >= height {
                break;
            }
            for (sx, px) in line.iter().enumerate() {
                let dx = x + sx;
                if dx >= width {
                    break;
                }
                buf[dy * stride + dx] = *px;
            }
        }
    }
}
