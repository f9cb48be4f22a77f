//! Visualization pipeline orchestration
//!
//! A [`Visualizer`] is one view: a source image plus the two display
//! settings the host's controls drive. Each recompute runs the full
//! pipeline from the untouched source; there is no cached intermediate
//! state between calls.

use imgref::{Img, ImgVec};
use rgb::RGBA8;

use crate::color::convert;
use crate::error::{Error, Result};
use crate::isolate::isolate;
use crate::pixel::PixelBuffer;
use crate::subsample::subsample;
use crate::surface::RenderSurface;
use crate::types::{ColorMode, Subsampling, Transformation};

/// One visualization view over a source image
#[derive(Debug, Clone)]
pub struct Visualizer {
    source: PixelBuffer,
    transformation: Transformation,
    subsampling: Option<Subsampling>,
    default_transformation: Transformation,
    default_subsampling: Option<Subsampling>,
}

impl Visualizer {
    /// Create a view displaying the unmodified source
    pub fn new(source: PixelBuffer) -> Result<Self> {
        Self::with_defaults(source, Transformation::Original, None)
    }

    /// Create a view from whatever a surface currently shows
    pub fn from_surface<S: RenderSurface>(surface: &S) -> Result<Self> {
        let raster = surface.read_pixels();
        Self::new(PixelBuffer::from_rgba(raster.as_ref()))
    }

    /// The RGB channel-isolation view (starts on the original image)
    pub fn rgb_demo(source: PixelBuffer) -> Result<Self> {
        Self::with_defaults(source, Transformation::Original, None)
    }

    /// The YCbCr channel-isolation view (starts on the luma plane)
    pub fn ycc_demo(source: PixelBuffer) -> Result<Self> {
        Self::with_defaults(source, Transformation::Y, None)
    }

    /// The subsampling view (starts on the original image at 4:4:4)
    pub fn subsampling_demo(source: PixelBuffer) -> Result<Self> {
        Self::with_defaults(source, Transformation::Original, Some(Subsampling::S444))
    }

    fn with_defaults(
        source: PixelBuffer,
        transformation: Transformation,
        subsampling: Option<Subsampling>,
    ) -> Result<Self> {
        require_rgb(&source)?;
        Ok(Self {
            source,
            transformation,
            subsampling,
            default_transformation: transformation,
            default_subsampling: subsampling,
        })
    }

    /// Set the transformation target (a configuration-change event)
    pub fn set_transformation(&mut self, transformation: Transformation) {
        self.transformation = transformation;
    }

    /// Set the subsampling scheme; `None` disables subsampling entirely
    pub fn set_subsampling(&mut self, subsampling: Option<Subsampling>) {
        self.subsampling = subsampling;
    }

    /// Current transformation target
    #[must_use]
    pub const fn transformation(&self) -> Transformation {
        self.transformation
    }

    /// Current subsampling scheme
    #[must_use]
    pub const fn subsampling(&self) -> Option<Subsampling> {
        self.subsampling
    }

    /// Restore this view's default configuration
    pub fn reset(&mut self) {
        self.transformation = self.default_transformation;
        self.subsampling = self.default_subsampling;
    }

    /// Replace the source image, as on a source-change event.
    ///
    /// The buffer must be RGB, fresh from a surface read.
    pub fn set_source(&mut self, source: PixelBuffer) -> Result<()> {
        require_rgb(&source)?;
        self.source = source;
        Ok(())
    }

    /// Run the pipeline and return the resulting buffer.
    ///
    /// Steps, in load-bearing order:
    /// 1. start from the RGB source;
    /// 2. with subsampling configured, convert to YCbCr and average chroma;
    /// 3. with a channel target, convert to the mode owning that channel
    ///    (a no-op when step 2 already got there) and isolate it;
    /// 4. with subsampling configured but no channel target, convert back to
    ///    RGB so "original" displays in color.
    ///
    /// Subsampling runs before isolation so an isolated chroma plane shows
    /// the post-averaging values. The result is a pure function of the
    /// source and the two settings.
    pub fn generate(&self) -> Result<PixelBuffer> {
        let mut buffer = self.source.clone();
        if let Some(scheme) = self.subsampling {
            buffer = convert(buffer, ColorMode::Ycc);
            buffer = subsample(buffer, scheme)?;
        }
        if let Some(channel) = self.transformation.channel() {
            buffer = convert(buffer, channel.mode());
            buffer = isolate(buffer, channel)?;
        }
        if self.subsampling.is_some() && self.transformation == Transformation::Original {
            buffer = convert(buffer, ColorMode::Rgb);
        }
        Ok(buffer)
    }

    /// Quantize a generated buffer into a displayable RGBA raster.
    ///
    /// Components are rounded half-away-from-zero, clamped to [0, 255], and
    /// written at index `row * width + col` as `(c0, c1, c2, 255)`. A buffer
    /// still tagged YCbCr packs its `y/cb/cr` triplet positionally, which is
    /// how isolated luma/chroma planes display as gray. Placement goes
    /// through each pixel's `(row, col)`, never its sequence position.
    #[must_use]
    pub fn pack(buffer: &PixelBuffer) -> ImgVec<RGBA8> {
        let width = buffer.width();
        let height = buffer.height();
        let mut data = vec![RGBA8::new(0, 0, 0, 255); width * height];
        for pixel in buffer.pixels() {
            let [c0, c1, c2] = pixel.components();
            data[pixel.row() * width + pixel.col()] =
                RGBA8::new(quantize(c0), quantize(c1), quantize(c2), 255);
        }
        Img::new(data, width, height)
    }

    /// Recompute the view and blit it onto the surface at `(x, y)`
    pub fn render_to<S: RenderSurface>(&self, surface: &mut S, x: usize, y: usize) -> Result<()> {
        let buffer = self.generate()?;
        let raster = Self::pack(&buffer);
        surface.write_pixels(raster.as_ref(), x, y);
        Ok(())
    }
}

fn require_rgb(buffer: &PixelBuffer) -> Result<()> {
    if buffer.color_mode() != ColorMode::Rgb {
        return Err(Error::ModeMismatch {
            operation: "visualizer source",
            expected: ColorMode::Rgb,
            actual: buffer.color_mode(),
        });
    }
    Ok(())
}

/// Round half-away-from-zero, then saturate into the 8-bit channel range
#[inline]
fn quantize(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
