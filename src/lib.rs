//! # chromaviz - JPEG Preprocessing Visualizer Core
//!
//! chromaviz renders educational visualizations of the two lossy-by-design
//! JPEG preprocessing steps: color-space isolation and chroma subsampling.
//! It converts a raw RGBA raster through RGB/YCbCr space, optionally
//! averages chroma over blocks, optionally isolates one channel for
//! display, and packs the result back into an RGBA raster.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chromaviz::{MemorySurface, Subsampling, Transformation, Visualizer};
//!
//! let mut view = Visualizer::subsampling_demo(source)?;
//! view.set_subsampling(Some(Subsampling::S420));
//! view.render_to(&mut surface, 0, 0)?;
//! ```
//!
//! ## Views
//!
//! - [`Visualizer::rgb_demo`]: isolate R/G/B channels of the original image
//! - [`Visualizer::ycc_demo`]: isolate the luma or a chroma plane
//! - [`Visualizer::subsampling_demo`]: show 4:4:4 / 4:2:2 / 4:2:0 averaging
//!
//! The pipeline is synchronous and pure: each recompute is a full pass over
//! the source, driven by the host's configuration-change events. Reading
//! and repainting the host's canvas happen through the narrow
//! [`RenderSurface`] ports.

// Data model
mod error;
mod pixel;
mod types;

// Transformation stages
pub mod color;
pub mod isolate;
pub mod subsample;

// Orchestration
mod pipeline;
mod surface;

// Public API
pub use error::Error;
pub use pixel::{Pixel, PixelBuffer};
pub use pipeline::Visualizer;
pub use surface::{MemorySurface, RenderSurface};
pub use types::{Channel, ColorMode, Subsampling, Transformation};

/// Result type for chromaviz operations
pub type Result<T> = std::result::Result<T, Error>;
