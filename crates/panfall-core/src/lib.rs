//! Panfall Core Library
//!
//! Platform-agnostic rendering pipeline for a real-time radio-spectrum
//! display: a scrolling waterfall (time vs. frequency, amplitude as
//! color) with an overlaid panadapter spectrum line. The crate is
//! `no_std` compatible (`alloc` required) so it runs unchanged in WASM
//! and native hosts; the host only supplies pixel targets through the
//! [`Surface`] trait and a once-per-refresh callback.
//!
//! # Modules
//!
//! - [`types`] - Data model: SpectrumFrame, WaterfallRow, Viewport
//! - [`scale`] - Domain-to-pixel mappings (dB to row, Hz to column)
//! - [`colormap`] - 256-entry RGBA lookup tables and built-in palettes
//! - [`waterfall`] - Circular history buffer for waterfall rows
//! - [`surface`] - Presentation boundary trait
//! - [`painter`] - Spectrum line painter with optional persistence
//! - [`renderer`] - Render orchestrator tying it all together

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod colormap;
pub mod painter;
pub mod renderer;
pub mod scale;
pub mod surface;
pub mod types;
pub mod waterfall;

// Re-export commonly used types
pub use colormap::ColorMap;
pub use painter::{SpectrumPainter, SpectrumStyle};
pub use renderer::{expand_indices, PanfallOptions, PanfallRenderer};
pub use scale::{db_to_y, hz_to_x};
pub use surface::{Rgba, Surface};
pub use types::{SpectrumFrame, Viewport, WaterfallRow};
pub use waterfall::{WaterfallBuffer, WaterfallError};
