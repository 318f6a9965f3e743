//! UI components for the panfall frontend.

pub mod panfall;

pub use panfall::{Panfall, PanfallConfig, PanfallHandle, SPECTRUM_HEIGHT};
