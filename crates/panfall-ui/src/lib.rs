//! Panfall Web UI - Leptos-based frontend.
//!
//! Browser binding for the `panfall-core` rendering pipeline:
//! - Canvas-2D implementation of the core `Surface` trait
//! - `requestAnimationFrame` scheduling with a cancellation handle
//! - Panfall display component and demo application shell
//! - Mock signal generator for running without a receiver

pub mod app;
pub mod components;
pub mod mock;
pub mod raf;
pub mod surface;

pub use app::App;
pub use components::{Panfall, PanfallConfig, PanfallHandle};
pub use raf::RafLoop;
pub use surface::CanvasSurface;
