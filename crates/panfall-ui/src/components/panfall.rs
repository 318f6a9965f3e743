//! Panfall display component.
//!
//! Binds the core renderer to two stacked canvases (spectrum line over
//! scrolling waterfall) and drives it from an animation-frame loop.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::*;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use panfall_core::{
    ColorMap, PanfallOptions, PanfallRenderer, SpectrumFrame, SpectrumStyle, Viewport,
    WaterfallError, WaterfallRow,
};

use crate::raf::RafLoop;
use crate::surface::CanvasSurface;

/// Default spectrum pane height in device pixels.
pub const SPECTRUM_HEIGHT: u32 = 160;

/// Construction options for [`PanfallHandle`].
pub struct PanfallConfig {
    /// Display width in device pixels
    pub width: u32,
    /// Waterfall height in device pixels (= history depth)
    pub waterfall_height: u32,
    /// Spectrum pane height in device pixels
    pub spectrum_height: u32,
    /// Active color map; `None` selects the built-in default palette
    pub colormap: Option<Arc<ColorMap>>,
    /// Initial viewport
    pub initial_viewport: Option<Viewport>,
    /// Spectrum persistence in `[0, 1]`; 0 = hard clear each frame
    pub spectrum_persistence: f32,
}

impl Default for PanfallConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            waterfall_height: 256,
            spectrum_height: SPECTRUM_HEIGHT,
            colormap: None,
            initial_viewport: None,
            spectrum_persistence: 0.0,
        }
    }
}

/// The render orchestrator bound to two canvases.
///
/// Owns the animation-frame loop; `start`/`stop` are independent of
/// any component lifecycle so non-leptos hosts can drive them
/// directly. [`destroy`](Self::destroy) is terminal.
pub struct PanfallHandle {
    renderer: Rc<RefCell<PanfallRenderer<CanvasSurface>>>,
    raf: RefCell<Option<RafLoop>>,
}

impl PanfallHandle {
    /// Bind a renderer to the two canvases.
    ///
    /// Fails if either canvas cannot provide a 2D context; nothing is
    /// partially constructed in that case.
    pub fn new(
        waterfall_canvas: &HtmlCanvasElement,
        spectrum_canvas: &HtmlCanvasElement,
        config: PanfallConfig,
    ) -> Result<Self, JsValue> {
        let waterfall_surface = CanvasSurface::new(waterfall_canvas)?;
        let spectrum_surface = CanvasSurface::new(spectrum_canvas)?;

        let style = SpectrumStyle {
            persistence: config.spectrum_persistence,
            ..Default::default()
        };
        let renderer = PanfallRenderer::new(PanfallOptions {
            waterfall_surface,
            spectrum_surface,
            width: config.width,
            waterfall_height: config.waterfall_height,
            spectrum_height: config.spectrum_height,
            colormap: config.colormap,
            initial_viewport: config.initial_viewport,
            style,
        });

        Ok(Self {
            renderer: Rc::new(RefCell::new(renderer)),
            raf: RefCell::new(None),
        })
    }

    /// Schedule redraws once per display refresh. A second call while
    /// running is a no-op.
    pub fn start(&self) -> Result<(), JsValue> {
        if self.raf.borrow().is_some() {
            return Ok(());
        }
        let renderer = self.renderer.clone();
        let raf = RafLoop::start(move || renderer.borrow_mut().tick())?;
        *self.raf.borrow_mut() = Some(raf);
        Ok(())
    }

    /// Cancel the pending callback; the renderer state stays intact
    /// and [`start`](Self::start) may be called again.
    pub fn stop(&self) {
        if let Some(raf) = self.raf.borrow_mut().take() {
            raf.cancel();
        }
    }

    /// Stop scheduling and retire the renderer for good.
    pub fn destroy(&self) {
        self.stop();
        self.renderer.borrow_mut().destroy();
    }

    /// Hand the latest spectrum frame to the renderer.
    pub fn ingest_spectrum(&self, frame: SpectrumFrame) {
        self.renderer.borrow_mut().ingest_spectrum(frame);
    }

    /// Hand one waterfall row to the renderer.
    pub fn ingest_waterfall_row(&self, row: WaterfallRow) -> Result<(), WaterfallError> {
        self.renderer.borrow_mut().ingest_waterfall_row(row)
    }

    /// Swap the active color map.
    pub fn set_colormap(&self, map: Arc<ColorMap>) {
        self.renderer.borrow_mut().set_colormap(map);
    }

    /// Replace the viewport.
    pub fn set_viewport(&self, viewport: Viewport) {
        self.renderer.borrow_mut().set_viewport(viewport);
    }

    /// Resize both panes.
    pub fn resize(&self, width: u32, height: u32) {
        self.renderer.borrow_mut().resize(width, height);
    }
}

/// Leptos Panfall component.
#[component]
pub fn Panfall(
    /// Display width in device pixels
    #[prop(default = 1024)]
    width: u32,
    /// Waterfall height in device pixels
    #[prop(default = 256)]
    height: u32,
    /// Spectrum persistence in `[0, 1]`
    #[prop(default = 0.0)]
    persistence: f32,
    /// Signal carrying the latest spectrum frame
    spectrum: ReadSignal<Option<SpectrumFrame>>,
    /// Signal carrying the latest waterfall row
    row: ReadSignal<Option<WaterfallRow>>,
) -> impl IntoView {
    let waterfall_ref = create_node_ref::<leptos::html::Canvas>();
    let spectrum_ref = create_node_ref::<leptos::html::Canvas>();
    let handle: StoredValue<Option<PanfallHandle>> = store_value(None);

    // Bind the renderer once both canvases are mounted
    create_effect(move |_| {
        if let (Some(waterfall), Some(spectrum)) = (waterfall_ref.get(), spectrum_ref.get()) {
            let waterfall_el: &HtmlCanvasElement = &waterfall;
            let spectrum_el: &HtmlCanvasElement = &spectrum;
            let config = PanfallConfig {
                width,
                waterfall_height: height,
                spectrum_persistence: persistence,
                ..Default::default()
            };
            match PanfallHandle::new(waterfall_el, spectrum_el, config) {
                Ok(h) => {
                    if let Err(e) = h.start() {
                        web_sys::console::error_1(
                            &format!("Panfall start error: {:?}", e).into(),
                        );
                    }
                    handle.set_value(Some(h));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Panfall init error: {:?}", e).into());
                }
            }
        }
    });

    // Forward spectrum frames as they arrive
    create_effect(move |_| {
        if let Some(frame) = spectrum.get() {
            handle.with_value(|h| {
                if let Some(h) = h {
                    h.ingest_spectrum(frame);
                }
            });
        }
    });

    // Forward waterfall rows; a rejected row is a producer bug
    create_effect(move |_| {
        if let Some(row) = row.get() {
            handle.with_value(|h| {
                if let Some(h) = h {
                    if let Err(e) = h.ingest_waterfall_row(row) {
                        web_sys::console::error_1(&format!("Panfall row rejected: {}", e).into());
                    }
                }
            });
        }
    });

    on_cleanup(move || {
        handle.with_value(|h| {
            if let Some(h) = h {
                h.destroy();
            }
        });
    });

    view! {
        <div class="panfall">
            <canvas
                node_ref=spectrum_ref
                class="spectrum-canvas"
                style="display: block;"
            />
            <canvas
                node_ref=waterfall_ref
                class="waterfall-canvas"
                style="display: block; image-rendering: pixelated;"
            />
        </div>
    }
}
