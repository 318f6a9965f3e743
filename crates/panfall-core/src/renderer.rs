//! Render orchestrator.
//!
//! Owns both drawing surfaces, the active color map, the viewport and
//! the latest spectrum frame; converts buffered state into presented
//! pixels on the host's refresh cadence, but only when something
//! changed. All entry points run on one logical timeline; there is no
//! internal locking, and cross-thread ingestion must be marshaled by
//! the host.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::colormap::ColorMap;
use crate::painter::{SpectrumPainter, SpectrumStyle};
use crate::surface::Surface;
use crate::types::{SpectrumFrame, Viewport, WaterfallRow};
use crate::waterfall::{WaterfallBuffer, WaterfallError};

/// Construction parameters for [`PanfallRenderer`].
pub struct PanfallOptions<S> {
    /// Pixel target for the scrolling waterfall
    pub waterfall_surface: S,
    /// Pixel target for the spectrum line
    pub spectrum_surface: S,
    /// Shared display width in device pixels
    pub width: u32,
    /// Waterfall height in device pixels (= history depth in rows)
    pub waterfall_height: u32,
    /// Spectrum pane height in device pixels
    pub spectrum_height: u32,
    /// Active color map; defaults to the viridis-like palette
    pub colormap: Option<Arc<ColorMap>>,
    /// Initial viewport; defaults to [`Viewport::default`]
    pub initial_viewport: Option<Viewport>,
    /// Spectrum line style (stroke, fill, persistence)
    pub style: SpectrumStyle,
}

/// Composes the history buffer, color map and spectrum painter into
/// presented frames.
///
/// The host invokes [`tick`](Self::tick) once per display refresh;
/// everything else is ingestion or configuration. Excess ingestion
/// between refreshes is absorbed rather than queued: the ring keeps
/// the most recent rows and the latest spectrum frame overwrites older
/// ones, bounding worst-case work to one redraw per refresh interval.
pub struct PanfallRenderer<S: Surface> {
    waterfall_surface: S,
    spectrum_surface: S,
    width: u32,
    waterfall_height: u32,
    spectrum_height: u32,
    buffer: WaterfallBuffer,
    colormap: Arc<ColorMap>,
    viewport: Viewport,
    painter: SpectrumPainter,
    last_spectrum: Option<SpectrumFrame>,
    needs_redraw: bool,
    stopped: bool,
}

impl<S: Surface> PanfallRenderer<S> {
    /// Build a renderer and size both surfaces.
    ///
    /// Acquiring the drawing capability itself is the host binding's
    /// job; a host that cannot provide both targets must fail before
    /// calling this, so the renderer never partially constructs.
    #[must_use]
    pub fn new(opts: PanfallOptions<S>) -> Self {
        let mut waterfall_surface = opts.waterfall_surface;
        let mut spectrum_surface = opts.spectrum_surface;
        waterfall_surface.resize(opts.width, opts.waterfall_height);
        spectrum_surface.resize(opts.width, opts.spectrum_height);

        Self {
            waterfall_surface,
            spectrum_surface,
            width: opts.width,
            waterfall_height: opts.waterfall_height,
            spectrum_height: opts.spectrum_height,
            buffer: WaterfallBuffer::new(opts.width as usize, opts.waterfall_height as usize),
            colormap: opts
                .colormap
                .unwrap_or_else(|| Arc::new(ColorMap::viridis_like())),
            viewport: opts.initial_viewport.unwrap_or_default(),
            painter: SpectrumPainter::new(opts.style),
            last_spectrum: None,
            needs_redraw: false,
            stopped: false,
        }
    }

    /// Store `frame` as the single latest spectrum frame.
    ///
    /// Older frames are replaced, never queued.
    pub fn ingest_spectrum(&mut self, frame: SpectrumFrame) {
        self.last_spectrum = Some(frame);
        self.needs_redraw = true;
    }

    /// Push one waterfall row into the history.
    ///
    /// A row whose declared width differs from the current display
    /// width is not an error: it triggers a resize of both surfaces
    /// and the buffer first. A row whose storage length disagrees with
    /// its own width is a producer bug and is rejected.
    pub fn ingest_waterfall_row(&mut self, row: WaterfallRow) -> Result<(), WaterfallError> {
        if row.width != self.width as usize {
            self.resize(row.width as u32, self.waterfall_height);
        }
        self.buffer.push_row(row.pixels)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Swap the active color map; takes effect at the next redraw.
    pub fn set_colormap(&mut self, map: Arc<ColorMap>) {
        self.colormap = map;
        self.needs_redraw = true;
    }

    /// Replace the viewport wholesale; the switch is instantaneous at
    /// the next redraw, with no interpolation.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.needs_redraw = true;
    }

    /// Resize both surfaces and the history buffer together.
    ///
    /// The spectrum pane keeps its own height; existing history is
    /// dropped, not reflowed.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.waterfall_height = height;
        self.waterfall_surface.resize(width, height);
        self.spectrum_surface.resize(width, self.spectrum_height);
        self.buffer.resize(width as usize, height as usize);
        self.needs_redraw = true;
    }

    /// Per-refresh callback body.
    ///
    /// Skips entirely when stopped or when nothing changed since the
    /// last redraw; otherwise clears the dirty flag and redraws once.
    pub fn tick(&mut self) {
        if self.stopped || !self.needs_redraw {
            return;
        }
        self.needs_redraw = false;
        self.draw();
    }

    /// Stop presenting.
    ///
    /// Idempotent; a second call is an explicit no-op. Ingestion after
    /// this point is still accepted but never presented.
    pub fn destroy(&mut self) {
        self.stopped = true;
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Current display width in device pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current waterfall height in device pixels.
    #[must_use]
    pub fn waterfall_height(&self) -> u32 {
        self.waterfall_height
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The active color map.
    #[must_use]
    pub fn colormap(&self) -> &Arc<ColorMap> {
        &self.colormap
    }

    /// The waterfall pixel target.
    #[must_use]
    pub fn waterfall_surface(&self) -> &S {
        &self.waterfall_surface
    }

    /// The spectrum pixel target.
    #[must_use]
    pub fn spectrum_surface(&self) -> &S {
        &self.spectrum_surface
    }

    fn draw(&mut self) {
        // Waterfall: linearize the ring and blit in one call
        let indices = self.buffer.assemble_indices();
        let pixels = expand_indices(&indices, &self.colormap);
        self.waterfall_surface
            .blit_rgba(&pixels, self.width, self.waterfall_height);

        // Spectrum: fade or clear, then paint the latest frame if any
        self.painter
            .begin_frame(&mut self.spectrum_surface, self.width, self.spectrum_height);
        if let Some(frame) = &self.last_spectrum {
            self.painter.draw_spectrum(
                &mut self.spectrum_surface,
                frame,
                self.width,
                self.spectrum_height,
            );
        }
    }
}

/// Expand index bytes through a color map into an RGBA pixel buffer.
///
/// Output is `indices.len() * 4` bytes with alpha forced opaque.
#[must_use]
pub fn expand_indices(indices: &[u8], map: &ColorMap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(indices.len() * 4);
    for &idx in indices {
        let [r, g, b, _] = map.color(idx);
        rgba.extend_from_slice(&[r, g, b, 255]);
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{Op, RecordingSurface};
    use alloc::vec;

    fn renderer(width: u32, height: u32) -> PanfallRenderer<RecordingSurface> {
        PanfallRenderer::new(PanfallOptions {
            waterfall_surface: RecordingSurface::new(),
            spectrum_surface: RecordingSurface::new(),
            width,
            waterfall_height: height,
            spectrum_height: 16,
            colormap: Some(Arc::new(ColorMap::grayscale())),
            initial_viewport: None,
            style: SpectrumStyle::default(),
        })
    }

    #[test]
    fn test_dirty_flag_gates_redraw() {
        let mut r = renderer(4, 3);
        r.ingest_waterfall_row(WaterfallRow::new(vec![1, 2, 3, 4]))
            .unwrap();
        r.tick();
        r.tick();
        assert_eq!(r.waterfall_surface().blit_count(), 1);
    }

    #[test]
    fn test_no_redraw_before_first_ingest() {
        let mut r = renderer(4, 3);
        r.tick();
        assert_eq!(r.waterfall_surface().blit_count(), 0);
    }

    #[test]
    fn test_row_width_change_triggers_resize() {
        let mut r = renderer(4, 3);
        r.ingest_waterfall_row(WaterfallRow::new(vec![0; 6])).unwrap();
        assert_eq!(r.width(), 6);
        r.tick();
        let (pixels, width, height) = r.waterfall_surface().last_blit().unwrap();
        assert_eq!((width, height), (6, 3));
        assert_eq!(pixels.len(), 6 * 3 * 4);
    }

    #[test]
    fn test_spectrum_waits_for_first_frame() {
        let mut r = renderer(4, 3);
        r.ingest_waterfall_row(WaterfallRow::new(vec![0; 4])).unwrap();
        r.tick();
        // Background only: cleared, nothing stroked
        assert_eq!(r.spectrum_surface().stroke_count(), 0);
        assert!(r
            .spectrum_surface()
            .ops
            .iter()
            .any(|op| matches!(op, Op::Clear { .. })));

        r.ingest_spectrum(SpectrumFrame {
            fft_size: 4,
            bins: vec![-30.0; 4],
            db_min: -120.0,
            db_max: 0.0,
        });
        r.tick();
        assert_eq!(r.spectrum_surface().stroke_count(), 1);
    }

    #[test]
    fn test_set_colormap_dirties() {
        let mut r = renderer(4, 3);
        r.ingest_waterfall_row(WaterfallRow::new(vec![0; 4])).unwrap();
        r.tick();
        r.set_colormap(Arc::new(ColorMap::viridis_like()));
        r.tick();
        assert_eq!(r.waterfall_surface().blit_count(), 2);
    }

    #[test]
    fn test_set_viewport_dirties_and_replaces() {
        let mut r = renderer(4, 3);
        let v = Viewport {
            center_hz: 7_050_000.0,
            span_hz: 100_000.0,
            db_min: -100.0,
            db_max: -20.0,
        };
        r.set_viewport(v);
        assert_eq!(r.viewport(), v);
        r.tick();
        assert_eq!(r.waterfall_surface().blit_count(), 1);
    }

    #[test]
    fn test_destroy_stops_presentation_but_accepts_ingest() {
        let mut r = renderer(4, 3);
        r.destroy();
        r.destroy(); // second call is a no-op
        assert!(r.is_stopped());
        r.ingest_waterfall_row(WaterfallRow::new(vec![0; 4])).unwrap();
        r.tick();
        assert_eq!(r.waterfall_surface().blit_count(), 0);
    }

    #[test]
    fn test_mismatched_row_propagates() {
        let mut r = renderer(4, 3);
        // Declared width matches the display but the storage lies
        let row = WaterfallRow {
            width: 4,
            pixels: vec![0; 3],
        };
        assert!(r.ingest_waterfall_row(row).is_err());
    }

    #[test]
    fn test_end_to_end_grayscale_composition() {
        let mut r = renderer(4, 3);
        r.ingest_waterfall_row(WaterfallRow::new(vec![0, 85, 170, 255]))
            .unwrap();
        r.ingest_waterfall_row(WaterfallRow::new(vec![255, 170, 85, 0]))
            .unwrap();
        r.tick();

        let (pixels, width, height) = r.waterfall_surface().last_blit().unwrap();
        assert_eq!((width, height), (4, 3));

        let pixel = |x: usize, y: usize| {
            let o = (y * 4 + x) * 4;
            [pixels[o], pixels[o + 1], pixels[o + 2], pixels[o + 3]]
        };
        // Newest row on top: (0,0) was pushed last with value 255
        assert_eq!(pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(3, 0), [0, 0, 0, 255]);
        // Older row below it
        assert_eq!(pixel(0, 1), [0, 0, 0, 255]);
        assert_eq!(pixel(3, 1), [255, 255, 255, 255]);
        // Never-pushed bottom row renders as the zero-index color
        for x in 0..4 {
            assert_eq!(pixel(x, 2), [0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_expand_indices_opaque() {
        let map = ColorMap::grayscale();
        let rgba = expand_indices(&[0, 128, 255], &map);
        assert_eq!(rgba, vec![0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255]);
    }
}
