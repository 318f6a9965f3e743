//! Data model for the panfall display pipeline.

use alloc::vec::Vec;

/// One amplitude-vs-frequency snapshot from the receiver pipeline.
///
/// Bins arrive precomputed; this crate performs no FFT or windowing.
/// The renderer keeps at most one frame at a time: a newer frame
/// replaces the previous one, nothing is queued.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectrumFrame {
    /// Nominal FFT size the bins were computed at
    pub fft_size: usize,
    /// Amplitude samples, interpreted against `db_min`/`db_max`
    pub bins: Vec<f32>,
    /// Lower normalization bound in dB
    pub db_min: f32,
    /// Upper normalization bound in dB
    pub db_max: f32,
}

/// One time slice of indexed color for the waterfall.
///
/// Each byte is an index 0-255 into the active color map. The history
/// buffer takes ownership of the backing storage on push; a producer
/// that wants to keep the row must clone it first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaterfallRow {
    /// Pixels in the row
    pub width: usize,
    /// Color map indices, one byte per pixel
    pub pixels: Vec<u8>,
}

impl WaterfallRow {
    /// Create a row from its backing pixel storage.
    #[must_use]
    pub fn new(pixels: Vec<u8>) -> Self {
        Self {
            width: pixels.len(),
            pixels,
        }
    }
}

/// The visible frequency/amplitude window.
///
/// Replaced wholesale by the caller; the core trusts the host for
/// gesture-to-viewport translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Center frequency in Hz
    pub center_hz: f64,
    /// Visible frequency span in Hz
    pub span_hz: f64,
    /// Lower bound of the spectrum line's vertical scale in dB
    pub db_min: f32,
    /// Upper bound of the spectrum line's vertical scale in dB
    pub db_max: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_hz: 0.0,
            span_hz: 1.0,
            db_min: -120.0,
            db_max: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_row_width_tracks_storage() {
        let row = WaterfallRow::new(vec![1, 2, 3]);
        assert_eq!(row.width, 3);
        assert_eq!(row.pixels, vec![1, 2, 3]);
    }

    #[test]
    fn test_default_viewport() {
        let v = Viewport::default();
        assert_eq!(v.span_hz, 1.0);
        assert_eq!(v.db_min, -120.0);
        assert_eq!(v.db_max, 0.0);
    }
}
