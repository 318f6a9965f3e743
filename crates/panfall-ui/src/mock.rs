//! Mock signal generator.
//!
//! Deterministic synthetic frames and rows so the demo shell runs
//! without a receiver: a wandering peak over a slowly rippling noise
//! floor. Pure functions of a tick counter, natively testable.

use panfall_core::{SpectrumFrame, WaterfallRow};

/// Bins per mock frame and pixels per mock row.
pub const MOCK_BINS: usize = 2048;

/// Synthesize one spectrum frame for tick `t`.
#[must_use]
pub fn mock_spectrum(t: u32) -> SpectrumFrame {
    let n = MOCK_BINS;
    let c = 0.5 + 0.5 * (t as f32 / 40.0).sin();
    let center = n as f32 * (0.2 + 0.6 * c);

    let mut bins = Vec::with_capacity(n);
    for i in 0..n {
        let dx = (i as f32 - center) / (n as f32 * 0.03);
        let peak = -10.0 * (-dx * dx).exp();
        let noise = -110.0 + 5.0 * ((i as f32 + t as f32) * 0.03).sin();
        bins.push(noise + peak);
    }

    SpectrumFrame {
        fft_size: n,
        bins,
        db_min: -120.0,
        db_max: 0.0,
    }
}

/// Synthesize one waterfall row for tick `t` as a sinusoidal index
/// pattern.
#[must_use]
pub fn mock_row(t: u32) -> WaterfallRow {
    let mut pixels = Vec::with_capacity(MOCK_BINS);
    for i in 0..MOCK_BINS {
        let v = ((i as f32 + t as f32) * 0.02).sin() * 127.0 + 128.0;
        pixels.push(v as u8);
    }
    WaterfallRow::new(pixels)
}
