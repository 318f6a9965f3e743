//! Domain-to-pixel scale functions.
//!
//! Pure numeric mappings from amplitude (dB) to pixel rows and from
//! frequency (Hz) to pixel columns. No state.

#[allow(unused_imports)]
use micromath::F32Ext;

/// Smallest denominator used when a range degenerates to zero.
const MIN_RANGE: f32 = 1e-9;

/// Map an amplitude in dB to a pixel row.
///
/// `value` is clamped into `[db_min, db_max]` and normalized; higher
/// amplitude maps to a smaller row index so the trace reads top-down
/// with strong signals at the top. A degenerate range
/// (`db_max == db_min`) is floored rather than raised, collapsing the
/// mapping to the bottom edge instead of dividing by zero.
#[must_use]
pub fn db_to_y(value: f32, db_min: f32, db_max: f32, height: u32) -> u32 {
    let clamped = db_min.max(db_max.min(value));
    let norm = (clamped - db_min) / (db_max - db_min).max(MIN_RANGE);
    ((1.0 - norm) * height.saturating_sub(1) as f32).round() as u32
}

/// Map a frequency in Hz to a pixel column.
///
/// The visible span starts at `center_hz - span_hz / 2`. No clamping
/// is applied: a frequency outside the current view yields a column
/// outside `[0, width-1]`, and that is a valid output. Callers needing
/// in-bounds columns must range-check the result themselves.
#[must_use]
pub fn hz_to_x(freq: f64, center_hz: f64, span_hz: f64, width: u32) -> i64 {
    let start = center_hz - span_hz / 2.0;
    let norm = (freq - start) / span_hz.max(f64::from(MIN_RANGE));
    let x = norm * f64::from(width.saturating_sub(1));
    // Round to nearest without std: truncation after the half offset.
    if x >= 0.0 {
        (x + 0.5) as i64
    } else {
        (x - 0.5) as i64
    }
}
