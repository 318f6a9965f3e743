//! Color map model: 256-entry RGBA lookup tables.
//!
//! A color map turns one byte of normalized amplitude into a display
//! color. Tables are immutable once built; the renderer swaps the
//! active map by replacing a shared reference, never by mutating in
//! place, so a draw in progress always reads a consistent table.

#[allow(unused_imports)]
use micromath::F32Ext;

/// Number of entries in a color map.
pub const MAP_SIZE: usize = 256;

/// Stops of the built-in dark-to-bright default palette.
const VIRIDIS_STOPS: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

/// A 256-entry RGBA lookup table. Every entry is fully opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorMap {
    table: [[u8; 4]; MAP_SIZE],
}

impl ColorMap {
    /// Build a two-color gradient, interpolating each channel linearly
    /// between `start` and `end` over all 256 entries.
    #[must_use]
    pub fn linear_gradient(start: [u8; 3], end: [u8; 3]) -> Self {
        let mut table = [[0u8; 4]; MAP_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            let t = i as f32 / 255.0;
            for c in 0..3 {
                let v = f32::from(start[c]) + (f32::from(end[c]) - f32::from(start[c])) * t;
                entry[c] = v.round().clamp(0.0, 255.0) as u8;
            }
            entry[3] = 255;
        }
        Self { table }
    }

    /// Build a gradient over two or more stops spaced evenly across
    /// the index domain.
    ///
    /// Fewer than two stops is a caller bug; the table layout is only
    /// meaningful with at least both endpoints present.
    #[must_use]
    pub fn multi_stop_gradient(stops: &[[u8; 3]]) -> Self {
        debug_assert!(stops.len() >= 2, "gradient needs at least two stops");
        let last = stops.len() - 1;
        let mut table = [[0u8; 4]; MAP_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            let p = i as f32 / 255.0 * last as f32;
            let i0 = (p.floor() as usize).min(last);
            let i1 = (i0 + 1).min(last);
            let f = p - i0 as f32;
            for c in 0..3 {
                let v =
                    f32::from(stops[i0][c]) + (f32::from(stops[i1][c]) - f32::from(stops[i0][c])) * f;
                entry[c] = v.round().clamp(0.0, 255.0) as u8;
            }
            entry[3] = 255;
        }
        Self { table }
    }

    /// The built-in five-stop dark-to-bright default palette.
    #[must_use]
    pub fn viridis_like() -> Self {
        Self::multi_stop_gradient(&VIRIDIS_STOPS)
    }

    /// Black-to-white fallback palette.
    #[must_use]
    pub fn grayscale() -> Self {
        Self::linear_gradient([0, 0, 0], [255, 255, 255])
    }

    /// RGBA color for an index.
    #[must_use]
    #[inline]
    pub fn color(&self, index: u8) -> [u8; 4] {
        self.table[index as usize]
    }

    /// The raw lookup table.
    #[must_use]
    pub fn table(&self) -> &[[u8; 4]; MAP_SIZE] {
        &self.table
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::viridis_like()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_gradient_endpoints() {
        let map = ColorMap::linear_gradient([0, 0, 0], [255, 255, 255]);
        assert_eq!(map.color(0), [0, 0, 0, 255]);
        assert_eq!(map.color(255), [255, 255, 255, 255]);
    }

    #[test]
    fn test_linear_gradient_monotonic_per_channel() {
        let map = ColorMap::linear_gradient([10, 200, 30], [250, 20, 130]);
        assert_eq!(map.color(0), [10, 200, 30, 255]);
        assert_eq!(map.color(255), [250, 20, 130, 255]);
        for c in 0..3 {
            let rising = map.color(255)[c] >= map.color(0)[c];
            for i in 1..=255u8 {
                let prev = map.color(i - 1)[c];
                let cur = map.color(i)[c];
                if rising {
                    assert!(cur >= prev, "channel {} not rising at {}", c, i);
                } else {
                    assert!(cur <= prev, "channel {} not falling at {}", c, i);
                }
            }
        }
    }

    #[test]
    fn test_alpha_always_opaque() {
        let map = ColorMap::viridis_like();
        for i in 0..=255u8 {
            assert_eq!(map.color(i)[3], 255);
        }
    }

    #[test]
    fn test_multi_stop_continuity_at_stops() {
        let map = ColorMap::viridis_like();
        // Stops land at indices 0, 64, 128, 192, 255 (within rounding)
        for (idx, stop) in [(0u8, 0usize), (64, 1), (128, 2), (192, 3), (255, 4)] {
            let color = map.color(idx);
            for c in 0..3 {
                let expected = i16::from(VIRIDIS_STOPS[stop][c]);
                let got = i16::from(color[c]);
                assert!(
                    (got - expected).abs() <= 1,
                    "stop {} channel {}: expected ~{}, got {}",
                    stop,
                    c,
                    expected,
                    got
                );
            }
        }
    }

    #[test]
    fn test_viridis_endpoints_exact() {
        let map = ColorMap::viridis_like();
        assert_eq!(map.color(0), [68, 1, 84, 255]);
        assert_eq!(map.color(255), [253, 231, 37, 255]);
    }

    #[test]
    fn test_grayscale_is_identity_ramp() {
        let map = ColorMap::grayscale();
        for i in 0..=255u8 {
            assert_eq!(map.color(i), [i, i, i, 255]);
        }
    }
}
