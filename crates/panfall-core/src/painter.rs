//! Spectrum line painter.
//!
//! Renders one amplitude curve onto a surface as a stroked (optionally
//! filled) polyline. With persistence enabled, the previous frame is
//! faded toward black instead of cleared, leaving a decaying trail
//! that emphasizes recently-repeated signal shapes.

use alloc::vec::Vec;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::scale::db_to_y;
use crate::surface::{Rgba, Surface};
use crate::types::SpectrumFrame;

/// Visual configuration for the spectrum line.
#[derive(Clone, Copy, Debug)]
pub struct SpectrumStyle {
    /// Opacity of the black fade overlay applied before each frame,
    /// in `[0, 1]`; 0 clears the surface outright instead.
    pub persistence: f32,
    /// Line color
    pub stroke: Rgba,
    /// Optional area fill under the curve
    pub fill: Option<Rgba>,
    /// Stroke width in pixels
    pub line_width: f32,
}

impl Default for SpectrumStyle {
    fn default() -> Self {
        Self {
            persistence: 0.0,
            stroke: Rgba::rgb(0xe6, 0xe6, 0xe6),
            fill: None,
            line_width: 1.0,
        }
    }
}

/// Paints spectrum frames onto a borrowed surface.
///
/// Stateful only in its style; the surface is passed per call so the
/// renderer can own both painter and surfaces without aliasing.
#[derive(Clone, Copy, Debug)]
pub struct SpectrumPainter {
    style: SpectrumStyle,
}

impl SpectrumPainter {
    /// Create a painter with the given style.
    #[must_use]
    pub fn new(style: SpectrumStyle) -> Self {
        Self { style }
    }

    /// Prepare the surface for a new frame.
    ///
    /// With persistence enabled, a black rectangle at the configured
    /// opacity is blended over the whole surface, fading prior content
    /// toward black; otherwise the surface is hard-cleared.
    pub fn begin_frame<S: Surface>(&self, surface: &mut S, width: u32, height: u32) {
        if self.style.persistence > 0.0 {
            let alpha = (self.style.persistence.clamp(0.0, 1.0) * 255.0).round() as u8;
            surface.fill_rect(
                0.0,
                0.0,
                width as f32,
                height as f32,
                Rgba::BLACK.with_alpha(alpha),
            );
        } else {
            surface.clear(width, height);
        }
    }

    /// Draw one frame as a connected polyline in bin order.
    ///
    /// Bins are spread over the width at an even step; no downsampling
    /// is applied, so more bins than pixels alias by design. When a
    /// fill color is configured, the curve is extended down to the
    /// bottom corners and the enclosed area filled; the fill color
    /// travels with the call and never leaks into surface state.
    pub fn draw_spectrum<S: Surface>(
        &self,
        surface: &mut S,
        frame: &SpectrumFrame,
        width: u32,
        height: u32,
    ) {
        let n = frame.bins.len();
        if n == 0 {
            return;
        }
        let x_step = width.saturating_sub(1) as f32 / (n - 1).max(1) as f32;

        let mut points = Vec::with_capacity(n + 2);
        for (i, &bin) in frame.bins.iter().enumerate() {
            let x = i as f32 * x_step;
            let y = db_to_y(bin, frame.db_min, frame.db_max, height) as f32;
            points.push((x, y));
        }
        surface.stroke_polyline(&points, self.style.stroke, self.style.line_width);

        if let Some(fill) = self.style.fill {
            points.push((width.saturating_sub(1) as f32, height as f32));
            points.push((0.0, height as f32));
            surface.fill_polygon(&points, fill);
        }
    }

    /// The configured style.
    #[must_use]
    pub fn style(&self) -> &SpectrumStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{Op, RecordingSurface};
    use alloc::vec;

    fn frame(bins: Vec<f32>) -> SpectrumFrame {
        SpectrumFrame {
            fft_size: bins.len(),
            bins,
            db_min: -120.0,
            db_max: 0.0,
        }
    }

    #[test]
    fn test_begin_frame_hard_clear() {
        let painter = SpectrumPainter::new(SpectrumStyle::default());
        let mut surface = RecordingSurface::new();
        painter.begin_frame(&mut surface, 100, 50);
        assert_eq!(
            surface.ops,
            vec![Op::Clear {
                width: 100,
                height: 50
            }]
        );
    }

    #[test]
    fn test_begin_frame_persistence_fade() {
        let style = SpectrumStyle {
            persistence: 0.5,
            ..Default::default()
        };
        let painter = SpectrumPainter::new(style);
        let mut surface = RecordingSurface::new();
        painter.begin_frame(&mut surface, 100, 50);
        assert_eq!(
            surface.ops,
            vec![Op::FillRect {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 50.0,
                color: Rgba::BLACK.with_alpha(128),
            }]
        );
    }

    #[test]
    fn test_polyline_spacing_and_mapping() {
        let painter = SpectrumPainter::new(SpectrumStyle::default());
        let mut surface = RecordingSurface::new();
        let f = frame(vec![0.0, -60.0, -120.0, -60.0, 0.0]);
        painter.draw_spectrum(&mut surface, &f, 101, 101);

        let Op::Stroke { points, .. } = &surface.ops[0] else {
            panic!("expected a stroke op");
        };
        assert_eq!(points.len(), 5);
        // Even 25px step across 101 pixels
        let xs: Vec<f32> = points.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        // Full scale at the top, floor at the bottom
        assert_eq!(points[0].1, 0.0);
        assert_eq!(points[1].1, 50.0);
        assert_eq!(points[2].1, 100.0);
    }

    #[test]
    fn test_fill_closes_through_bottom_corners() {
        let style = SpectrumStyle {
            fill: Some(Rgba::rgb(20, 40, 60)),
            ..Default::default()
        };
        let painter = SpectrumPainter::new(style);
        let mut surface = RecordingSurface::new();
        let f = frame(vec![-30.0, -30.0, -30.0]);
        painter.draw_spectrum(&mut surface, &f, 65, 32);

        assert_eq!(surface.stroke_count(), 1);
        let Op::FillPolygon { points, color } = &surface.ops[1] else {
            panic!("expected a fill op");
        };
        assert_eq!(*color, Rgba::rgb(20, 40, 60));
        assert_eq!(points.len(), 5);
        assert_eq!(points[3], (64.0, 32.0));
        assert_eq!(points[4], (0.0, 32.0));
    }

    #[test]
    fn test_empty_frame_draws_nothing() {
        let painter = SpectrumPainter::new(SpectrumStyle::default());
        let mut surface = RecordingSurface::new();
        painter.draw_spectrum(&mut surface, &frame(vec![]), 100, 50);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_single_bin_stays_at_left_edge() {
        let painter = SpectrumPainter::new(SpectrumStyle::default());
        let mut surface = RecordingSurface::new();
        painter.draw_spectrum(&mut surface, &frame(vec![0.0]), 100, 50);
        let Op::Stroke { points, .. } = &surface.ops[0] else {
            panic!("expected a stroke op");
        };
        assert_eq!(points.as_slice(), &[(0.0, 0.0)]);
    }
}
