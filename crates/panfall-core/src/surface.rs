//! Presentation boundary.
//!
//! The host environment supplies two write-only pixel targets; the
//! core only talks to them through the [`Surface`] trait, which keeps
//! the pipeline framework-agnostic and testable off-target. The
//! browser implementation lives in the UI crate.

/// An RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Fully opaque color from its three channels.
    #[must_use]
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// The same color with a different alpha.
    #[must_use]
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// A write-only 2D pixel target.
///
/// Fill and stroke operations blend source-over with existing content;
/// [`blit_rgba`](Self::blit_rgba) replaces the full frame in one call.
/// All operations are synchronous and bounded.
pub trait Surface {
    /// Resize the target to `width` x `height` device pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the full target to transparent.
    fn clear(&mut self, width: u32, height: u32);

    /// Fill an axis-aligned rectangle, blending source-over.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Stroke a connected polyline through `points` in order.
    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Rgba, line_width: f32);

    /// Fill the closed polygon formed by `points` in order.
    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba);

    /// Replace the full frame with an RGBA buffer of
    /// `width * height * 4` bytes.
    fn blit_rgba(&mut self, pixels: &[u8], width: u32, height: u32);
}
