//! Canvas-2D implementation of the core `Surface` trait.
//!
//! Blits go through `ImageData` + `putImageData` for fast full-frame
//! updates; line work uses the ordinary path API.

use panfall_core::{Rgba, Surface};
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// A `Surface` backed by an HTML canvas 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas element.
    ///
    /// Fails if the canvas cannot provide a 2D context. There is no
    /// degraded fallback; callers must treat this as fatal.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

/// CSS color string for a fill/stroke style.
fn css_color(color: Rgba) -> String {
    format!(
        "rgba({},{},{},{})",
        color.r,
        color.g,
        color.b,
        f32::from(color.a) / 255.0
    )
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: u32, height: u32) {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(height),
        );
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Rgba, line_width: f32) {
        if points.is_empty() {
            return;
        }
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(f64::from(line_width));
        self.ctx.begin_path();
        self.ctx
            .move_to(f64::from(points[0].0), f64::from(points[0].1));
        for &(x, y) in &points[1..] {
            self.ctx.line_to(f64::from(x), f64::from(y));
        }
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba) {
        if points.is_empty() {
            return;
        }
        self.ctx.begin_path();
        self.ctx
            .move_to(f64::from(points[0].0), f64::from(points[0].1));
        for &(x, y) in &points[1..] {
            self.ctx.line_to(f64::from(x), f64::from(y));
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill();
    }

    fn blit_rgba(&mut self, pixels: &[u8], width: u32, height: u32) {
        let Ok(image) = ImageData::new_with_u8_clamped_array_and_sh(Clamped(pixels), width, height)
        else {
            return;
        };
        let _ = self.ctx.put_image_data(&image, 0.0, 0.0);
    }
}
