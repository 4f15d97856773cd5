//! Canvas2D backend.
//!
//! Maps the renderer's painter calls one-to-one onto an HTML `<canvas>` via
//! `CanvasRenderingContext2d`.

use hud_core::{Color, Surface};
use hud_render::Painter;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Canvas2dPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dPainter {
    /// Grab the 2D context. `None` when the browser refuses one.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Painter for Canvas2dPainter {
    fn resize(&mut self, surface: &Surface) {
        // Writing width/height resets the context, transform included.
        self.canvas.set_width(surface.width_px);
        self.canvas.set_height(surface.height_px);
        let dpr = surface.device_pixel_ratio;
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", surface.width_css));
        let _ = style.set_property("height", &format!("{}px", surface.height_css));
    }

    fn clear(&mut self, _surface: &Surface) {
        self.ctx.save();
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.restore();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        let _ = self.ctx.translate(x, y);
    }

    fn rotate(&mut self, radians: f64) {
        let _ = self.ctx.rotate(radians);
    }

    fn set_stroke(&mut self, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }

    fn fill_glow_circle(
        &mut self,
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
        blur: f64,
    ) {
        let css = color.to_css();
        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_fill_style_str(&css);
        self.ctx.set_shadow_color(&css);
        self.ctx.set_shadow_blur(blur);

        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU);
        self.ctx.fill();

        self.ctx.restore();
    }
}
