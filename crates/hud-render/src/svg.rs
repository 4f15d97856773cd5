//! SVG snapshot of a single HUD frame.
//!
//! Runs the same frame composition as the canvas backend through a painter
//! that tracks the Canvas2D transform stack with `kurbo::Affine` and emits
//! absolute SVG primitives. Useful as a no-JS fallback image.

use crate::paint::{Painter, paint_frame, paint_static};
use hud_core::anim::mesh_lines;
use hud_core::{Color, HudConfig, Surface, ViewportMetrics};
use kurbo::{Affine, Point};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Render the HUD at `elapsed_ms` as a standalone SVG document.
///
/// `None` renders the reduced-motion still (unrotated mesh, no pings).
pub fn render_svg(config: &HudConfig, width: f64, height: f64, elapsed_ms: Option<f64>) -> String {
    let surface = Surface::from_metrics(ViewportMetrics::new(width, height, 1.0));
    let mesh = mesh_lines(config);
    let mut painter = SvgPainter::new();
    painter.resize(&surface);
    match elapsed_ms {
        Some(t) => paint_frame(&mut painter, &surface, config, &mesh, t),
        None => paint_static(&mut painter, &surface, config, &mesh),
    }
    painter.finish()
}

#[derive(Debug)]
struct SvgPainter {
    width: f64,
    height: f64,
    transform: Affine,
    stroke: Option<(Color, f64)>,
    stack: Vec<(Affine, Option<(Color, f64)>)>,
    /// Blur radii that need a `<filter>` in `<defs>`, stored as `f64::to_bits`.
    glows: BTreeSet<u64>,
    body: String,
}

impl SvgPainter {
    fn new() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            transform: Affine::IDENTITY,
            stroke: None,
            stack: Vec::new(),
            glows: BTreeSet::new(),
            body: String::new(),
        }
    }

    fn finish(self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        if !self.glows.is_empty() {
            svg.push_str("  <defs>\n");
            for bits in &self.glows {
                let blur = f64::from_bits(*bits);
                // Canvas shadowBlur is roughly twice the Gaussian deviation.
                let _ = writeln!(
                    svg,
                    "    <filter id=\"{}\" x=\"-200%\" y=\"-200%\" width=\"500%\" height=\"500%\"><feGaussianBlur stdDeviation=\"{}\" result=\"glow\"/><feMerge><feMergeNode in=\"glow\"/><feMergeNode in=\"SourceGraphic\"/></feMerge></filter>",
                    glow_id(blur),
                    fmt_num(blur / 2.0),
                );
            }
            svg.push_str("  </defs>\n");
        }
        let _ = writeln!(
            svg,
            "  <rect width=\"{}\" height=\"{}\" fill=\"none\"/>",
            fmt_num(self.width),
            fmt_num(self.height)
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    fn map(&self, (x, y): (f64, f64)) -> Point {
        self.transform * Point::new(x, y)
    }
}

impl Painter for SvgPainter {
    fn resize(&mut self, surface: &Surface) {
        self.width = surface.width_css;
        self.height = surface.height_css;
    }

    fn clear(&mut self, _surface: &Surface) {
        self.body.clear();
        self.glows.clear();
    }

    fn save(&mut self) {
        self.stack.push((self.transform, self.stroke));
    }

    fn restore(&mut self) {
        // Canvas2D ignores an unbalanced restore; so do we.
        if let Some((transform, stroke)) = self.stack.pop() {
            self.transform = transform;
            self.stroke = stroke;
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.transform = self.transform * Affine::translate((x, y));
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform * Affine::rotate(radians);
    }

    fn set_stroke(&mut self, color: Color, width: f64) {
        self.stroke = Some((color, width));
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        let (color, width) = self
            .stroke
            .unwrap_or((Color::rgba(0.0, 0.0, 0.0, 1.0), 1.0));
        let a = self.map(from);
        let b = self.map(to);
        let _ = writeln!(
            self.body,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            fmt_num(a.x),
            fmt_num(a.y),
            fmt_num(b.x),
            fmt_num(b.y),
            color.to_css(),
            fmt_num(width),
        );
    }

    fn fill_glow_circle(
        &mut self,
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
        blur: f64,
    ) {
        let c = self.map(center);
        let filter = if blur > 0.0 {
            self.glows.insert(blur.to_bits());
            format!(" filter=\"url(#{})\"", glow_id(blur))
        } else {
            String::new()
        };
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" fill-opacity=\"{}\"{filter}/>",
            fmt_num(c.x),
            fmt_num(c.y),
            fmt_num(radius),
            color.to_hex(),
            fmt_num(alpha),
        );
    }
}

fn glow_id(blur: f64) -> String {
    format!("glow-{}", fmt_num(blur).replace('.', "_"))
}

/// Two decimals, trailing zeros trimmed, never `-0`.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(40.0), "40");
        assert_eq!(fmt_num(0.449_999), "0.45");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(12.5), "12.5");
    }

    #[test]
    fn static_snapshot_has_axis_aligned_mesh() {
        let svg = render_svg(&HudConfig::default(), 800.0, 600.0, None);
        assert!(svg.starts_with("<svg "));
        assert_eq!(svg.matches("<line ").count(), 82);
        assert_eq!(svg.matches("<circle ").count(), 0);
        // Center row of the unrotated mesh.
        assert!(svg.contains("<line x1=\"-400\" y1=\"300\" x2=\"1200\" y2=\"300\""));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn animated_snapshot_has_glowing_pings() {
        let svg = render_svg(&HudConfig::default(), 800.0, 600.0, Some(0.0));
        assert_eq!(svg.matches("<circle ").count(), 4);
        assert!(svg.contains("<filter id=\"glow-10\""));
        assert!(svg.contains("stdDeviation=\"5\""));
        // First ping at t=0 has radius 0 and full opacity × 0.6.
        assert!(svg.contains(
            "<circle cx=\"160\" cy=\"180\" r=\"0\" fill=\"#00C596\" fill-opacity=\"0.6\" filter=\"url(#glow-10)\"/>"
        ));
    }

    #[test]
    fn rotated_mesh_moves_endpoints() {
        let still = render_svg(&HudConfig::default(), 800.0, 600.0, Some(0.0));
        let turned = render_svg(&HudConfig::default(), 800.0, 600.0, Some(30_000.0));
        assert!(still.contains("x1=\"-400\" y1=\"300\""));
        assert!(!turned.contains("x1=\"-400\" y1=\"300\""));
    }

    #[test]
    fn mesh_stroke_is_translucent_gray() {
        let svg = render_svg(&HudConfig::default(), 100.0, 100.0, None);
        assert!(svg.contains("stroke=\"rgba(128, 128, 128, 0.15)\" stroke-width=\"1\""));
    }
}
