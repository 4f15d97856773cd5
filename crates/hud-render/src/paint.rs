//! Frame composition: mesh + pings → painter calls.
//!
//! Backends implement [`Painter`] with a handful of Canvas2D-shaped
//! primitives; the functions here decide what to draw and in which order.

use hud_core::anim::{MeshLine, mesh_rotation_radians, visible_pings};
use hud_core::{Color, HudConfig, Surface};

/// Minimal 2D drawing surface, modelled on the Canvas2D state machine.
///
/// Coordinates are logical units once [`Painter::resize`] has applied the
/// pixel ratio.
pub trait Painter {
    /// Size the backing store to `surface` and scale drawing by its pixel ratio.
    fn resize(&mut self, surface: &Surface);

    /// Wipe the whole backing store.
    fn clear(&mut self, surface: &Surface);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);

    fn set_stroke(&mut self, color: Color, width: f64);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64));

    /// Filled circle with a same-colored soft glow.
    fn fill_glow_circle(
        &mut self,
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
        blur: f64,
    );
}

/// Paint one animated frame at `elapsed_ms`.
pub fn paint_frame<P: Painter + ?Sized>(
    painter: &mut P,
    surface: &Surface,
    config: &HudConfig,
    mesh: &[MeshLine],
    elapsed_ms: f64,
) {
    painter.clear(surface);
    paint_mesh(painter, surface, config, mesh, mesh_rotation_radians(elapsed_ms, config));
    paint_pings(painter, surface, config, elapsed_ms);
}

/// Paint the reduced-motion still: the mesh, unrotated, and no pings.
pub fn paint_static<P: Painter + ?Sized>(
    painter: &mut P,
    surface: &Surface,
    config: &HudConfig,
    mesh: &[MeshLine],
) {
    painter.clear(surface);
    paint_mesh(painter, surface, config, mesh, 0.0);
}

fn paint_mesh<P: Painter + ?Sized>(
    painter: &mut P,
    surface: &Surface,
    config: &HudConfig,
    mesh: &[MeshLine],
    angle: f64,
) {
    let (cx, cy) = surface.center();
    painter.save();
    painter.set_stroke(config.mesh_color, config.mesh_line_width);
    painter.translate(cx, cy);
    painter.rotate(angle);
    for line in mesh {
        painter.stroke_line(line.from, line.to);
    }
    painter.restore();
}

fn paint_pings<P: Painter + ?Sized>(
    painter: &mut P,
    surface: &Surface,
    config: &HudConfig,
    elapsed_ms: f64,
) {
    for ping in visible_pings(elapsed_ms, config, surface.width_css, surface.height_css) {
        log::trace!(
            "PING at ({:.1}, {:.1}) r={:.2} a={:.2}",
            ping.center.0,
            ping.center.1,
            ping.radius,
            ping.opacity
        );
        painter.fill_glow_circle(
            ping.center,
            ping.radius,
            ping.color,
            ping.fill_alpha(config),
            config.ping_glow_blur,
        );
    }
}
