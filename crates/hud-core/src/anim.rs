//! Time → animation parameters.
//!
//! Pure functions of elapsed milliseconds. The renderer calls these once per
//! frame; nothing here holds state between frames.

use crate::config::HudConfig;
use crate::model::{Color, Ping};

/// Mesh rotation in degrees after `elapsed_ms`.
///
/// Grows linearly and is never wrapped to a period: at the default settings
/// the mesh has turned 12° after one minute and 720° after two hours.
pub fn mesh_rotation_degrees(elapsed_ms: f64, config: &HudConfig) -> f64 {
    (elapsed_ms / config.rotation_period_ms) * config.rotation_degrees
}

pub fn mesh_rotation_radians(elapsed_ms: f64, config: &HudConfig) -> f64 {
    mesh_rotation_degrees(elapsed_ms, config).to_radians()
}

/// A mesh line segment in mesh-local coordinates (origin at the center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// All mesh lines, horizontal and vertical interleaved per grid index.
///
/// `grid_count` cells on each side of the center yield
/// `2 × (2 × grid_count + 1)` lines, each spanning the full mesh extent.
pub fn mesh_lines(config: &HudConfig) -> Vec<MeshLine> {
    let n = config.grid_count as i64;
    let extent = config.mesh_extent();
    let mut lines = Vec::with_capacity(((2 * n + 1) * 2) as usize);
    for i in -n..=n {
        let offset = i as f64 * config.grid_spacing;
        lines.push(MeshLine {
            from: (-extent, offset),
            to: (extent, offset),
        });
        lines.push(MeshLine {
            from: (offset, -extent),
            to: (offset, extent),
        });
    }
    lines
}

/// Per-frame state of a single ping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingFrame {
    /// Position inside the current cycle, in `[0, cycle)`.
    pub phase_ms: f64,
    /// `phase_ms / cycle`, in `[0, 1)`.
    pub progress: f64,
    pub radius: f64,
    /// `1 − progress`, in `(0, 1]`.
    pub opacity: f64,
    /// Center in logical units.
    pub center: (f64, f64),
    pub color: Color,
}

impl PingFrame {
    /// Alpha to paint the fill with.
    pub fn fill_alpha(&self, config: &HudConfig) -> f64 {
        self.opacity * config.ping_alpha_scale
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Compute a ping's frame at `elapsed_ms` on a surface of the given logical size.
pub fn ping_frame(
    ping: &Ping,
    elapsed_ms: f64,
    config: &HudConfig,
    width_css: f64,
    height_css: f64,
) -> PingFrame {
    let cycle = config.ping_cycle_ms;
    let phase_ms = (elapsed_ms + ping.offset_ms).rem_euclid(cycle);
    let progress = phase_ms / cycle;
    PingFrame {
        phase_ms,
        progress,
        radius: progress * config.ping_max_radius,
        opacity: 1.0 - progress,
        center: ping.anchor(width_css, height_css),
        color: ping.color,
    }
}

/// Frames for every configured ping that is visible at `elapsed_ms`.
pub fn visible_pings(
    elapsed_ms: f64,
    config: &HudConfig,
    width_css: f64,
    height_css: f64,
) -> impl Iterator<Item = PingFrame> + '_ {
    config
        .pings
        .iter()
        .map(move |p| ping_frame(p, elapsed_ms, config, width_css, height_css))
        .filter(PingFrame::is_visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;
    use pretty_assertions::assert_eq;

    fn ping(offset_ms: f64) -> Ping {
        Ping::new(0.5, 0.5, Color::rgba(1.0, 1.0, 1.0, 1.0), offset_ms)
    }

    #[test]
    fn rotation_is_linear_and_unwrapped() {
        let c = HudConfig::default();
        assert_eq!(mesh_rotation_degrees(0.0, &c), 0.0);
        assert_eq!(mesh_rotation_degrees(15_000.0, &c), 3.0);
        assert_eq!(mesh_rotation_degrees(30_000.0, &c), 6.0);
        assert_eq!(mesh_rotation_degrees(60_000.0, &c), 12.0);
        assert_eq!(mesh_rotation_degrees(1_800_000.0, &c), 360.0);
        assert_eq!(mesh_rotation_degrees(3_600_000.0, &c), 720.0);
    }

    #[test]
    fn radians_track_degrees() {
        let c = HudConfig::default();
        let rad = mesh_rotation_radians(30_000.0, &c);
        assert!((rad - 6.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn offset_ping_at_start() {
        let c = HudConfig::default();
        let f = ping_frame(&ping(1500.0), 0.0, &c, 100.0, 100.0);
        assert_eq!(f.phase_ms, 1500.0);
        assert_eq!(f.progress, 0.25);
        assert_eq!(f.radius, 6.0);
        assert_eq!(f.opacity, 0.75);
        assert!((f.fill_alpha(&c) - 0.45).abs() < 1e-12);
    }

    #[test]
    fn ping_restarts_each_cycle() {
        let c = HudConfig::default();
        let f = ping_frame(&ping(0.0), 6000.0, &c, 100.0, 100.0);
        assert_eq!(f.phase_ms, 0.0);
        assert_eq!(f.progress, 0.0);
        assert_eq!(f.radius, 0.0);
        assert_eq!(f.opacity, 1.0);
    }

    #[test]
    fn ping_center_scales_to_surface() {
        let c = HudConfig::default();
        let p = &c.pings[0];
        let f = ping_frame(p, 0.0, &c, 1000.0, 500.0);
        assert_eq!(f.center, (200.0, 150.0));
    }

    #[test]
    fn default_pings_never_align() {
        let c = HudConfig::default();
        for t in [0.0, 750.0, 5999.0, 12_345.0] {
            let mut phases: Vec<f64> = c
                .pings
                .iter()
                .map(|p| ping_frame(p, t, &c, 1.0, 1.0).phase_ms)
                .collect();
            phases.sort_by(|a, b| a.partial_cmp(b).unwrap());
            phases.dedup();
            assert_eq!(phases.len(), 4, "phases collided at t={t}");
        }
    }

    #[test]
    fn all_pings_visible_since_progress_below_one() {
        let c = HudConfig::default();
        assert_eq!(visible_pings(4321.0, &c, 800.0, 600.0).count(), 4);
    }

    #[test]
    fn mesh_has_41_lines_each_way() {
        let c = HudConfig::default();
        let lines = mesh_lines(&c);
        assert_eq!(lines.len(), 82);
        assert_eq!(lines[0].from, (-800.0, -800.0));
        assert_eq!(lines[0].to, (800.0, -800.0));
        assert_eq!(lines[81].from, (800.0, -800.0));
        assert_eq!(lines[81].to, (800.0, 800.0));
    }
}
