//! Tunable constants for the HUD backdrop.
//!
//! Defaults reproduce the shipped look exactly. Hosts may override any
//! subset through JSON; omitted fields keep their defaults.

use crate::model::{Color, Ping, default_pings};
use serde::{Deserialize, Serialize};

/// Upper bound on `grid_count`. The mesh holds `4 × grid_count + 2` lines.
pub const MAX_GRID_COUNT: u32 = 1000;

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration for the HUD renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Distance between mesh lines, in logical units. Default: **40**.
    pub grid_spacing: f64,

    /// Cells drawn on each side of the center. Default: **20** (41 × 41 lines).
    pub grid_count: u32,

    /// Mesh stroke. Default: `rgba(128, 128, 128, 0.15)`.
    pub mesh_color: Color,

    /// Mesh line width in logical units. Default: **1**.
    pub mesh_line_width: f64,

    /// Degrees the mesh turns every `rotation_period_ms`. Default: **6**.
    pub rotation_degrees: f64,

    /// Default: **30000**.
    pub rotation_period_ms: f64,

    /// Length of one ping pulse. Default: **6000**.
    pub ping_cycle_ms: f64,

    /// Radius a ping reaches at the end of its cycle. Default: **24**.
    pub ping_max_radius: f64,

    /// Multiplier applied to the fading opacity. Default: **0.6**.
    pub ping_alpha_scale: f64,

    /// Glow blur around each ping. Default: **10**.
    pub ping_glow_blur: f64,

    pub pings: Vec<Ping>,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 40.0,
            grid_count: 20,
            mesh_color: Color::from_rgba8(128, 128, 128, 0.15),
            mesh_line_width: 1.0,
            rotation_degrees: 6.0,
            rotation_period_ms: 30_000.0,
            ping_cycle_ms: 6_000.0,
            ping_max_radius: 24.0,
            ping_alpha_scale: 0.6,
            ping_glow_blur: 10.0,
            pings: default_pings(),
        }
    }
}

impl HudConfig {
    /// Check that the timing and spacing values can drive an animation.
    ///
    /// # Errors
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("grid_spacing", self.grid_spacing),
            ("rotation_period_ms", self.rotation_period_ms),
            ("ping_cycle_ms", self.ping_cycle_ms),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        if self.grid_count > MAX_GRID_COUNT {
            return Err(format!(
                "grid_count must be at most {MAX_GRID_COUNT}, got {}",
                self.grid_count
            ));
        }
        if !(self.ping_max_radius.is_finite() && self.ping_max_radius >= 0.0) {
            return Err(format!(
                "ping_max_radius must be non-negative, got {}",
                self.ping_max_radius
            ));
        }
        for (i, ping) in self.pings.iter().enumerate() {
            if !(0.0..=1.0).contains(&ping.x) || !(0.0..=1.0).contains(&ping.y) {
                return Err(format!(
                    "ping {i} position ({}, {}) is outside [0, 1]",
                    ping.x, ping.y
                ));
            }
        }
        Ok(())
    }

    /// Parse a JSON override and validate the result.
    ///
    /// # Errors
    /// Returns the JSON error or the validation message.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid HUD config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Half the mesh's side length, in logical units.
    pub fn mesh_extent(&self) -> f64 {
        self.grid_count as f64 * self.grid_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_shipped_constants() {
        let c = HudConfig::default();
        assert_eq!(c.mesh_extent(), 800.0);
        assert_eq!(c.mesh_color.to_css(), "rgba(128, 128, 128, 0.15)");
        assert_eq!(c.pings.len(), 4);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c: HudConfig = serde_json::from_str(r#"{"grid_spacing": 50}"#).unwrap();
        assert_eq!(c.grid_spacing, 50.0);
        assert_eq!(c.grid_count, 20);
        assert_eq!(c.ping_cycle_ms, 6000.0);
    }

    #[test]
    fn rejects_zero_cycle() {
        let c = HudConfig {
            ping_cycle_ms: 0.0,
            ..HudConfig::default()
        };
        let err = c.validate().unwrap_err();
        assert!(err.contains("ping_cycle_ms"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_huge_grid_count() {
        let err = HudConfig::from_json(r#"{"grid_count": 4000000000}"#).unwrap_err();
        assert!(err.contains("grid_count"), "unexpected error: {err}");

        let at_cap = HudConfig {
            grid_count: MAX_GRID_COUNT,
            ..HudConfig::default()
        };
        assert!(at_cap.validate().is_ok());
    }

    #[test]
    fn rejects_ping_outside_surface() {
        let mut c = HudConfig::default();
        c.pings[1].x = 1.5;
        assert!(c.validate().unwrap_err().contains("ping 1"));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = HudConfig::from_json("{nope").unwrap_err();
        assert!(err.starts_with("invalid HUD config"));
    }

    #[test]
    fn from_json_validates() {
        let err = HudConfig::from_json(r#"{"rotation_period_ms": -1}"#).unwrap_err();
        assert!(err.contains("rotation_period_ms"));
    }
}
