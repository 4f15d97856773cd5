//! Core data model for the HUD backdrop.
//!
//! Everything here is plain, immutable-by-default data: colors, the host
//! viewport as measured at a point in time, the backing surface derived from
//! it, and the fixed set of pings. Animation state is never stored; it is
//! recomputed from elapsed time (see [`crate::anim`]).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let short = |i: usize| hex_val(bytes[i]).map(|v| (v * 17) as f32 / 255.0);
        let long = |i: usize| -> Option<f32> {
            let hi = hex_val(bytes[i])?;
            let lo = hex_val(bytes[i + 1])?;
            Some((hi << 4 | lo) as f32 / 255.0)
        };

        match bytes.len() {
            3 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, 1.0)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Channels as 8-bit integers, alpha excluded.
    pub fn rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Opaque `#RRGGBB`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex_rgba(&self) -> String {
        if (self.a - 1.0).abs() < f32::EPSILON {
            return self.to_hex();
        }
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("{}{a:02X}", self.to_hex())
    }

    /// CSS color string accepted by both Canvas2D and SVG.
    ///
    /// Opaque colors emit `#RRGGBB`; translucent ones emit `rgba(...)`.
    pub fn to_css(&self) -> String {
        if (self.a - 1.0).abs() < f32::EPSILON {
            self.to_hex()
        } else {
            let (r, g, b) = self.rgb8();
            let a = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
            format!("rgba({r}, {g}, {b}, {a})")
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_rgba())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s}")))
    }
}

// ─── Viewport & surface ──────────────────────────────────────────────────

/// Container size and pixel density, as read from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub width_css: f64,
    pub height_css: f64,
    pub device_pixel_ratio: f64,
}

impl ViewportMetrics {
    /// Build metrics, normalizing bogus host values.
    ///
    /// A ratio that is zero, negative, or not finite falls back to `1.0`;
    /// negative or non-finite sizes clamp to zero.
    pub fn new(width_css: f64, height_css: f64, device_pixel_ratio: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width_css: sanitize(width_css),
            height_css: sanitize(height_css),
            device_pixel_ratio: dpr,
        }
    }
}

/// Backing store dimensions for one mount.
///
/// Invariant: `width_px == width_css × dpr` (truncated to whole pixels, as
/// the canvas `width` attribute does), likewise for height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width_px: u32,
    pub height_px: u32,
    pub width_css: f64,
    pub height_css: f64,
    pub device_pixel_ratio: f64,
}

impl Surface {
    pub fn from_metrics(metrics: ViewportMetrics) -> Self {
        Self {
            width_px: (metrics.width_css * metrics.device_pixel_ratio) as u32,
            height_px: (metrics.height_css * metrics.device_pixel_ratio) as u32,
            width_css: metrics.width_css,
            height_css: metrics.height_css,
            device_pixel_ratio: metrics.device_pixel_ratio,
        }
    }

    /// Geometric center in logical units.
    pub fn center(&self) -> (f64, f64) {
        (self.width_css / 2.0, self.height_css / 2.0)
    }
}

// ─── Pings ───────────────────────────────────────────────────────────────

/// A repeating pulse anchored at a fractional position of the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ping {
    /// Horizontal position as a fraction of the logical width.
    pub x: f64,
    /// Vertical position as a fraction of the logical height.
    pub y: f64,
    pub color: Color,
    /// Shifts this ping's cycle so pulses never line up.
    pub offset_ms: f64,
}

impl Ping {
    pub const fn new(x: f64, y: f64, color: Color, offset_ms: f64) -> Self {
        Self {
            x,
            y,
            color,
            offset_ms,
        }
    }

    /// Anchor in logical units for a surface of the given size.
    pub fn anchor(&self, width_css: f64, height_css: f64) -> (f64, f64) {
        (self.x * width_css, self.y * height_css)
    }
}

/// The four pings, one per studio project, staggered by 1.5 s.
pub fn default_pings() -> Vec<Ping> {
    vec![
        Ping::new(0.2, 0.3, Color::from_rgba8(0x00, 0xC5, 0x96, 1.0), 0.0),
        Ping::new(0.7, 0.6, Color::from_rgba8(0xA0, 0xFF, 0xE6, 1.0), 1500.0),
        Ping::new(0.4, 0.8, Color::from_rgba8(0x9B, 0x7D, 0xFF, 1.0), 3000.0),
        Ping::new(0.8, 0.2, Color::from_rgba8(0xFF, 0xC1, 0x5A, 1.0), 4500.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_hex_forms() {
        let c = Color::from_hex("#00C596").unwrap();
        assert_eq!(c.to_hex(), "#00C596");

        let short = Color::from_hex("fff").unwrap();
        assert_eq!(short.to_hex(), "#FFFFFF");

        let translucent = Color::from_hex("#80808026").unwrap();
        assert_eq!(translucent.to_css(), "rgba(128, 128, 128, 0.149)");

        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
    }

    #[test]
    fn css_for_translucent_color() {
        let c = Color::from_rgba8(128, 128, 128, 0.15);
        assert_eq!(c.to_css(), "rgba(128, 128, 128, 0.15)");
    }

    #[test]
    fn bogus_dpr_falls_back_to_one() {
        assert_eq!(ViewportMetrics::new(10.0, 10.0, 0.0).device_pixel_ratio, 1.0);
        assert_eq!(ViewportMetrics::new(10.0, 10.0, f64::NAN).device_pixel_ratio, 1.0);
        assert_eq!(ViewportMetrics::new(10.0, 10.0, -2.0).device_pixel_ratio, 1.0);
    }

    #[test]
    fn surface_scales_by_dpr() {
        for dpr in [1.0, 2.0, 3.0] {
            let s = Surface::from_metrics(ViewportMetrics::new(800.0, 600.0, dpr));
            assert_eq!(s.width_px, (800.0 * dpr) as u32);
            assert_eq!(s.height_px, (600.0 * dpr) as u32);
            assert_eq!(s.width_css, 800.0);
            assert_eq!(s.height_css, 600.0);
        }
    }

    #[test]
    fn default_pings_are_staggered() {
        let pings = default_pings();
        assert_eq!(pings.len(), 4);
        let offsets: Vec<f64> = pings.iter().map(|p| p.offset_ms).collect();
        assert_eq!(offsets, vec![0.0, 1500.0, 3000.0, 4500.0]);
        assert_eq!(pings[2].color.to_hex(), "#9B7DFF");
    }

    #[test]
    fn color_serde_uses_css_strings() {
        let c = Color::from_hex("#FFC15A").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#FFC15A\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_hex(), "#FFC15A");
    }
}
