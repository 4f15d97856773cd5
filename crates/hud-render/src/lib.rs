//! Radar HUD renderer: frame loop lifecycle over injected host seams.
//!
//! [`HudRenderer`] owns one mount: it sizes the surface, paints the mesh and
//! pings each frame, and tears down its frame request and resize listener on
//! unmount. Platform access goes through [`Environment`], [`FrameScheduler`],
//! and [`Painter`], so the whole loop runs under test without a display.

pub mod host;
pub mod paint;
pub mod record;
pub mod renderer;
pub mod svg;

pub use host::{Environment, FrameHandle, FrameScheduler};
pub use paint::{Painter, paint_frame, paint_static};
pub use record::{DrawCmd, RecordingPainter};
pub use renderer::{HudRenderer, RendererState};
pub use svg::render_svg;
