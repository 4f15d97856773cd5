//! Browser implementations of the renderer's host seams.

use hud_core::ViewportMetrics;
use hud_render::{Environment, FrameHandle, FrameScheduler};
use web_sys::{HtmlCanvasElement, Window};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Reads `matchMedia` once. `false` when the query is unsupported.
pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mql| mql.matches())
}

/// Measures the canvas element and the window it lives in.
pub struct BrowserEnvironment {
    window: Window,
    canvas: HtmlCanvasElement,
}

impl BrowserEnvironment {
    pub fn new(window: Window, canvas: HtmlCanvasElement) -> Self {
        Self { window, canvas }
    }
}

impl Environment for BrowserEnvironment {
    fn viewport_metrics(&self) -> Option<ViewportMetrics> {
        if !self.canvas.is_connected() {
            return None;
        }
        let rect = self.canvas.get_bounding_client_rect();
        Some(ViewportMetrics::new(
            rect.width(),
            rect.height(),
            self.window.device_pixel_ratio(),
        ))
    }

    fn prefers_reduced_motion(&self) -> bool {
        prefers_reduced_motion(&self.window)
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// `requestAnimationFrame` plus a window `resize` listener.
///
/// Holds only the JS functions; the Rust closures behind them are owned by
/// the mounted canvas so they outlive every callback they can receive.
pub struct RafScheduler {
    window: Window,
    on_frame: Option<js_sys::Function>,
    on_resize: Option<js_sys::Function>,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            on_frame: None,
            on_resize: None,
        }
    }

    pub fn set_callbacks(&mut self, on_frame: js_sys::Function, on_resize: js_sys::Function) {
        self.on_frame = Some(on_frame);
        self.on_resize = Some(on_resize);
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, String> {
        let callback = self.on_frame.as_ref().ok_or("frame callback not installed")?;
        self.window
            .request_animation_frame(callback)
            .map(FrameHandle)
            .map_err(|e| format!("requestAnimationFrame failed: {e:?}"))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }

    fn listen_resize(&mut self) -> Result<(), String> {
        let callback = self
            .on_resize
            .as_ref()
            .ok_or("resize callback not installed")?;
        self.window
            .add_event_listener_with_callback("resize", callback)
            .map_err(|e| format!("addEventListener failed: {e:?}"))
    }

    fn unlisten_resize(&mut self) {
        if let Some(callback) = self.on_resize.as_ref() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", callback);
        }
    }
}
