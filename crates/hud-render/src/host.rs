//! Host seams: everything the renderer reads from or schedules on the platform.

use hud_core::ViewportMetrics;

/// Opaque id of a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Read-only view of the host environment.
pub trait Environment {
    /// Current logical size of the container and the display's pixel ratio.
    /// `None` when the container is gone.
    fn viewport_metrics(&self) -> Option<ViewportMetrics>;

    /// Whether the user asked the platform to minimize motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// Wall-clock time in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Frame and resize-event plumbing.
///
/// The renderer never calls back into itself: the host fires the scheduled
/// frame by calling [`crate::HudRenderer::frame`] and forwards resize events
/// to [`crate::HudRenderer::resize`].
pub trait FrameScheduler {
    /// Ask for one call to `frame()` on the next display refresh.
    ///
    /// # Errors
    /// Returns the host's reason when the request cannot be queued.
    fn request_frame(&mut self) -> Result<FrameHandle, String>;

    /// Drop a pending request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start forwarding resize events.
    ///
    /// # Errors
    /// Returns the host's reason when the listener cannot be registered.
    fn listen_resize(&mut self) -> Result<(), String>;

    fn unlisten_resize(&mut self);
}
