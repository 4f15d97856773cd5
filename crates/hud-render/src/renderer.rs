//! Mount/unmount lifecycle and the per-frame loop.
//!
//! One `HudRenderer` owns one mount. Start time and the pending frame handle
//! live here rather than in any global, so independent instances never share
//! timers or listeners.

use crate::host::{Environment, FrameHandle, FrameScheduler};
use crate::paint::{Painter, paint_frame, paint_static};
use hud_core::anim::{MeshLine, mesh_lines};
use hud_core::{HudConfig, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    /// Not mounted, or the mount was skipped because the host had no surface.
    Unmounted,
    /// Reduced motion: one still frame, no loop.
    Static,
    /// Repainting on every frame.
    Animating,
}

pub struct HudRenderer<E, S, P> {
    config: HudConfig,
    mesh: Vec<MeshLine>,
    env: E,
    scheduler: S,
    painter: Option<P>,
    surface: Option<Surface>,
    state: RendererState,
    start_ms: f64,
    pending: Option<FrameHandle>,
    listening: bool,
}

impl<E: Environment, S: FrameScheduler, P: Painter> HudRenderer<E, S, P> {
    pub fn new(config: HudConfig, env: E, scheduler: S) -> Self {
        let mesh = mesh_lines(&config);
        Self {
            config,
            mesh,
            env,
            scheduler,
            painter: None,
            surface: None,
            state: RendererState::Unmounted,
            start_ms: 0.0,
            pending: None,
            listening: false,
        }
    }

    /// Attach to a drawing surface and start the loop.
    ///
    /// `painter` is `None` when the host could not obtain a drawing context.
    /// A missing context or container leaves the renderer unmounted and
    /// inert; nothing is reported to the caller.
    pub fn mount(&mut self, painter: Option<P>) {
        if let Err(reason) = self.try_mount(painter) {
            log::debug!("HUD mount skipped: {reason}");
        }
    }

    fn try_mount(&mut self, painter: Option<P>) -> Result<(), String> {
        if self.state != RendererState::Unmounted {
            return Err("already mounted".to_string());
        }
        let mut painter = painter.ok_or("2D drawing context unavailable")?;
        let metrics = self
            .env
            .viewport_metrics()
            .ok_or("container unavailable")?;

        let surface = Surface::from_metrics(metrics);
        painter.resize(&surface);
        self.surface = Some(surface);
        self.painter = Some(painter);
        self.start_ms = self.env.now_ms();

        // The resize listener goes in before the motion check, so a static
        // still keeps its backing store in sync with the container.
        match self.scheduler.listen_resize() {
            Ok(()) => self.listening = true,
            Err(e) => log::debug!("HUD resize listener unavailable: {e}"),
        }

        if self.env.prefers_reduced_motion() {
            self.state = RendererState::Static;
            if let Some(painter) = self.painter.as_mut() {
                paint_static(painter, &surface, &self.config, &self.mesh);
            }
            log::debug!(
                "HUD mounted static at {}x{} css (reduced motion)",
                surface.width_css,
                surface.height_css
            );
            return Ok(());
        }

        self.state = RendererState::Animating;
        log::debug!(
            "HUD mounted at {}x{} css, dpr {}",
            surface.width_css,
            surface.height_css,
            surface.device_pixel_ratio
        );
        self.frame();
        Ok(())
    }

    /// Paint one frame and schedule the next.
    ///
    /// Called by the host when a requested frame fires. Returns `false`
    /// without drawing when the renderer is not animating.
    pub fn frame(&mut self) -> bool {
        // An extra call while a request is queued would fork a second loop.
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state != RendererState::Animating {
            return false;
        }
        let (Some(painter), Some(surface)) = (self.painter.as_mut(), self.surface.as_ref()) else {
            return false;
        };

        let elapsed = self.env.now_ms() - self.start_ms;
        paint_frame(painter, surface, &self.config, &self.mesh, elapsed);

        match self.scheduler.request_frame() {
            Ok(handle) => self.pending = Some(handle),
            Err(e) => {
                log::debug!("HUD frame request failed, stopping loop: {e}");
                self.state = RendererState::Static;
            }
        }
        true
    }

    /// Re-read the container size and resize the surface.
    ///
    /// Takes effect immediately; the next frame paints at the new size.
    /// Static mounts are resized but not repainted.
    pub fn resize(&mut self) {
        if self.state == RendererState::Unmounted {
            return;
        }
        let Some(metrics) = self.env.viewport_metrics() else {
            log::debug!("HUD resize ignored: container unavailable");
            return;
        };
        let surface = Surface::from_metrics(metrics);
        if let Some(painter) = self.painter.as_mut() {
            painter.resize(&surface);
        }
        log::debug!(
            "HUD resized to {}x{} px",
            surface.width_px,
            surface.height_px
        );
        self.surface = Some(surface);
    }

    /// Cancel the pending frame, drop the resize listener, and hand the
    /// painter back to the host.
    ///
    /// Safe to call repeatedly; later calls do nothing and return `None`.
    pub fn unmount(&mut self) -> Option<P> {
        if self.state == RendererState::Unmounted {
            return None;
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.listening {
            self.scheduler.unlisten_resize();
            self.listening = false;
        }
        self.surface = None;
        self.state = RendererState::Unmounted;
        log::debug!("HUD unmounted");
        self.painter.take()
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn painter(&self) -> Option<&P> {
        self.painter.as_ref()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
