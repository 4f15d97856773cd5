//! WASM bridge for the radar HUD: exposes the background animation and the
//! hero-section timers to JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and loaded by the landing page.

mod browser;
mod hero;
mod render2d;

use std::cell::RefCell;
use std::rc::Rc;

use browser::{BrowserEnvironment, RafScheduler};
use hud_core::HudConfig;
use hud_render::{HudRenderer, RendererState};
use render2d::Canvas2dPainter;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use hero::{HeadlineLoop, LoadingScreen, TextTyper};

type BrowserRenderer = HudRenderer<BrowserEnvironment, RafScheduler, Canvas2dPainter>;

/// A live renderer plus the JS callbacks that drive it.
///
/// The closures hold only weak references, so dropping `renderer` here ends
/// any callback that is still queued in the browser.
struct Mounted {
    renderer: Rc<RefCell<BrowserRenderer>>,
    _on_frame: Closure<dyn FnMut()>,
    _on_resize: Closure<dyn FnMut()>,
}

impl Mounted {
    fn attach(canvas: Option<HtmlCanvasElement>, config: HudConfig) -> Result<Self, String> {
        let canvas = canvas.ok_or("no canvas element")?;
        let window = web_sys::window().ok_or("no window")?;

        let env = BrowserEnvironment::new(window.clone(), canvas.clone());
        let scheduler = RafScheduler::new(window);
        let renderer = Rc::new(RefCell::new(HudRenderer::new(config, env, scheduler)));

        let weak = Rc::downgrade(&renderer);
        let on_frame = Closure::<dyn FnMut()>::new(move || {
            if let Some(r) = weak.upgrade() {
                r.borrow_mut().frame();
            }
        });
        let weak = Rc::downgrade(&renderer);
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if let Some(r) = weak.upgrade() {
                r.borrow_mut().resize();
            }
        });

        {
            let mut r = renderer.borrow_mut();
            r.scheduler_mut().set_callbacks(
                on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone(),
                on_resize.as_ref().unchecked_ref::<js_sys::Function>().clone(),
            );
            r.mount(Canvas2dPainter::new(canvas));
            if r.state() == RendererState::Unmounted {
                return Err("renderer stayed unmounted".into());
            }
        }

        Ok(Self {
            renderer,
            _on_frame: on_frame,
            _on_resize: on_resize,
        })
    }
}

/// The radar-mesh background bound to one `<canvas>`.
///
/// Mounting never throws: a missing canvas, window, or 2D context yields an
/// inert handle whose `active` getter is `false`.
#[wasm_bindgen]
pub struct HudCanvas {
    mounted: Option<Mounted>,
}

impl HudCanvas {
    fn attach(canvas: Option<HtmlCanvasElement>, config: HudConfig) -> Self {
        init_runtime();
        match Mounted::attach(canvas, config) {
            Ok(mounted) => Self {
                mounted: Some(mounted),
            },
            Err(reason) => {
                log::debug!("HUD canvas inert: {reason}");
                Self { mounted: None }
            }
        }
    }
}

#[wasm_bindgen]
impl HudCanvas {
    /// Start drawing with the default mesh and pings.
    pub fn mount(canvas: Option<HtmlCanvasElement>) -> HudCanvas {
        Self::attach(canvas, HudConfig::default())
    }

    /// Start drawing with a JSON config. Throws only on a malformed config.
    #[wasm_bindgen(js_name = mountWithConfig)]
    pub fn mount_with_config(
        canvas: Option<HtmlCanvasElement>,
        config_json: &str,
    ) -> Result<HudCanvas, JsValue> {
        let config = HudConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::attach(canvas, config))
    }

    /// Stop the loop and detach the resize listener. Safe to call twice.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            let _ = mounted.renderer.borrow_mut().unmount();
        }
    }

    /// `true` while mounted, animated or static.
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.mounted.is_some()
    }

    /// `true` while frames are being scheduled.
    #[wasm_bindgen(getter)]
    pub fn animating(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.renderer.borrow().state() == RendererState::Animating)
    }
}

impl Drop for HudCanvas {
    fn drop(&mut self) {
        self.unmount();
    }
}

// ─── Runtime setup ───────────────────────────────────────────────────────

fn init_runtime() {
    console_error_panic_hook::set_once();
    // Only the first call installs the logger; later calls leave the level alone.
    let _ = console_log::init_with_level(log::Level::Warn);
}

/// Change console verbosity (`"off"` … `"trace"`). Returns `false` for an
/// unknown level name.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> bool {
    init_runtime();
    match parse_level(level) {
        Some(filter) => {
            log::set_max_level(filter);
            true
        }
        None => false,
    }
}

fn parse_level(name: &str) -> Option<log::LevelFilter> {
    use log::LevelFilter;
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

// ─── Standalone functions (no canvas needed) ─────────────────────────────

/// Whether the user asked the OS for reduced motion.
#[wasm_bindgen(js_name = prefersReducedMotion)]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window().is_some_and(|w| browser::prefers_reduced_motion(&w))
}

/// Render one HUD frame as SVG markup. `elapsedMs` omitted gives the static
/// reduced-motion frame.
#[wasm_bindgen(js_name = snapshotSvg)]
pub fn snapshot_svg(
    width: f64,
    height: f64,
    elapsed_ms: Option<f64>,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => HudConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?,
        None => HudConfig::default(),
    };
    Ok(hud_render::render_svg(&config, width, height, elapsed_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_names() {
        assert_eq!(parse_level("Debug"), Some(log::LevelFilter::Debug));
        assert_eq!(parse_level(" warning "), Some(log::LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn snapshot_defaults_to_static_mesh() {
        let svg = snapshot_svg(800.0, 600.0, None, None).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), 0);
    }

    #[test]
    fn snapshot_animated_draws_pings() {
        let svg = snapshot_svg(800.0, 600.0, Some(0.0), None).unwrap();
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn snapshot_honors_custom_pings() {
        let json = r##"{"pings": [{"x": 0.5, "y": 0.5, "color": "#FF0000", "offset_ms": 0}]}"##;
        let svg = snapshot_svg(100.0, 100.0, Some(3000.0), Some(json.to_string())).unwrap();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains(r##"fill="#FF0000""##));
    }
}
