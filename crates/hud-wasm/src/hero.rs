//! JS wrappers for the hero-section timers.
//!
//! The page owns `setInterval`/`setTimeout`; these classes only answer
//! "what should be on screen at time t".

use hud_core::loader::{COMPLETION_DELAY_MS, TICK_INTERVAL_MS};
use hud_core::typewriter::{DEFAULT_REVEAL_SPEED_MS, MISSION_REVEAL_SPEED_MS};
use hud_core::{HeadlineCycler, LoaderPhase, LoadingSimulator, TextReveal};
use wasm_bindgen::prelude::*;

fn reduced_motion_or_window(explicit: Option<bool>) -> bool {
    explicit.unwrap_or_else(|| {
        web_sys::window().is_some_and(|w| crate::browser::prefers_reduced_motion(&w))
    })
}

// ─── Headlines ───────────────────────────────────────────────────────────

/// Looping tagline under the logo.
#[wasm_bindgen]
pub struct HeadlineLoop {
    inner: HeadlineCycler,
}

#[wasm_bindgen]
impl HeadlineLoop {
    /// Default taglines. `reducedMotion` falls back to the media query.
    #[wasm_bindgen(constructor)]
    pub fn new(reduced_motion: Option<bool>) -> Self {
        Self {
            inner: HeadlineCycler::with_defaults(reduced_motion_or_window(reduced_motion)),
        }
    }

    /// Custom taglines from a JSON array of strings.
    #[wasm_bindgen(js_name = fromLines)]
    pub fn from_lines(
        lines_json: &str,
        interval_ms: f64,
        reduced_motion: Option<bool>,
    ) -> Result<HeadlineLoop, JsValue> {
        let lines: Vec<String> = serde_json::from_str(lines_json)
            .map_err(|e| JsValue::from_str(&format!("invalid headline list: {e}")))?;
        let inner = HeadlineCycler::new(lines, interval_ms, reduced_motion_or_window(reduced_motion))
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = lineAt)]
    pub fn line_at(&self, elapsed_ms: f64) -> String {
        self.inner.line_at(elapsed_ms).to_string()
    }

    #[wasm_bindgen(js_name = indexAt)]
    pub fn index_at(&self, elapsed_ms: f64) -> usize {
        self.inner.index_at(elapsed_ms)
    }

    #[wasm_bindgen(getter, js_name = intervalMs)]
    pub fn interval_ms(&self) -> f64 {
        self.inner.interval_ms()
    }

    #[wasm_bindgen(getter, js_name = isAnimated)]
    pub fn is_animated(&self) -> bool {
        self.inner.is_animated()
    }
}

// ─── Mission statement ───────────────────────────────────────────────────

/// Scroll-triggered typewriter paragraph.
#[wasm_bindgen]
pub struct TextTyper {
    inner: TextReveal,
}

#[wasm_bindgen]
impl TextTyper {
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str, speed_ms: Option<f64>) -> Self {
        Self {
            inner: TextReveal::new(text, speed_ms.unwrap_or(DEFAULT_REVEAL_SPEED_MS)),
        }
    }

    /// Typewriter tuned for the mission statement paragraph.
    #[wasm_bindgen(js_name = forMission)]
    pub fn for_mission(text: &str) -> Self {
        Self::new(text, Some(MISSION_REVEAL_SPEED_MS))
    }

    /// Call when the paragraph scrolls into view.
    pub fn trigger(&mut self, now_ms: f64) {
        self.inner.trigger(now_ms);
    }

    #[wasm_bindgen(js_name = visibleAt)]
    pub fn visible_at(&self, now_ms: f64) -> String {
        self.inner.visible_at(now_ms).to_string()
    }

    #[wasm_bindgen(js_name = isCompleteAt)]
    pub fn is_complete_at(&self, now_ms: f64) -> bool {
        self.inner.is_complete_at(now_ms)
    }

    /// Milliseconds until the next character, or `undefined` when done.
    #[wasm_bindgen(js_name = nextTickIn)]
    pub fn next_tick_in(&self, now_ms: f64) -> Option<f64> {
        self.inner.next_tick_in(now_ms)
    }
}

// ─── Loading screen ──────────────────────────────────────────────────────

/// Fake boot progress shown before the hero.
#[wasm_bindgen]
pub struct LoadingScreen {
    inner: LoadingSimulator,
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl LoadingScreen {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: LoadingSimulator::new(),
        }
    }

    /// Advance one interval tick. Returns `true` if the display changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.inner.tick(now_ms, &mut js_sys::Math::random)
    }

    /// `"loading"`, `"finishing"`, or `"complete"`.
    pub fn poll(&mut self, now_ms: f64) -> String {
        phase_name(self.inner.poll(now_ms)).to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn percent(&self) -> u32 {
        self.inner.percent()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.inner.label().to_string()
    }

    #[wasm_bindgen(js_name = tickIntervalMs)]
    pub fn tick_interval_ms() -> f64 {
        TICK_INTERVAL_MS
    }

    #[wasm_bindgen(js_name = completionDelayMs)]
    pub fn completion_delay_ms() -> f64 {
        COMPLETION_DELAY_MS
    }
}

fn phase_name(phase: LoaderPhase) -> &'static str {
    match phase {
        LoaderPhase::Loading => "loading",
        LoaderPhase::Finishing { .. } => "finishing",
        LoaderPhase::Complete => "complete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn phase_names() {
        assert_eq!(phase_name(LoaderPhase::Loading), "loading");
        assert_eq!(
            phase_name(LoaderPhase::Finishing { done_at_ms: 1.0 }),
            "finishing"
        );
        assert_eq!(phase_name(LoaderPhase::Complete), "complete");
    }

    #[test]
    fn explicit_reduced_motion_skips_window() {
        assert!(reduced_motion_or_window(Some(true)));
        assert!(!reduced_motion_or_window(Some(false)));
    }

    #[test]
    fn mission_typer_uses_mission_speed() {
        let mut t = TextTyper::for_mission("abcd");
        t.trigger(0.0);
        assert_eq!(t.visible_at(60.0), "ab");
        assert!(t.is_complete_at(120.0));
    }

    #[test]
    fn typer_wraps_reveal() {
        let mut t = TextTyper::new("abc", Some(10.0));
        t.trigger(0.0);
        assert_eq!(t.visible_at(20.0), "ab");
        assert_eq!(t.next_tick_in(20.0), Some(10.0));
    }
}
