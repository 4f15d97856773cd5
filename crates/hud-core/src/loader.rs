//! Scripted boot sequence shown before the hero fades in.
//!
//! Progress is fake: every tick adds a random 3–11 points, the status label
//! steps forward at each 20% threshold, and the screen reports completion a
//! fixed delay after hitting 100%. The host owns the interval timer and
//! calls [`LoadingSimulator::tick`]; randomness is injected so tests can pin it.

pub const TICK_INTERVAL_MS: f64 = 150.0;
pub const COMPLETION_DELAY_MS: f64 = 1000.0;

const MIN_INCREMENT: f64 = 3.0;
const INCREMENT_SPREAD: f64 = 8.0;

/// Status labels, in order. The last one is reached only if progress
/// passes 80% before the final tick.
pub const LOADING_STEPS: [&str; 5] = [
    "INITIALIZING...",
    "CONNECTING TO MATRIX...",
    "LOADING NEURAL NETWORKS...",
    "CALIBRATING SYSTEMS...",
    "READY",
];

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoaderPhase {
    Loading,
    /// Progress hit 100; waiting out the completion delay.
    Finishing { done_at_ms: f64 },
    Complete,
}

#[derive(Debug, Clone)]
pub struct LoadingSimulator {
    progress: f64,
    step: usize,
    phase: LoaderPhase,
}

impl Default for LoadingSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingSimulator {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            step: 0,
            phase: LoaderPhase::Loading,
        }
    }

    /// Advance one interval tick at `now_ms`.
    ///
    /// Returns `true` if anything visible changed. Ticks after progress
    /// reaches 100 are ignored.
    pub fn tick(&mut self, now_ms: f64, rng: &mut impl RandomSource) -> bool {
        if self.phase != LoaderPhase::Loading {
            return false;
        }

        let r = rng.next_unit().clamp(0.0, 1.0);
        self.progress += r * INCREMENT_SPREAD + MIN_INCREMENT;

        if self.progress >= 100.0 {
            self.progress = 100.0;
            self.phase = LoaderPhase::Finishing {
                done_at_ms: now_ms + COMPLETION_DELAY_MS,
            };
            log::debug!("loader reached 100%, completing at {}", now_ms + COMPLETION_DELAY_MS);
            return true;
        }

        let threshold = (self.step + 1) as f64 * (100.0 / LOADING_STEPS.len() as f64);
        if self.progress >= threshold && self.step < LOADING_STEPS.len() - 1 {
            self.step += 1;
            log::trace!("loader step -> {}", LOADING_STEPS[self.step]);
        }
        true
    }

    /// Settle the completion delay. Returns the phase after polling.
    pub fn poll(&mut self, now_ms: f64) -> LoaderPhase {
        if let LoaderPhase::Finishing { done_at_ms } = self.phase
            && now_ms >= done_at_ms
        {
            self.phase = LoaderPhase::Complete;
        }
        self.phase
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whole-number percentage for display.
    pub fn percent(&self) -> u32 {
        self.progress.round() as u32
    }

    pub fn label(&self) -> &'static str {
        LOADING_STEPS[self.step]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixed(r: f64) -> impl FnMut() -> f64 {
        move || r
    }

    #[test]
    fn starts_at_zero() {
        let l = LoadingSimulator::new();
        assert_eq!(l.percent(), 0);
        assert_eq!(l.label(), "INITIALIZING...");
        assert_eq!(l.phase(), LoaderPhase::Loading);
    }

    #[test]
    fn increments_between_three_and_eleven() {
        let mut low = LoadingSimulator::new();
        low.tick(0.0, &mut fixed(0.0));
        assert_eq!(low.progress(), 3.0);

        let mut high = LoadingSimulator::new();
        high.tick(0.0, &mut fixed(0.5));
        assert_eq!(high.progress(), 7.0);
    }

    #[test]
    fn label_advances_at_twenty_percent() {
        let mut l = LoadingSimulator::new();
        let mut rng = fixed(0.5); // +7 per tick
        l.tick(0.0, &mut rng); // 7
        l.tick(150.0, &mut rng); // 14
        assert_eq!(l.label(), "INITIALIZING...");
        l.tick(300.0, &mut rng); // 21
        assert_eq!(l.label(), "CONNECTING TO MATRIX...");
    }

    #[test]
    fn completes_after_delay() {
        let mut l = LoadingSimulator::new();
        let mut rng = fixed(0.999);
        let mut now = 0.0;
        while l.phase() == LoaderPhase::Loading {
            l.tick(now, &mut rng);
            now += TICK_INTERVAL_MS;
        }
        let reached = now - TICK_INTERVAL_MS;
        assert_eq!(l.percent(), 100);
        assert_eq!(
            l.phase(),
            LoaderPhase::Finishing {
                done_at_ms: reached + COMPLETION_DELAY_MS
            }
        );
        assert!(matches!(l.poll(reached + 999.0), LoaderPhase::Finishing { .. }));
        assert_eq!(l.poll(reached + 1000.0), LoaderPhase::Complete);
        assert!(!l.tick(now, &mut rng));
        assert_eq!(l.label(), "READY");
    }
}
