//! Headline text effects for the hero section.
//!
//! `HeadlineCycler` rotates through a fixed list of taglines on an interval;
//! `TextReveal` types a paragraph out one character at a time once it is
//! triggered (the host triggers it when the paragraph scrolls into view).
//! Both are driven by timestamps the host passes in, so they never own a timer.

/// Taglines shown under the logo, in display order.
pub const DEFAULT_HEADLINES: [&str; 4] = [
    "HUNTING REAL-ESTATE DEALS WORLDWIDE.",
    "ANALYZING PERSONAL HEALTH DATA.",
    "DETECTING AI\u{2011}GENERATED CONTENT.",
    "SUPERCHARGING SMALL\u{2011}BUSINESS GROWTH.",
];

pub const DEFAULT_HEADLINE_INTERVAL_MS: f64 = 2000.0;
pub const DEFAULT_REVEAL_SPEED_MS: f64 = 50.0;
/// The mission statement types faster than the default.
pub const MISSION_REVEAL_SPEED_MS: f64 = 30.0;

// ─── Headline cycler ─────────────────────────────────────────────────────

/// Loops through headlines, one every `interval_ms`.
#[derive(Debug, Clone)]
pub struct HeadlineCycler {
    lines: Vec<String>,
    interval_ms: f64,
    /// Sampled once at construction; pins the first line when set.
    reduced_motion: bool,
}

impl HeadlineCycler {
    /// # Errors
    /// Rejects an empty line list or a non-positive interval.
    pub fn new(
        lines: Vec<String>,
        interval_ms: f64,
        reduced_motion: bool,
    ) -> Result<Self, String> {
        if lines.is_empty() {
            return Err("headline list is empty".to_string());
        }
        if !(interval_ms.is_finite() && interval_ms > 0.0) {
            return Err(format!("headline interval must be positive, got {interval_ms}"));
        }
        Ok(Self {
            lines,
            interval_ms,
            reduced_motion,
        })
    }

    pub fn with_defaults(reduced_motion: bool) -> Self {
        Self {
            lines: DEFAULT_HEADLINES.iter().map(|s| s.to_string()).collect(),
            interval_ms: DEFAULT_HEADLINE_INTERVAL_MS,
            reduced_motion,
        }
    }

    /// Index of the headline visible after `elapsed_ms`.
    pub fn index_at(&self, elapsed_ms: f64) -> usize {
        if self.reduced_motion || elapsed_ms <= 0.0 {
            return 0;
        }
        let ticks = (elapsed_ms / self.interval_ms).floor() as u64;
        (ticks % self.lines.len() as u64) as usize
    }

    pub fn line_at(&self, elapsed_ms: f64) -> &str {
        &self.lines[self.index_at(elapsed_ms)]
    }

    /// Whether the host needs to keep a timer running at all.
    pub fn is_animated(&self) -> bool {
        !self.reduced_motion && self.lines.len() > 1
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

// ─── Text reveal ─────────────────────────────────────────────────────────

/// Types `text` out at one character per `speed_ms` after being triggered.
#[derive(Debug, Clone)]
pub struct TextReveal {
    text: String,
    /// Byte offset after each character, so slicing never splits a code point.
    boundaries: Vec<usize>,
    speed_ms: f64,
    started_at: Option<f64>,
}

impl TextReveal {
    pub fn new(text: impl Into<String>, speed_ms: f64) -> Self {
        let text = text.into();
        let boundaries = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        let speed_ms = if speed_ms.is_finite() && speed_ms > 0.0 {
            speed_ms
        } else {
            DEFAULT_REVEAL_SPEED_MS
        };
        Self {
            text,
            boundaries,
            speed_ms,
            started_at: None,
        }
    }

    /// Start typing at `now_ms`. Re-triggering restarts an unfinished
    /// reveal from the beginning; a finished reveal stays finished.
    pub fn trigger(&mut self, now_ms: f64) {
        if let Some(start) = self.started_at
            && self.is_complete_at(now_ms)
        {
            log::trace!("text reveal already complete (started at {start})");
            return;
        }
        self.started_at = Some(now_ms);
    }

    pub fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    /// Number of characters visible at `now_ms`.
    pub fn visible_chars_at(&self, now_ms: f64) -> usize {
        match self.started_at {
            None => 0,
            Some(start) => {
                let elapsed = (now_ms - start).max(0.0);
                let typed = (elapsed / self.speed_ms).floor() as usize;
                typed.min(self.boundaries.len())
            }
        }
    }

    pub fn visible_at(&self, now_ms: f64) -> &str {
        match self.visible_chars_at(now_ms) {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    pub fn is_complete_at(&self, now_ms: f64) -> bool {
        self.is_triggered() && self.visible_chars_at(now_ms) == self.boundaries.len()
    }

    /// Delay until the next character appears, or `None` once complete
    /// (or before the reveal is triggered).
    pub fn next_tick_in(&self, now_ms: f64) -> Option<f64> {
        let start = self.started_at?;
        if self.is_complete_at(now_ms) {
            return None;
        }
        let typed = self.visible_chars_at(now_ms) as f64;
        Some(start + (typed + 1.0) * self.speed_ms - now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cycler_advances_every_interval() {
        let c = HeadlineCycler::with_defaults(false);
        assert_eq!(c.index_at(0.0), 0);
        assert_eq!(c.index_at(1999.0), 0);
        assert_eq!(c.index_at(2000.0), 1);
        assert_eq!(c.index_at(6500.0), 3);
        assert_eq!(c.index_at(8000.0), 0);
        assert_eq!(c.line_at(2000.0), "ANALYZING PERSONAL HEALTH DATA.");
    }

    #[test]
    fn cycler_reduced_motion_is_static() {
        let c = HeadlineCycler::with_defaults(true);
        assert!(!c.is_animated());
        assert_eq!(c.index_at(10_000.0), 0);
        assert_eq!(c.line_at(99_999.0), DEFAULT_HEADLINES[0]);
    }

    #[test]
    fn cycler_rejects_empty_list() {
        assert!(HeadlineCycler::new(vec![], 2000.0, false).is_err());
        assert!(HeadlineCycler::new(vec!["a".into()], 0.0, false).is_err());
    }

    #[test]
    fn reveal_is_empty_until_triggered() {
        let r = TextReveal::new("hello", 50.0);
        assert_eq!(r.visible_at(10_000.0), "");
        assert!(!r.is_complete_at(10_000.0));
        assert_eq!(r.next_tick_in(0.0), None);
    }

    #[test]
    fn reveal_types_one_char_per_tick() {
        let mut r = TextReveal::new("hello", 50.0);
        r.trigger(1000.0);
        assert_eq!(r.visible_at(1000.0), "");
        assert_eq!(r.visible_at(1050.0), "h");
        assert_eq!(r.visible_at(1149.0), "he");
        assert_eq!(r.next_tick_in(1149.0), Some(1.0));
        assert_eq!(r.visible_at(1250.0), "hello");
        assert!(r.is_complete_at(1250.0));
        assert_eq!(r.next_tick_in(1250.0), None);
    }

    #[test]
    fn reveal_respects_multibyte_chars() {
        let mut r = TextReveal::new("AI\u{2011}OK", 10.0);
        r.trigger(0.0);
        assert_eq!(r.visible_at(30.0), "AI\u{2011}");
        assert_eq!(r.visible_at(50.0), "AI\u{2011}OK");
    }

    #[test]
    fn mission_speed_types_faster() {
        let mut r = TextReveal::new("BUILD", MISSION_REVEAL_SPEED_MS);
        r.trigger(0.0);
        assert_eq!(r.visible_at(90.0), "BUI");
        assert!(r.is_complete_at(150.0));
    }

    #[test]
    fn finished_reveal_ignores_retrigger() {
        let mut r = TextReveal::new("ab", 50.0);
        r.trigger(0.0);
        r.trigger(500.0);
        assert_eq!(r.visible_at(500.0), "ab");
    }
}
