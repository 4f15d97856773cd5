//! A painter that records calls instead of drawing.
//!
//! Used by the renderer tests and handy for hosts that want to assert what a
//! frame would draw without a canvas.

use crate::paint::Painter;
use hud_core::{Color, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Resize(Surface),
    Clear,
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Stroke {
        color: Color,
        width: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
        blur: f64,
    },
}

#[derive(Debug, Default)]
pub struct RecordingPainter {
    commands: Vec<DrawCmd>,
    surface: Option<Surface>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Number of frames painted so far (each paint starts with a clear).
    pub fn paints(&self) -> usize {
        self.count(|c| *c == DrawCmd::Clear)
    }

    /// The surface from the latest resize.
    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }
}

impl Painter for RecordingPainter {
    fn resize(&mut self, surface: &Surface) {
        self.surface = Some(*surface);
        self.commands.push(DrawCmd::Resize(*surface));
    }

    fn clear(&mut self, _surface: &Surface) {
        self.commands.push(DrawCmd::Clear);
    }

    fn save(&mut self) {
        self.commands.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCmd::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCmd::Translate(x, y));
    }

    fn rotate(&mut self, radians: f64) {
        self.commands.push(DrawCmd::Rotate(radians));
    }

    fn set_stroke(&mut self, color: Color, width: f64) {
        self.commands.push(DrawCmd::Stroke { color, width });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.commands.push(DrawCmd::Line { from, to });
    }

    fn fill_glow_circle(
        &mut self,
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
        blur: f64,
    ) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
            alpha,
            blur,
        });
    }
}
