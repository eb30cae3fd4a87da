//! Recording surface.
//!
//! A [`Surface`] implementation that keeps every draw call as a
//! [`DrawCommand`] instead of painting anything. It backs the test suite
//! and is handy for headless hosts that want to replay a frame against a
//! real canvas later.
//!
//! ```
//! use delilah_engine::color::Rgb;
//! use delilah_engine::render::{DrawCommand, RecordingSurface, Surface};
//!
//! let mut surface = RecordingSurface::new();
//! surface.set_fill_color(Rgb::new(170, 170, 170));
//! surface.fill_rect(0.0, 0.0, 640.0, 480.0);
//!
//! assert_eq!(surface.commands().len(), 2);
//! assert!(matches!(surface.commands()[1], DrawCommand::FillRect { .. }));
//! ```

use crate::color::Rgb;
use crate::render::Surface;

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillColor(Rgb),
    StrokeColor(Rgb),
    LineWidth(f64),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Arc { cx: f64, cy: f64, radius: f64, start: f64, end: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Fill,
    Stroke,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
}

/// A surface that records draw calls in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drops the recording, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_fill_color(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }
}
