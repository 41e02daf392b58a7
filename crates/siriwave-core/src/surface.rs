//! The drawing surface the wave is rendered onto.
//!
//! The trait mirrors the subset of a 2D canvas API the curves need. Hosts
//! implement it over their real canvas; [`RecordingSurface`] captures the
//! command stream instead, which is what the tests inspect.

use crate::color::{Rgb, Rgba};
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    /// Additive blending: overlapping fills lighten each other.
    Lighter,
    /// Erases whatever the fill covers.
    DestinationOut,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: DVec2,
    pub end: DVec2,
    pub stops: SmallVec<[ColorStop; 4]>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

pub trait DrawingSurface {
    fn set_composite(&mut self, op: Composite);
    fn set_global_alpha(&mut self, alpha: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    fn close_path(&mut self);
    fn set_stroke_style(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, paint: &Paint);
    fn fill(&mut self);
    fn fill_rect(&mut self, rect: Rect);

    /// Erase the whole `width` x `height` area regardless of the fill style.
    fn clear(&mut self, width: f64, height: f64) {
        self.set_global_alpha(1.0);
        self.set_composite(Composite::DestinationOut);
        self.set_fill_style(&Paint::Solid(Rgb::new(0, 0, 0).with_alpha(1.0)));
        self.fill_rect(Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
        });
        self.set_composite(Composite::SourceOver);
    }

    /// Start a new path through `points`; the first point opens the subpath.
    fn trace(&mut self, points: &[DVec2]) {
        self.begin_path();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.move_to(*first);
        }
        for p in iter {
            self.line_to(*p);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Composite(Composite),
    GlobalAlpha(f64),
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    ClosePath,
    StrokeStyle(Rgba),
    LineWidth(f64),
    Stroke,
    FillStyle(Paint),
    Fill,
    FillRect(Rect),
}

/// Surface that keeps every command it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|&c| pred(c)).count()
    }

    /// Paths as point lists, split on `BeginPath`.
    pub fn paths(&self) -> Vec<Vec<DVec2>> {
        let mut out: Vec<Vec<DVec2>> = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::BeginPath => out.push(Vec::new()),
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => {
                    if let Some(path) = out.last_mut() {
                        path.push(*p);
                    }
                }
                _ => {}
            }
        }
        out
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_composite(&mut self, op: Composite) {
        self.commands.push(DrawCommand::Composite(op));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }
    fn move_to(&mut self, p: DVec2) {
        self.commands.push(DrawCommand::MoveTo(p));
    }
    fn line_to(&mut self, p: DVec2) {
        self.commands.push(DrawCommand::LineTo(p));
    }
    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }
    fn set_stroke_style(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }
    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
    fn set_fill_style(&mut self, paint: &Paint) {
        self.commands.push(DrawCommand::FillStyle(paint.clone()));
    }
    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }
}
