// src/draw/recorder.rs
//
// A Surface that records every drawing call instead of rendering it.
// Each command keeps its local geometry, the resolved style and the
// transform that was active when it was issued.

use nannou::color::Rgb8;
use nannou::geom::Rect;
use nannou::prelude::*;

use super::{Surface, Transform2D};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        corner_radius: f32,
        color: Rgb8,
    },
    StrokeRect {
        rect: Rect,
        corner_radius: f32,
        color: Rgb8,
        line_width: f32,
    },
    FillPolygon {
        points: Vec<Point2>,
        color: Rgb8,
    },
    StrokePolygon {
        points: Vec<Point2>,
        color: Rgb8,
        line_width: f32,
    },
    Line {
        from: Point2,
        to: Point2,
        color: Rgb8,
        line_width: f32,
    },
    FillCircle {
        center: Point2,
        radius: f32,
        color: Rgb8,
    },
    Text {
        text: String,
        at: Point2,
        font_size: u32,
        color: Rgb8,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCommand {
    pub command: DrawCommand,
    pub transform: Transform2D,
}

#[derive(Debug, Clone, Copy)]
struct RecorderState {
    transform: Transform2D,
    fill: Rgb8,
    stroke: Rgb8,
    line_width: f32,
}

impl Default for RecorderState {
    fn default() -> Self {
        Self {
            transform: Transform2D::default(),
            fill: BLACK,
            stroke: BLACK,
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<RecordedCommand>,
    stack: Vec<RecorderState>,
    state: RecorderState,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of saves not yet matched by a restore
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Restores issued with nothing saved
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    pub fn current_transform(&self) -> Transform2D {
        self.state.transform
    }

    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(&c.command)).count()
    }

    /// Centers of every filled circle, in canvas coordinates
    pub fn circle_centers(&self) -> Vec<Point2> {
        self.commands
            .iter()
            .filter_map(|c| match c.command {
                DrawCommand::FillCircle { center, .. } => Some(c.transform.apply_to_point(center)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match &c.command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: DrawCommand) {
        self.commands.push(RecordedCommand {
            command,
            transform: self.state.transform,
        });
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => self.unbalanced_restores += 1,
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform.translate(vec2(x, y));
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform.rotate(radians);
    }

    fn set_fill_color(&mut self, color: Rgb8) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgb8) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: f32) {
        self.record(DrawCommand::FillRect {
            rect,
            corner_radius,
            color: self.state.fill,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, corner_radius: f32) {
        self.record(DrawCommand::StrokeRect {
            rect,
            corner_radius,
            color: self.state.stroke,
            line_width: self.state.line_width,
        });
    }

    fn fill_polygon(&mut self, points: &[Point2]) {
        self.record(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color: self.state.fill,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point2]) {
        self.record(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color: self.state.stroke,
            line_width: self.state.line_width,
        });
    }

    fn stroke_line(&mut self, from: Point2, to: Point2) {
        self.record(DrawCommand::Line {
            from,
            to,
            color: self.state.stroke,
            line_width: self.state.line_width,
        });
    }

    fn fill_circle(&mut self, center: Point2, radius: f32) {
        self.record(DrawCommand::FillCircle {
            center,
            radius,
            color: self.state.fill,
        });
    }

    fn fill_text(&mut self, text: &str, at: Point2, font_size: u32) {
        self.record(DrawCommand::Text {
            text: text.to_string(),
            at,
            font_size,
            color: self.state.fill,
        });
    }
}
