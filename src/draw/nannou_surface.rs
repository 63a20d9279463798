// src/draw/nannou_surface.rs
//
// Surface implementation on top of nannou::Draw.
// nannou's origin is the window center with +y up, so the base context is
// moved to the top-left corner and the y axis flipped. Text is flipped back
// so it doesn't render mirrored.

use nannou::color::Rgb8;
use nannou::geom::Rect;
use nannou::prelude::*;

use super::shapes::{rounded_rect_points, CORNER_RESOLUTION};
use super::Surface;

#[derive(Clone)]
struct SurfaceState {
    draw: Draw,
    fill: Rgb8,
    stroke: Rgb8,
    line_width: f32,
}

pub struct NannouSurface {
    stack: Vec<SurfaceState>,
    state: SurfaceState,
}

impl NannouSurface {
    pub fn new(draw: &Draw, window: Rect) -> Self {
        let canvas = draw.x_y(window.left(), window.top()).scale_y(-1.0);
        Self {
            stack: Vec::new(),
            state: SurfaceState {
                draw: canvas,
                fill: BLACK,
                stroke: BLACK,
                line_width: 1.0,
            },
        }
    }

    /// Convert a nannou window point to canvas coordinates
    pub fn to_canvas(window: Rect, point: Point2) -> Point2 {
        pt2(point.x - window.left(), window.top() - point.y)
    }
}

impl Surface for NannouSurface {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.state.draw = self.state.draw.x_y(x, y);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.draw = self.state.draw.rotate(radians);
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
        if corner_radius <= 0.0 {
            self.state
                .draw
                .rect()
                .x_y(rect.x(), rect.y())
                .w_h(rect.w(), rect.h())
                .color(self.state.fill);
        } else {
            let points = rounded_rect_points(rect, corner_radius, CORNER_RESOLUTION);
            self.fill_polygon(&points);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, corner_radius: f32) {
        let points = rounded_rect_points(rect, corner_radius, CORNER_RESOLUTION);
        self.stroke_polygon(&points);
    }

    fn fill_polygon(&mut self, points: &[Point2]) {
        self.state
            .draw
            .polygon()
            .color(self.state.fill)
            .points(points.iter().copied());
    }

    fn stroke_polygon(&mut self, points: &[Point2]) {
        self.state
            .draw
            .polyline()
            .weight(self.state.line_width)
            .points_closed(points.iter().copied())
            .color(self.state.stroke);
    }

    fn stroke_line(&mut self, from: Point2, to: Point2) {
        self.state
            .draw
            .line()
            .start(from)
            .end(to)
            .stroke_weight(self.state.line_width)
            .color(self.state.stroke);
    }

    fn fill_circle(&mut self, center: Point2, radius: f32) {
        self.state
            .draw
            .ellipse()
            .x_y(center.x, center.y)
            .radius(radius)
            .color(self.state.fill);
    }

    fn fill_text(&mut self, text: &str, at: Point2, font_size: u32) {
        let width = text.chars().count() as f32 * font_size as f32;
        self.state
            .draw
            .x_y(at.x, at.y)
            .scale_y(-1.0)
            .text(text)
            .font_size(font_size)
            .no_line_wrap()
            .w_h(width, font_size as f32 * 1.5)
            .color(self.state.fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_canvas_flips_y_from_top_left() {
        let window = Rect::from_w_h(800.0, 600.0);
        assert_eq!(NannouSurface::to_canvas(window, pt2(-400.0, 300.0)), pt2(0.0, 0.0));
        assert_eq!(NannouSurface::to_canvas(window, pt2(0.0, 0.0)), pt2(400.0, 300.0));
        assert_eq!(NannouSurface::to_canvas(window, pt2(400.0, -300.0)), pt2(800.0, 600.0));
    }
}
