// src/draw/mod.rs
// The drawing surface contract used by every table entity.
//
// Coordinates are canvas style: origin at the top-left, +y pointing down.
// Implementations: NannouSurface renders through nannou's Draw,
// RecordingSurface keeps a log of commands for headless use.

pub mod nannou_surface;
pub mod recorder;
pub mod shapes;
pub mod transform;

pub use nannou_surface::NannouSurface;
pub use recorder::{DrawCommand, RecordedCommand, RecordingSurface};
pub use transform::Transform2D;

use nannou::color::Rgb8;
use nannou::geom::Rect;
use nannou::prelude::*;

pub trait Surface {
    /// Push the current transform and style
    fn save(&mut self);
    /// Pop back to the last saved transform and style
    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);

    fn set_fill_color(&mut self, color: Rgb8);
    fn set_stroke_color(&mut self, color: Rgb8);
    fn set_line_width(&mut self, width: f32);

    fn fill_rect(&mut self, rect: Rect, corner_radius: f32);
    fn stroke_rect(&mut self, rect: Rect, corner_radius: f32);
    fn fill_polygon(&mut self, points: &[Point2]);
    fn stroke_polygon(&mut self, points: &[Point2]);
    fn stroke_line(&mut self, from: Point2, to: Point2);
    fn fill_circle(&mut self, center: Point2, radius: f32);

    /// Centered text in the fill color
    fn fill_text(&mut self, text: &str, at: Point2, font_size: u32);
}

/// Build a rect from its top-left corner in canvas coordinates
pub fn canvas_rect(left: f32, top: f32, width: f32, height: f32) -> Rect {
    Rect::from_x_y_w_h(left + width / 2.0, top + height / 2.0, width, height)
}

/// A rect of the given size centered on a point
pub fn centered_rect(center: Point2, width: f32, height: f32) -> Rect {
    Rect::from_x_y_w_h(center.x, center.y, width, height)
}
