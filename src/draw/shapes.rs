// src/draw/shapes.rs
//
// Polygon outlines for shapes nannou has no primitive for

use nannou::geom::Rect;
use nannou::prelude::*;
use std::f32::consts::PI;

pub const CORNER_RESOLUTION: usize = 8;

/// Outline of a rect with rounded corners, clockwise on a y-down canvas.
/// A radius of zero yields the four plain corners.
pub fn rounded_rect_points(rect: Rect, radius: f32, resolution: usize) -> Vec<Point2> {
    let radius = radius.max(0.0).min(rect.w() / 2.0).min(rect.h() / 2.0);
    let (left, right) = (rect.left(), rect.right());
    let (min_y, max_y) = (rect.bottom(), rect.top());

    if radius == 0.0 || resolution == 0 {
        return vec![
            pt2(left, min_y),
            pt2(right, min_y),
            pt2(right, max_y),
            pt2(left, max_y),
        ];
    }

    // (corner center, start angle) walking min-y edge first
    let corners = [
        (pt2(right - radius, min_y + radius), -PI / 2.0),
        (pt2(right - radius, max_y - radius), 0.0),
        (pt2(left + radius, max_y - radius), PI / 2.0),
        (pt2(left + radius, min_y + radius), PI),
    ];

    let mut points = Vec::with_capacity(corners.len() * (resolution + 1));
    for (center, start_angle) in corners {
        for i in 0..=resolution {
            let angle = start_angle + (i as f32 / resolution as f32) * (PI / 2.0);
            points.push(pt2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
    }
    points
}
