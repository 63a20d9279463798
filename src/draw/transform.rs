// src/draw/transform.rs
//
// Rigid 2D transform accumulated by save/translate/rotate calls

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub rotation: f32, // radians
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    // translate in the current (already rotated) frame
    pub fn translate(&self, offset: Vec2) -> Transform2D {
        Transform2D {
            translation: self.translation + self.rotate_vector(offset),
            rotation: self.rotation,
        }
    }

    pub fn rotate(&self, radians: f32) -> Transform2D {
        Transform2D {
            translation: self.translation,
            rotation: self.rotation + radians,
        }
    }

    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        self.rotate_vector(point) + self.translation
    }

    fn rotate_vector(&self, v: Vec2) -> Vec2 {
        let cos_rot = self.rotation.cos();
        let sin_rot = self.rotation.sin();
        vec2(v.x * cos_rot - v.y * sin_rot, v.x * sin_rot + v.y * cos_rot)
    }
}
