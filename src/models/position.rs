// src/models/position.rs
//
// A 2D point owned by an entity. Copying from another position never aliases it.

use nannou::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set_position(&mut self, position: &Position) -> &mut Self {
        self.x = position.x;
        self.y = position.y;
        self
    }

    pub fn add(&mut self, x: f32, y: f32) -> &mut Self {
        self.x += x;
        self.y += y;
        self
    }

    pub fn add_position(&mut self, position: &Position) -> &mut Self {
        self.x += position.x;
        self.y += position.y;
        self
    }

    pub fn to_point(self) -> Point2 {
        pt2(self.x, self.y)
    }
}

impl From<Point2> for Position {
    fn from(point: Point2) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Position> for Point2 {
    fn from(position: Position) -> Self {
        position.to_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_overwrite() {
        let mut position = Position::new(1.0, 2.0);
        position.set_xy(5.0, 6.0);
        assert_eq!(position, Position::new(5.0, 6.0));

        let other = Position::new(-3.0, 4.5);
        position.set_position(&other);
        assert_eq!(position, other);
    }

    #[test]
    fn test_add_accumulates_and_chains() {
        let mut position = Position::new(1.0, 1.0);
        position
            .add(2.0, 3.0)
            .add_position(&Position::new(-1.0, 10.0));
        assert_eq!(position, Position::new(2.0, 14.0));
    }

    #[test]
    fn test_set_position_copies_values() {
        let mut source = Position::new(1.0, 1.0);
        let mut target = Position::default();
        target.set_position(&source);
        source.add(100.0, 100.0);
        assert_eq!(target, Position::new(1.0, 1.0));
    }

    #[test]
    fn test_point_conversion() {
        let point: Point2 = Position::new(3.0, -2.0).into();
        assert_eq!(point, pt2(3.0, -2.0));
        assert_eq!(Position::from(point), Position::new(3.0, -2.0));
    }
}
