// src/models/domino.rs
//
// A single domino tile. Ends are fixed at creation; position and rotation
// are free to change. At rotation 0 end1 is drawn on the left half.

use nannou::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::angle::Angle;
use super::palette;
use super::pips::{pip_layout, Pips};
use super::position::Position;
use crate::draw::{centered_rect, Surface};
use crate::errors::TableResult;

/// Length-to-width ratio of a standard domino
pub const DOMINO_LW_RATIO: f32 = 1.0 / 2.33;

const CORNER_RADIUS: f32 = 5.0;
const OUTLINE_WIDTH: f32 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domino {
    end1: Pips,
    end2: Pips,
    pub position: Position,
    pub rotation: Angle,
}

impl Domino {
    pub const LENGTH: f32 = 50.0;
    pub const WIDTH: f32 = Self::LENGTH * DOMINO_LW_RATIO;

    pub fn new(end1: u8, end2: u8) -> TableResult<Self> {
        Ok(Self::from_pips(Pips::new(end1)?, Pips::new(end2)?))
    }

    pub fn from_pips(end1: Pips, end2: Pips) -> Self {
        Self {
            end1,
            end2,
            position: Position::default(),
            rotation: Angle::new(0.0),
        }
    }

    pub fn double(value: Pips) -> Self {
        Self::from_pips(value, value)
    }

    pub fn end1(&self) -> Pips {
        self.end1
    }

    pub fn end2(&self) -> Pips {
        self.end2
    }

    pub fn width(&self) -> f32 {
        Self::LENGTH
    }

    pub fn height(&self) -> f32 {
        Self::WIDTH
    }

    pub fn pip_radius(&self) -> f32 {
        Self::WIDTH / 15.0
    }

    pub fn is_double(&self) -> bool {
        self.end1 == self.end2
    }

    pub fn matches(&self, value: Pips) -> bool {
        self.end1 == value || self.end2 == value
    }

    /// The end left exposed once `value` is joined to a train
    pub fn other_end(&self, value: Pips) -> Option<Pips> {
        if self.end1 == value {
            Some(self.end2)
        } else if self.end2 == value {
            Some(self.end1)
        } else {
            None
        }
    }

    pub fn set_position(&mut self, position: &Position) -> &mut Self {
        self.position.set_position(position);
        self
    }

    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.position.set_xy(x, y);
        self
    }

    pub fn set_rotation(&mut self, degrees: f32) -> &mut Self {
        self.rotation.set_degrees(degrees);
        self
    }

    pub fn set_end1_left(&mut self) -> &mut Self {
        self.set_rotation(0.0)
    }

    pub fn set_end1_top_left(&mut self) -> &mut Self {
        self.set_rotation(45.0)
    }

    pub fn set_end1_top(&mut self) -> &mut Self {
        self.set_rotation(90.0)
    }

    pub fn set_end1_top_right(&mut self) -> &mut Self {
        self.set_rotation(135.0)
    }

    pub fn set_end1_right(&mut self) -> &mut Self {
        self.set_rotation(180.0)
    }

    pub fn set_end1_bottom_right(&mut self) -> &mut Self {
        self.set_rotation(225.0)
    }

    pub fn set_end1_bottom(&mut self) -> &mut Self {
        self.set_rotation(270.0)
    }

    pub fn set_end1_bottom_left(&mut self) -> &mut Self {
        self.set_rotation(315.0)
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> &Self {
        surface.save();

        // Move to center point and rotate
        surface.translate(self.position.x, self.position.y);
        surface.rotate(self.rotation.radians());

        let body = centered_rect(pt2(0.0, 0.0), self.width(), self.height());
        let top_y = -self.height() / 2.0;

        surface.set_fill_color(palette::domino_background());
        surface.set_stroke_color(BLACK);
        surface.set_line_width(OUTLINE_WIDTH);
        surface.fill_rect(body, CORNER_RADIUS);
        surface.stroke_rect(body, CORNER_RADIUS);

        // Dividing line
        surface.stroke_line(pt2(0.0, top_y), pt2(0.0, top_y + self.height()));

        self.draw_pips(surface, Half::End1, self.end1);
        self.draw_pips(surface, Half::End2, self.end2);

        surface.restore();
        self
    }

    pub fn draw_at(&mut self, surface: &mut dyn Surface, x: f32, y: f32) {
        self.set_xy(x, y);
        self.draw(surface);
    }

    pub fn draw_at_position(&mut self, surface: &mut dyn Surface, position: &Position) {
        self.set_position(position);
        self.draw(surface);
    }

    /// Local (unrotated) centers of every pip on one half
    pub fn pip_positions(&self, half: Half) -> Vec<Point2> {
        let value = match half {
            Half::End1 => self.end1,
            Half::End2 => self.end2,
        };
        let quarter = self.width() / 4.0;
        let half_center = match half {
            Half::End1 => -quarter,
            Half::End2 => quarter,
        };

        pip_layout(value)
            .into_iter()
            .map(|offset| {
                pt2(
                    half_center + offset.x * Self::LENGTH / 9.0,
                    offset.y * Self::WIDTH / 3.75,
                )
            })
            .collect()
    }

    fn draw_pips(&self, surface: &mut dyn Surface, half: Half, value: Pips) {
        // blank halves have no color and no pips
        let Some(color) = palette::pip_color(value) else {
            return;
        };
        surface.set_fill_color(color);
        for center in self.pip_positions(half) {
            surface.fill_circle(center, self.pip_radius());
        }
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.end1, self.end2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    End1,
    End2,
}
