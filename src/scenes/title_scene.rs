// src/scenes/title_scene.rs
//
// Title screen: swaying display dominoes and a Play button

use nannou::geom::Rect;
use nannou::prelude::*;
use tracing::info;

use super::{draw_background, write_text, Scene, SceneChange};
use crate::config::TableTheme;
use crate::draw::{canvas_rect, Surface};
use crate::errors::TableResult;
use crate::models::Domino;

pub const TITLE: &str = "Mexican Train Dominoes";

const DISPLAY_TILES: [(u8, u8); 4] = [(12, 12), (9, 6), (6, 3), (3, 0)];
const TILE_SPACING: f32 = 100.0;
const SWAY_DEGREES: f32 = 15.0;

const BUTTON_WIDTH: f32 = 150.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_RADIUS: f32 = 10.0;

pub struct TitleScene {
    width: f32,
    height: f32,
    theme: TableTheme,
    dominoes: Vec<Domino>,
    play_button: Rect,
}

impl TitleScene {
    pub fn new(width: f32, height: f32, theme: TableTheme) -> TableResult<Self> {
        let dominoes = DISPLAY_TILES
            .iter()
            .map(|&(end1, end2)| {
                let mut domino = Domino::new(end1, end2)?;
                domino.set_rotation(45.0);
                Ok(domino)
            })
            .collect::<TableResult<Vec<_>>>()?;

        let mut scene = Self {
            width,
            height,
            theme,
            dominoes,
            play_button: Rect::from_w_h(BUTTON_WIDTH, BUTTON_HEIGHT),
        };
        scene.layout();
        Ok(scene)
    }

    pub fn dominoes(&self) -> &[Domino] {
        &self.dominoes
    }

    pub fn play_button(&self) -> Rect {
        self.play_button
    }

    pub fn is_point_in_play_button(&self, point: Point2) -> bool {
        let button = self.play_button;
        point.x >= button.left()
            && point.x <= button.right()
            && point.y >= button.bottom()
            && point.y <= button.top()
    }

    // Display tiles in a row through the middle, button below
    fn layout(&mut self) {
        let center = pt2(self.width / 2.0, self.height / 2.0);
        let middle = (self.dominoes.len() as f32 - 1.0) / 2.0;
        for (index, domino) in self.dominoes.iter_mut().enumerate() {
            let offset = (index as f32 - middle) * TILE_SPACING;
            domino.set_xy(center.x + offset, center.y);
        }

        self.play_button = canvas_rect(
            (self.width - BUTTON_WIDTH) / 2.0,
            self.height * 0.7,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );
    }
}

impl Scene for TitleScene {
    fn name(&self) -> &'static str {
        "title"
    }

    fn update(&mut self, time: f32) {
        for (index, domino) in self.dominoes.iter_mut().enumerate() {
            let phase = time / 2.0 + index as f32 * PI / 2.0;
            domino.set_rotation(90.0 + phase.sin() * SWAY_DEGREES);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        draw_background(surface, self.width, self.height, self.theme.felt);
        write_text(surface, TITLE, pt2(self.width / 2.0, self.height / 4.0), 48);

        for domino in &self.dominoes {
            domino.draw(surface);
        }

        surface.set_fill_color(self.theme.button);
        surface.fill_rect(self.play_button, BUTTON_RADIUS);
        write_text(surface, "Play", self.play_button.xy(), 24);
    }

    fn on_click(&mut self, point: Point2) -> TableResult<SceneChange> {
        if self.is_point_in_play_button(point) {
            info!("play button clicked");
            return Ok(SceneChange::StartGame);
        }
        Ok(SceneChange::Stay)
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.layout();
    }
}
