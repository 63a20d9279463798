// src/scenes/mod.rs
//
// A scene owns everything on screen for one phase of the app and is driven
// frame by frame by the Game.

pub mod game_scene;
pub mod title_scene;

pub use game_scene::GameScene;
pub use title_scene::TitleScene;

use nannou::color::Rgb8;
use nannou::prelude::*;

use crate::draw::{canvas_rect, Surface};
use crate::errors::TableResult;
use crate::models::TableSnapshot;

/// What the Game should do after a scene handled input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChange {
    Stay,
    StartGame,
}

pub trait Scene {
    fn name(&self) -> &'static str;

    /// Advance animations; `time` is seconds since the app started
    fn update(&mut self, time: f32);

    fn draw(&self, surface: &mut dyn Surface);

    /// Click in canvas coordinates
    fn on_click(&mut self, point: Point2) -> TableResult<SceneChange>;

    fn resize(&mut self, width: f32, height: f32);

    /// Table state worth persisting, if the scene has any
    fn snapshot(&self) -> Option<TableSnapshot> {
        None
    }
}

pub(crate) fn draw_background(surface: &mut dyn Surface, width: f32, height: f32, color: Rgb8) {
    surface.set_fill_color(color);
    surface.fill_rect(canvas_rect(0.0, 0.0, width, height), 0.0);
}

pub(crate) fn write_text(surface: &mut dyn Surface, text: &str, at: Point2, font_size: u32) {
    surface.set_fill_color(WHITE);
    surface.fill_text(text, at, font_size);
}
