// src/main.rs
use nannou::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mextrain::{config::Config, draw::NannouSurface, game::Game};

struct Model {
    game: Game,
    snapshot_path: PathBuf,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn init_logging(level: &str) {
    // RUST_LOG wins over the config level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    init_logging(&config.logging.level);

    let settings = config
        .game_settings()
        .expect("Invalid game settings in config file");
    let snapshot_path = config.resolve_snapshot_path();

    // Create window
    app.new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .resized(resized)
        .build()
        .unwrap();

    let game = Game::new(
        config.window.width as f32,
        config.window.height as f32,
        settings,
    )
    .expect("Failed to set up the title scene");
    info!("{} ready", config.window.title);

    Model {
        game,
        snapshot_path,
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    model.game.update(app.time);
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let window = app.window_rect();
    let point = NannouSurface::to_canvas(window, app.mouse.position());
    if let Err(e) = model.game.on_click(point) {
        warn!("click at ({:.0}, {:.0}) ignored: {}", point.x, point.y, e);
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::S => {
            if let Err(e) = model.game.save_snapshot(&model.snapshot_path) {
                warn!("snapshot not saved: {}", e);
            }
        }
        Key::L => {
            if let Err(e) = model.game.load_snapshot(&model.snapshot_path) {
                warn!("snapshot not loaded: {}", e);
            }
        }
        _ => (),
    }
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.game.resize(size.x, size.y);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut surface = NannouSurface::new(&draw, app.window_rect());
    model.game.draw(&mut surface);
    draw.to_frame(app, &frame).unwrap();
}
