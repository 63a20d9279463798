// src/game.rs
//
// Top level state: the current scene, window size, settings and the RNG

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::info;

use crate::config::GameSettings;
use crate::draw::Surface;
use crate::errors::{SnapshotError, TableResult};
use crate::models::TableSnapshot;
use crate::scenes::{GameScene, Scene, SceneChange, TitleScene};

pub struct Game {
    width: f32,
    height: f32,
    settings: GameSettings,
    rng: StdRng,
    scene: Box<dyn Scene>,
}

impl Game {
    pub fn new(width: f32, height: f32, settings: GameSettings) -> TableResult<Self> {
        let rng = match settings.boneyard_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = Box::new(TitleScene::new(width, height, settings.theme)?);

        Ok(Self {
            width,
            height,
            settings,
            rng,
            scene,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scene_name(&self) -> &'static str {
        self.scene.name()
    }

    pub fn update(&mut self, time: f32) {
        self.scene.update(time);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.scene.draw(surface);
    }

    pub fn on_click(&mut self, point: Point2) -> TableResult<()> {
        match self.scene.on_click(point)? {
            SceneChange::Stay => {}
            SceneChange::StartGame => self.start_game()?,
        }
        Ok(())
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.scene.resize(width, height);
    }

    fn start_game(&mut self) -> TableResult<()> {
        let scene = GameScene::new(self.width, self.height, &self.settings, &mut self.rng)?;
        self.switch_to(Box::new(scene));
        Ok(())
    }

    fn switch_to(&mut self, scene: Box<dyn Scene>) {
        info!("scene {} -> {}", self.scene.name(), scene.name());
        self.scene = scene;
    }

    /******************************* Snapshots ******************************/

    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let snapshot = self.scene.snapshot().ok_or(SnapshotError::NoGame)?;
        snapshot.save(path)
    }

    /// Replace the current scene with a saved table
    pub fn load_snapshot<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SnapshotError> {
        let snapshot = TableSnapshot::load(path)?;
        let scene = GameScene::from_snapshot(self.width, self.height, self.settings.theme, snapshot);
        self.switch_to(Box::new(scene));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RecordingSurface;

    fn settings() -> GameSettings {
        GameSettings {
            players: vec!["Alice".to_string(), "Bob".to_string()],
            boneyard_seed: Some(42),
            ..GameSettings::default()
        }
    }

    fn started_game() -> Game {
        let mut game = Game::new(800.0, 600.0, settings()).unwrap();
        // center of the play button
        game.on_click(pt2(400.0, 445.0)).unwrap();
        game
    }

    #[test]
    fn test_starts_on_title() {
        let game = Game::new(800.0, 600.0, settings()).unwrap();
        assert_eq!(game.scene_name(), "title");
    }

    #[test]
    fn test_play_click_switches_to_game() {
        let game = started_game();
        assert_eq!(game.scene_name(), "game");

        let mut surface = RecordingSurface::new();
        game.draw(&mut surface);
        assert_eq!(surface.texts(), vec!["Boneyard: 91"]);
    }

    #[test]
    fn test_click_elsewhere_stays_on_title() {
        let mut game = Game::new(800.0, 600.0, settings()).unwrap();
        game.on_click(pt2(5.0, 5.0)).unwrap();
        assert_eq!(game.scene_name(), "title");
    }

    #[test]
    fn test_resize_reaches_scene() {
        let mut game = Game::new(800.0, 600.0, settings()).unwrap();
        game.resize(1000.0, 1000.0);
        assert_eq!((game.width(), game.height()), (1000.0, 1000.0));
        // the button moved with the window
        game.on_click(pt2(500.0, 725.0)).unwrap();
        assert_eq!(game.scene_name(), "game");
    }

    #[test]
    fn test_full_hub_surfaces_as_error() {
        let players = (0..9).map(|i| format!("p{}", i)).collect();
        let mut game = Game::new(
            800.0,
            600.0,
            GameSettings {
                players,
                ..GameSettings::default()
            },
        )
        .unwrap();
        assert!(game.on_click(pt2(400.0, 445.0)).is_err());
        assert_eq!(game.scene_name(), "title");
    }

    #[test]
    fn test_snapshot_needs_a_game() {
        let dir = tempfile::tempdir().unwrap();
        let game = Game::new(800.0, 600.0, settings()).unwrap();
        let result = game.save_snapshot(dir.path().join("table.json"));
        assert!(matches!(result, Err(SnapshotError::NoGame)));
    }

    #[test]
    fn test_save_then_load_from_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");

        started_game().save_snapshot(&path).unwrap();

        let mut fresh = Game::new(800.0, 600.0, settings()).unwrap();
        fresh.load_snapshot(&path).unwrap();
        assert_eq!(fresh.scene_name(), "game");

        let mut surface = RecordingSurface::new();
        fresh.draw(&mut surface);
        assert_eq!(surface.texts(), vec!["Boneyard: 91"]);
    }

    #[test]
    fn test_seeded_games_deal_the_same_boneyard() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        started_game().save_snapshot(&a).unwrap();
        started_game().save_snapshot(&b).unwrap();

        let order = |path: &Path| -> Vec<String> {
            TableSnapshot::load(path)
                .unwrap()
                .boneyard
                .tiles()
                .iter()
                .map(|d| d.to_string())
                .collect()
        };
        assert_eq!(order(&a), order(&b));
    }
}
