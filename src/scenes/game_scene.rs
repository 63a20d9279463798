// src/scenes/game_scene.rs
//
// The table: hub in the middle, boneyard count in the corner

use nannou::prelude::*;
use rand::Rng;
use tracing::{debug, info};

use super::{draw_background, write_text, Scene, SceneChange};
use crate::config::{GameSettings, TableTheme};
use crate::draw::Surface;
use crate::errors::TableResult;
use crate::models::{Boneyard, Hub, TableSnapshot};

const BONEYARD_LABEL_AT: (f32, f32) = (100.0, 30.0);
const BONEYARD_LABEL_SIZE: u32 = 20;

pub struct GameScene {
    width: f32,
    height: f32,
    theme: TableTheme,
    hub: Hub,
    boneyard: Boneyard,
}

impl GameScene {
    /// Fresh table: players claim branches in order, boneyard shuffled with `rng`
    pub fn new<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        settings: &GameSettings,
        rng: &mut R,
    ) -> TableResult<Self> {
        let mut hub = Hub::new(width / 2.0, height / 2.0);
        for player in &settings.players {
            hub.add_branch_owner(player)?;
        }

        let boneyard = Boneyard::new(rng);
        info!(
            "new table with {} players, {} tiles in the boneyard",
            settings.players.len(),
            boneyard.len()
        );

        Ok(Self::assemble(width, height, settings.theme, hub, boneyard))
    }

    /// Restore a saved table, recentered on the current window
    pub fn from_snapshot(width: f32, height: f32, theme: TableTheme, snapshot: TableSnapshot) -> Self {
        Self::assemble(width, height, theme, snapshot.hub, snapshot.boneyard)
    }

    fn assemble(width: f32, height: f32, theme: TableTheme, mut hub: Hub, boneyard: Boneyard) -> Self {
        hub.set_notch_color(theme.felt);
        hub.set_xy(width / 2.0, height / 2.0);
        Self {
            width,
            height,
            theme,
            hub,
            boneyard,
        }
    }

    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    pub fn hub_mut(&mut self) -> &mut Hub {
        &mut self.hub
    }

    pub fn boneyard(&self) -> &Boneyard {
        &self.boneyard
    }

    pub fn boneyard_mut(&mut self) -> &mut Boneyard {
        &mut self.boneyard
    }
}

impl Scene for GameScene {
    fn name(&self) -> &'static str {
        "game"
    }

    fn update(&mut self, _time: f32) {}

    fn draw(&self, surface: &mut dyn Surface) {
        draw_background(surface, self.width, self.height, self.theme.felt);
        self.hub.draw(surface);

        let (x, y) = BONEYARD_LABEL_AT;
        let label = format!("Boneyard: {}", self.boneyard.len());
        write_text(surface, &label, pt2(x, y), BONEYARD_LABEL_SIZE);
    }

    fn on_click(&mut self, point: Point2) -> TableResult<SceneChange> {
        let Some(index) = self.hub.branch_at(point) else {
            return Ok(SceneChange::Stay);
        };
        // only claimed branches can be marked open for other players
        if self.hub.branches()[index].is_claimed() {
            let open = self.hub.toggle_branch(index)?;
            debug!("clicked branch {}, now open = {}", index, open);
        }
        Ok(SceneChange::Stay)
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.hub.set_xy(width / 2.0, height / 2.0);
    }

    fn snapshot(&self) -> Option<TableSnapshot> {
        Some(TableSnapshot {
            hub: self.hub.clone(),
            boneyard: self.boneyard.clone(),
        })
    }
}
