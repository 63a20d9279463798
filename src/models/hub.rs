// src/models/hub.rs
//
// The octagonal hub at the center of the table.
//
// The hub holds the double-12 engine and eight branches. Branch `i` leaves
// the hub at `i * 45` degrees, clockwise on a y-down canvas starting from
// the right-hand edge. A player's train grows outward along that direction.

use nannou::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use tracing::{debug, info};

use super::domino::Domino;
use super::palette;
use super::pips::Pips;
use super::position::Position;
use crate::draw::{centered_rect, Surface};
use crate::errors::{TableError, TableResult};

pub const BRANCH_COUNT: usize = 8;

const BORDER_WIDTH: f32 = 2.0;

/// One of the eight train slots around the hub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    owner: Option<String>,
    dominoes: Vec<Domino>,
    open: bool,
}

impl Branch {
    fn unclaimed() -> Self {
        Self {
            owner: None,
            dominoes: Vec::new(),
            open: true,
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn dominoes(&self) -> &[Domino] {
        &self.dominoes
    }

    /// The value a new tile must match to extend this train
    pub fn open_end(&self, engine: Pips) -> Pips {
        self.dominoes
            .iter()
            .fold(engine, |open, tile| tile.other_end(open).unwrap_or(open))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HubRecord", into = "HubRecord")]
pub struct Hub {
    position: Position,
    /// Vertex to opposite vertex
    long_diagonal: f32,
    /// Edge to opposite edge
    medium_diagonal: f32,
    notch_depth: f32,
    notch_width: f32,
    center_domino: Domino,
    branches: [Branch; BRANCH_COUNT],
    notch_color: nannou::color::Rgb8,
}

/// Saved form of a hub. Geometry and the engine are not stored; they are
/// rebuilt on load and every train is replayed tile by tile.
#[derive(Serialize, Deserialize)]
struct HubRecord {
    position: Position,
    branches: [Branch; BRANCH_COUNT],
}

impl From<Hub> for HubRecord {
    fn from(hub: Hub) -> Self {
        Self {
            position: hub.position,
            branches: hub.branches,
        }
    }
}

impl TryFrom<HubRecord> for Hub {
    type Error = TableError;

    fn try_from(record: HubRecord) -> TableResult<Self> {
        let mut hub = Hub::new(record.position.x, record.position.y);
        for (index, branch) in record.branches.into_iter().enumerate() {
            hub.branches[index].owner = branch.owner;
            hub.branches[index].open = branch.open;
            for tile in branch.dominoes {
                hub.extend_branch(index, Domino::from_pips(tile.end1(), tile.end2()))?;
            }
        }
        Ok(hub)
    }
}

impl Hub {
    pub const LONG_DIAGONAL: f32 = 120.0;

    pub fn new(x: f32, y: f32) -> Self {
        let position = Position::new(x, y);
        let mut center_domino = Domino::double(Pips::MAX);
        center_domino.set_position(&position);

        Self {
            position,
            long_diagonal: Self::LONG_DIAGONAL,
            medium_diagonal: Self::LONG_DIAGONAL * (PI / 8.0).cos(),
            notch_depth: Domino::LENGTH / 3.0,
            notch_width: Domino::WIDTH + 5.0,
            center_domino,
            branches: std::array::from_fn(|_| Branch::unclaimed()),
            notch_color: palette::poker_green(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn long_diagonal(&self) -> f32 {
        self.long_diagonal
    }

    pub fn medium_diagonal(&self) -> f32 {
        self.medium_diagonal
    }

    pub fn notch_depth(&self) -> f32 {
        self.notch_depth
    }

    pub fn notch_width(&self) -> f32 {
        self.notch_width
    }

    /// Distance from center to a vertex
    pub fn circumradius(&self) -> f32 {
        self.long_diagonal / 2.0
    }

    /// Distance from center to the middle of an edge
    pub fn inradius(&self) -> f32 {
        self.circumradius() * (PI / 8.0).cos()
    }

    pub fn side_length(&self) -> f32 {
        2.0 * self.circumradius() * (PI / 8.0).sin()
    }

    pub fn center_domino(&self) -> &Domino {
        &self.center_domino
    }

    /// Value every train starts from
    pub fn engine(&self) -> Pips {
        self.center_domino.end1()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Felt color showing through the notches
    pub fn set_notch_color(&mut self, color: nannou::color::Rgb8) -> &mut Self {
        self.notch_color = color;
        self
    }

    /// Unit vector for branch `index` in canvas coordinates
    pub fn branch_direction(index: usize) -> Vec2 {
        let angle = (index % BRANCH_COUNT) as f32 * PI / 4.0;
        vec2(angle.cos(), angle.sin())
    }

    /// Claim the first unowned branch. The new owner's branch starts closed.
    pub fn add_branch_owner(&mut self, owner: &str) -> TableResult<usize> {
        let (index, branch) = self
            .branches
            .iter_mut()
            .enumerate()
            .find(|(_, branch)| !branch.is_claimed())
            .ok_or(TableError::HubFull)?;

        branch.owner = Some(owner.to_string());
        branch.open = false;
        info!("{} claimed branch {}", owner, index);
        Ok(index)
    }

    pub fn branch(&self, owner: &str) -> TableResult<&Branch> {
        let index = self.branch_index(owner)?;
        Ok(&self.branches[index])
    }

    pub fn branch_index(&self, owner: &str) -> TableResult<usize> {
        self.branches
            .iter()
            .position(|branch| branch.owner() == Some(owner))
            .ok_or_else(|| TableError::OwnerNotFound(owner.to_string()))
    }

    pub fn set_branch_open(&mut self, owner: &str) -> TableResult<&mut Self> {
        self.set_branch_flag(owner, true)
    }

    pub fn set_branch_closed(&mut self, owner: &str) -> TableResult<&mut Self> {
        self.set_branch_flag(owner, false)
    }

    fn set_branch_flag(&mut self, owner: &str, open: bool) -> TableResult<&mut Self> {
        let index = self.branch_index(owner)?;
        self.branches[index].open = open;
        debug!("branch {} ({}) open = {}", index, owner, open);
        Ok(self)
    }

    /// Flip a branch's open flag by index; returns the new state
    pub fn toggle_branch(&mut self, index: usize) -> TableResult<bool> {
        let branch = self
            .branches
            .get_mut(index)
            .ok_or(TableError::BranchOutOfRange(index))?;
        branch.open = !branch.open;
        debug!("branch {} open = {}", index, branch.open);
        Ok(branch.open)
    }

    /// Append a tile to a train. One end must match the train's open end.
    pub fn extend_branch(&mut self, index: usize, domino: Domino) -> TableResult<()> {
        if index >= BRANCH_COUNT {
            return Err(TableError::BranchOutOfRange(index));
        }

        let open_end = self.branches[index].open_end(self.engine());
        if !domino.matches(open_end) {
            return Err(TableError::TileMismatch {
                end1: domino.end1().value(),
                end2: domino.end2().value(),
                open_end: open_end.value(),
            });
        }

        debug!("branch {} extended with {}", index, domino);
        self.branches[index].dominoes.push(domino);
        self.layout_branch(index);
        Ok(())
    }

    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.position.set_xy(x, y);
        self.relayout();
        self
    }

    pub fn set_position(&mut self, position: &Position) -> &mut Self {
        self.position.set_position(position);
        self.relayout();
        self
    }

    fn relayout(&mut self) {
        self.center_domino.set_position(&self.position);
        for index in 0..BRANCH_COUNT {
            self.layout_branch(index);
        }
    }

    // Place each tile end-to-end along the branch direction, flipped so the
    // end touching the previous tile faces the hub
    fn layout_branch(&mut self, index: usize) {
        let direction = Self::branch_direction(index);
        let base_degrees = index as f32 * 45.0;
        let start = self.notch_start();
        let center = self.position.to_point();
        let mut open = self.engine();

        for (k, tile) in self.branches[index].dominoes.iter_mut().enumerate() {
            let distance = start + Domino::LENGTH / 2.0 + k as f32 * Domino::LENGTH;
            let tile_center = center + direction * distance;
            let end1_faces_hub = tile.end1() == open;

            tile.set_xy(tile_center.x, tile_center.y);
            if end1_faces_hub {
                tile.set_rotation(base_degrees);
            } else {
                tile.set_rotation(base_degrees + 180.0);
            }
            open = tile.other_end(open).unwrap_or(open);
        }
    }

    /// Branch whose notch or train covers a canvas point
    pub fn branch_at(&self, point: Point2) -> Option<usize> {
        let offset = point - self.position.to_point();
        let start = self.notch_start();

        (0..BRANCH_COUNT).find(|&index| {
            let direction = Self::branch_direction(index);
            let along = offset.dot(direction);
            let across = offset.perp_dot(direction).abs();
            let tiles = self.branches[index].dominoes.len().max(1) as f32;
            let end = (start + tiles * Domino::LENGTH).max(self.circumradius());

            along >= start && along <= end && across <= self.notch_width / 2.0
        })
    }

    fn octagon_points(&self) -> Vec<Point2> {
        let center = self.position.to_point();
        let inradius = self.inradius();
        let half_side = self.side_length() / 2.0;

        // edges face the cardinal directions; walk clockwise from top-middle
        [
            (0.0, -inradius),
            (half_side, -inradius),
            (inradius, -half_side),
            (inradius, half_side),
            (half_side, inradius),
            (-half_side, inradius),
            (-inradius, half_side),
            (-inradius, -half_side),
            (-half_side, -inradius),
        ]
        .iter()
        .map(|&(x, y)| center + vec2(x, y))
        .collect()
    }

    /// Distance from the center to the inner end of every edge notch
    pub fn notch_start(&self) -> f32 {
        self.circumradius() - self.notch_depth
    }

    /// Rectangle reaching `notch_depth` in from the circumradius along a branch
    pub fn notch_points(&self, index: usize) -> [Point2; 4] {
        let direction = Self::branch_direction(index);
        let edge = self.position.to_point() + direction * self.circumradius();
        let perp = vec2(-direction.y, direction.x);
        let half_width = self.notch_width / 2.0;
        let depth = direction * self.notch_depth;

        [
            edge - perp * half_width,
            edge - perp * half_width - depth,
            edge + perp * half_width - depth,
            edge + perp * half_width,
        ]
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.save();

        let octagon = self.octagon_points();
        surface.set_fill_color(palette::hub_color());
        surface.fill_polygon(&octagon);
        surface.set_stroke_color(palette::hub_border());
        surface.set_line_width(BORDER_WIDTH);
        surface.stroke_polygon(&octagon);

        // Center notch, slightly larger than a domino
        surface.set_fill_color(self.notch_color);
        surface.fill_rect(
            centered_rect(
                self.position.to_point(),
                Domino::LENGTH + 5.0,
                Domino::WIDTH + 5.0,
            ),
            0.0,
        );

        for index in 0..BRANCH_COUNT {
            surface.fill_polygon(&self.notch_points(index));
        }

        surface.restore();

        self.center_domino.draw(surface);
        self.draw_branches(surface);
    }

    fn draw_branches(&self, surface: &mut dyn Surface) {
        for branch in self.branches.iter().filter(|b| !b.dominoes.is_empty()) {
            for tile in &branch.dominoes {
                tile.draw(surface);
            }
        }
    }
}
