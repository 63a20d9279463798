// src/models/boneyard.rs
//
// The face-down pool of a double-12 set

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domino::Domino;
use super::pips::Pips;

/// Number of tiles in a double-12 set
pub const SET_SIZE: usize = 91;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boneyard {
    tiles: Vec<Domino>,
}

impl Boneyard {
    /// A full set, shuffled once
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut boneyard = Self::unshuffled();
        boneyard.shuffle(rng);
        debug!("boneyard ready with {} tiles", boneyard.len());
        boneyard
    }

    /// Every (a, b) with a <= b, in ascending order
    pub fn unshuffled() -> Self {
        let tiles = Pips::all()
            .flat_map(|end1| {
                Pips::all()
                    .filter(move |end2| *end2 >= end1)
                    .map(move |end2| Domino::from_pips(end1, end2))
            })
            .collect();
        Self { tiles }
    }

    // Fisher-Yates
    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.tiles.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.tiles.swap(i, j);
        }
    }

    pub fn tiles(&self) -> &[Domino] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Take the top tile
    pub fn draw(&mut self) -> Option<Domino> {
        let tile = self.tiles.pop();
        if let Some(tile) = &tile {
            debug!("drew {} from boneyard, {} left", tile, self.tiles.len());
        }
        tile
    }
}
