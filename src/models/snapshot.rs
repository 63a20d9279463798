// src/models/snapshot.rs
// JSON snapshot of the table: hub, trains and boneyard order

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use super::boneyard::Boneyard;
use super::hub::Hub;
use crate::errors::SnapshotError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub hub: Hub,
    pub boneyard: Boneyard,
}

impl TableSnapshot {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("saved table snapshot to {}", path.as_ref().display());
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(&path)?;
        let snapshot: TableSnapshot = serde_json::from_str(&content)?;
        info!("loaded table snapshot from {}", path.as_ref().display());
        Ok(snapshot)
    }
}
