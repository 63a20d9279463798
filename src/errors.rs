// src/errors.rs
//
// Error types for the table model, config loading and snapshots

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Invalid row index: {0}. Must be in range 0-2.")]
    InvalidRowIndex(usize),

    #[error("Invalid quantity: {0}. Must be in range 1-4.")]
    InvalidQuantity(usize),

    #[error("Invalid pip value: {0}. Must be in range 0-12.")]
    InvalidPips(u8),

    #[error("All hub branches already have an owner")]
    HubFull,

    #[error("No branch owned by: {0}")]
    OwnerNotFound(String),

    #[error("Branch index {0} out of range (hub has 8 branches)")]
    BranchOutOfRange(usize),

    #[error("Tile {end1}|{end2} does not match open end {open_end}")]
    TileMismatch { end1: u8, end2: u8, open_end: u8 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color '{value}' for {field}: expected #rrggbb")]
    InvalidColor { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No game in progress to snapshot")]
    NoGame,
}

pub type TableResult<T> = Result<T, TableError>;
