// src/config/config_types.rs
//
// Config types for the app

use nannou::color::Rgb8;
use serde::Deserialize;

use crate::errors::ConfigError;
use crate::models::palette;
use crate::utilities::color::{parse_hex_color, to_hex};

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Mexican Train Dominoes".to_string()
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TableConfig {
    pub felt_color: String,
    pub button_color: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            felt_color: to_hex(palette::poker_green()),
            button_color: to_hex(palette::purple()),
        }
    }
}

impl TableConfig {
    pub fn theme(&self) -> Result<TableTheme, ConfigError> {
        Ok(TableTheme {
            felt: parse_color("table.felt_color", &self.felt_color)?,
            button: parse_color("table.button_color", &self.button_color)?,
        })
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Rgb8, ConfigError> {
    parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub players: Vec<String>,
    pub boneyard_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathConfig {
    pub snapshot_file: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            snapshot_file: "table.json".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/************************* Runtime settings ********************/

/// Resolved colors used by the scenes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableTheme {
    pub felt: Rgb8,
    pub button: Rgb8,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            felt: palette::poker_green(),
            button: palette::purple(),
        }
    }
}

/// Everything the game needs from the config, already validated
#[derive(Debug, Clone, Default)]
pub struct GameSettings {
    pub theme: TableTheme,
    pub players: Vec<String>,
    pub boneyard_seed: Option<u64>,
}
