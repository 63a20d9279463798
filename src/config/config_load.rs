// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use super::config_types::*;
use crate::errors::ConfigError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_dir().map(|dir| dir.join(CONFIG_FILE)) {
            if exe_config.exists() {
                return Self::load_from(&exe_config);
            }
        }

        // Fallback to loading from the current working directory
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = content.parse()?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Validated runtime settings
    pub fn game_settings(&self) -> Result<GameSettings, ConfigError> {
        Ok(GameSettings {
            theme: self.table.theme()?,
            players: self.game.players.clone(),
            boneyard_seed: self.game.boneyard_seed,
        })
    }

    pub fn resolve_snapshot_path(&self) -> PathBuf {
        let snapshot = Path::new(&self.paths.snapshot_file);
        if snapshot.is_absolute() {
            return snapshot.to_path_buf();
        }
        // If path is relative, resolve it relative to the executable or working directory
        match Self::exe_dir() {
            Some(exe_dir) => exe_dir.join(snapshot),
            None => snapshot.to_path_buf(),
        }
    }

    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(content)?;
        // reject bad colors at load time rather than on first draw
        config.table.theme()?;
        debug!("config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::color::rgb8;

    const FULL_CONFIG: &str = r##"
        [window]
        width = 1024
        height = 768
        title = "Dominoes"

        [table]
        felt_color = "#112233"
        button_color = "#445566"

        [game]
        players = ["Alice", "Bob"]
        boneyard_seed = 12

        [paths]
        snapshot_file = "/tmp/table.json"

        [logging]
        level = "debug"
    "##;

    #[test]
    fn test_parse_full_config() {
        let config: Config = FULL_CONFIG.parse().unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.title, "Dominoes");
        assert_eq!(config.game.players, vec!["Alice", "Bob"]);
        assert_eq!(config.game.boneyard_seed, Some(12));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.resolve_snapshot_path(), PathBuf::from("/tmp/table.json"));

        let settings = config.game_settings().unwrap();
        assert_eq!(settings.theme.felt, rgb8(0x11, 0x22, 0x33));
        assert_eq!(settings.theme.button, rgb8(0x44, 0x55, 0x66));
    }

    #[test]
    fn test_defaults_for_optional_sections() {
        let config: Config = "[window]\nwidth = 640\nheight = 480\n".parse().unwrap();
        assert_eq!(config.window.title, "Mexican Train Dominoes");
        assert!(config.game.players.is_empty());
        assert_eq!(config.game.boneyard_seed, None);
        assert_eq!(config.paths.snapshot_file, "table.json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.game_settings().unwrap().theme, TableTheme::default());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let content = "[window]\nwidth = 1\nheight = 1\n[table]\nfelt_color = \"green\"\n";
        match content.parse::<Config>() {
            Err(ConfigError::InvalidColor { field, value }) => {
                assert_eq!(field, "table.felt_color");
                assert_eq!(value, "green");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_window_is_parse_error() {
        assert!(matches!("".parse::<Config>(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, FULL_CONFIG).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.window.height, 768);

        let missing = Config::load_from(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));
    }
}
