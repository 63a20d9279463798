pub mod config;
pub mod draw;
pub mod errors;
pub mod game;
pub mod models;
pub mod scenes;
pub mod utilities;
