//! Invaders - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formation, combat, frame step)
//! - `screen`: Menu / play / outcome screen flow
//! - `platform`: Input, renderer, clock and asset collaborators plus the driver
//! - `view`: Turns core state into renderer calls
//! - `settings`: JSON configuration

pub mod error;
pub mod platform;
pub mod screen;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::{Error, Result};
pub use screen::{App, Screen};
pub use settings::{FormationStyle, Settings};

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Target frames per second
    pub const FRAME_RATE: u32 = 60;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 15.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the bottom edge to the player's center
    pub const PLAYER_FLOOR_OFFSET: f32 = 30.0;
    pub const PLAYER_LIVES: u8 = 3;

    /// Shots (both directions)
    pub const SHOT_WIDTH: f32 = 3.0;
    pub const SHOT_HEIGHT: f32 = 15.0;
    pub const SHOT_SPEED: f32 = 7.0;

    /// Enemy block size and sprite size
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 20.0;
    pub const ENEMY_SPRITE_SIZE: f32 = 40.0;

    /// Formation layout (3 rows x 8 columns)
    pub const FORMATION_ROWS: usize = 3;
    pub const FORMATION_COLS: usize = 8;
    pub const FORMATION_LEFT: f32 = 100.0;
    pub const FORMATION_TOP: f32 = 50.0;
    pub const FORMATION_COL_SPACING: f32 = 70.0;
    pub const FORMATION_ROW_SPACING: f32 = 50.0;
    /// Vertical drop applied once per edge hit
    pub const FORMATION_DESCENT: f32 = 20.0;

    /// Difficulty starts at 1 and grows every frame
    pub const DIFFICULTY_START: f64 = 1.0;
    pub const DIFFICULTY_STEP: f64 = 0.001;
    /// Per-frame enemy fire chance at difficulty 1
    pub const ENEMY_FIRE_CHANCE: f64 = 0.01;
}
