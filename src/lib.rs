//! Dot Dodge - a falling-dot avoidance arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, game state)
//! - `game`: Owning controller wiring the sim to leaderboard persistence
//! - `highscores`: Top-5 leaderboard
//! - `persistence`: Leaderboard storage backends
//! - `render`: Drawing pass over an abstract surface

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod render;
pub mod sim;

pub use game::Game;
pub use highscores::Leaderboard;

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults - a paddle near the bottom edge
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    pub const PLAYER_Y: f32 = 560.0;
    /// Horizontal movement per frame while a direction is held
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Hazard defaults
    pub const HAZARD_RADIUS: f32 = 10.0;
    /// Hazards enter just above the field
    pub const HAZARD_SPAWN_Y: f32 = -10.0;
    /// Horizontal span hazards and power-ups spawn across
    pub const SPAWN_SPAN: f32 = 360.0;
    /// Minimum fall speed before score scaling
    pub const HAZARD_BASE_SPEED: f32 = 2.0;
    /// Divisor applied to score in the fall-speed formula
    pub const HAZARD_SPEED_SCALE: f32 = 50.0;

    /// Hazard spawn pacing (frames between spawns)
    pub const SPAWN_INTERVAL_START: u32 = 90;
    pub const SPAWN_INTERVAL_FLOOR: u32 = 30;
    /// Interval reduction applied every 10th score increment
    pub const SPAWN_INTERVAL_STEP: u32 = 5;

    /// Power-up defaults
    pub const POWERUP_RADIUS: f32 = 8.0;
    pub const POWERUP_FALL_SPEED: f32 = 2.5;
    /// Frames between power-up spawn attempts
    pub const POWERUP_PERIOD: u64 = 200;
    /// Chance a spawn attempt actually produces a power-up
    pub const POWERUP_CHANCE: f64 = 0.05;

    /// Score granted by a ScoreBonus pickup
    pub const SCORE_BONUS: u64 = 25;
    /// Duration of the slow-time window (frames)
    pub const SLOW_TIME_TICKS: u32 = 300;

    /// Dash burst distance and recharge time
    pub const DASH_DISTANCE: f32 = 80.0;
    pub const DASH_COOLDOWN_TICKS: u32 = 90;

    /// Score at which the panic-mode tint kicks in (cosmetic only)
    pub const PANIC_SCORE: u64 = 100;
}
