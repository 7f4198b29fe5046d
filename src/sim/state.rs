//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen, same toggle resumes
    Paused,
    /// Run ended, terminal until restart
    GameOver,
}

/// The player's paddle. `y` never changes; only `x` is driven by input.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Frames until the dash can be used again (0 = ready)
    pub dash_cooldown: u32,
    /// Absorbs exactly one hazard hit
    pub shield: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: (FIELD_WIDTH - PLAYER_WIDTH) / 2.0,
            y: PLAYER_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            dash_cooldown: 0,
            shield: false,
        }
    }
}

impl Player {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// A falling obstacle. Touching it unshielded ends the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Hazard {
    pub pos: Vec2,
    pub radius: f32,
    /// Fall speed in pixels per frame, fixed at spawn time
    pub speed: f32,
}

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerKind {
    /// Absorb the next hazard hit
    Shield,
    /// Immediate fixed score grant
    ScoreBonus,
    /// Halve hazard fall speed for a while
    SlowTime,
}

/// A falling beneficial pickup
#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PowerKind,
    pub speed: f32,
}

/// Per-run counters and timers
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    pub score: u64,
    pub frame: u64,
    /// Frames between hazard spawns; shrinks with score, floor 30
    pub spawn_interval: u32,
    /// Frames of slow-time remaining (0 = inactive)
    pub slow_ticks: u32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            score: 0,
            frame: 0,
            spawn_interval: SPAWN_INTERVAL_START,
            slow_ticks: 0,
        }
    }
}

impl RunState {
    pub fn slow_active(&self) -> bool {
        self.slow_ticks > 0
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG for spawn position/speed/kind draws
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub run: RunState,
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub powerups: Vec<PowerUp>,
}

impl GameState {
    /// Create a fresh state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            run: RunState::default(),
            player: Player::default(),
            hazards: Vec::new(),
            powerups: Vec::new(),
        }
    }

    /// Reset all mutable run state to initial values and resume play.
    /// The RNG stream continues so consecutive runs differ; the leaderboard
    /// lives outside this struct and is untouched.
    pub fn reset_run(&mut self) {
        self.run = RunState::default();
        self.player = Player::default();
        self.hazards.clear();
        self.powerups.clear();
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_centered_near_bottom() {
        let p = Player::default();
        assert_eq!(p.x, 180.0);
        assert_eq!(p.y, 560.0);
        assert!(!p.shield);
        assert_eq!(p.dash_cooldown, 0);
    }

    #[test]
    fn new_state_initial_values() {
        let s = GameState::new(7);
        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.run.score, 0);
        assert_eq!(s.run.spawn_interval, SPAWN_INTERVAL_START);
        assert!(s.hazards.is_empty());
        assert!(s.powerups.is_empty());
    }

    #[test]
    fn reset_run_clears_entities_and_counters() {
        let mut s = GameState::new(7);
        s.run.score = 42;
        s.run.frame = 999;
        s.run.spawn_interval = 55;
        s.player.shield = true;
        s.player.dash_cooldown = 12;
        s.hazards.push(Hazard {
            pos: Vec2::new(10.0, 10.0),
            radius: HAZARD_RADIUS,
            speed: 2.0,
        });
        s.phase = GamePhase::GameOver;

        s.reset_run();

        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.run, RunState::default());
        assert_eq!(s.player, Player::default());
        assert!(s.hazards.is_empty());
        assert!(s.powerups.is_empty());
    }
}
