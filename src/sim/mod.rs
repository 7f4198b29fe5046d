//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame steps only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::falling_hit;
pub use spawn::{maybe_spawn_hazard, maybe_spawn_powerup};
pub use state::{GamePhase, GameState, Hazard, Player, PowerKind, PowerUp, RunState};
pub use tick::{TickInput, tick};
