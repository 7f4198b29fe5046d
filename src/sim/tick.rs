//! Per-frame simulation step
//!
//! Advances the game by exactly one frame from a `TickInput`. The driver
//! calls this once per displayed frame; rendering happens afterwards from
//! the resulting state.

use super::collision::falling_hit;
use super::spawn::{maybe_spawn_hazard, maybe_spawn_powerup};
use super::state::{GamePhase, GameState, Player, PowerKind};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left direction held
    pub left: bool,
    /// Right direction held
    pub right: bool,
    /// Dash trigger (discrete, not per-frame)
    pub dash: bool,
    /// Pause toggle (discrete)
    pub pause: bool,
    /// Restart (discrete, honored only in GameOver)
    pub restart: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return,
        GamePhase::GameOver => {
            if input.restart {
                state.reset_run();
                log::info!("run restarted");
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.run.frame += 1;

    // Timers decay before input so a dash started this frame is observable
    // at its full cooldown after the step.
    if state.player.dash_cooldown > 0 {
        state.player.dash_cooldown -= 1;
    }
    if state.run.slow_ticks > 0 {
        state.run.slow_ticks -= 1;
    }

    apply_movement(&mut state.player, input);

    if let Some(h) = maybe_spawn_hazard(&state.run, &mut state.rng) {
        state.hazards.push(h);
    }
    if let Some(p) = maybe_spawn_powerup(&state.run, &mut state.rng) {
        log::debug!("power-up spawned: {:?}", p.kind);
        state.powerups.push(p);
    }

    update_powerups(state);
    update_hazards(state);
}

/// Held-direction movement plus the dash burst, clamped to field bounds
fn apply_movement(player: &mut Player, input: &TickInput) {
    let max_x = FIELD_WIDTH - player.width;

    if input.left {
        player.x -= player.speed;
    }
    if input.right {
        player.x += player.speed;
    }
    player.x = player.x.clamp(0.0, max_x);

    if input.dash && player.dash_cooldown == 0 {
        let dir = match (input.left, input.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            // No held direction to dash along; the trigger is ignored and
            // the cooldown stays ready.
            _ => return,
        };
        player.x = (player.x + dir * DASH_DISTANCE).clamp(0.0, max_x);
        player.dash_cooldown = DASH_COOLDOWN_TICKS;
    }
}

/// Advance power-ups, apply effects on pickup, drop bottom exits silently
fn update_powerups(state: &mut GameState) {
    let pending = std::mem::take(&mut state.powerups);
    for mut p in pending {
        p.pos.y += p.speed;
        if falling_hit(p.pos, p.radius, &state.player) {
            match p.kind {
                PowerKind::Shield => state.player.shield = true,
                PowerKind::ScoreBonus => state.run.score += SCORE_BONUS,
                PowerKind::SlowTime => state.run.slow_ticks = SLOW_TIME_TICKS,
            }
            log::debug!("power-up collected: {:?}", p.kind);
        } else if p.pos.y <= FIELD_HEIGHT {
            state.powerups.push(p);
        }
    }
}

/// Advance hazards, resolve hits and bottom-exit scoring.
///
/// A lethal hit flags game over but the rest of the collection still gets
/// its motion and bottom-exit handling for this frame, so no off-screen
/// entries survive the step.
fn update_hazards(state: &mut GameState) {
    let slow = state.run.slow_active();
    let mut game_over = false;

    let pending = std::mem::take(&mut state.hazards);
    for mut h in pending {
        let factor = if slow { 0.5 } else { 1.0 };
        h.pos.y += h.speed * factor;

        if falling_hit(h.pos, h.radius, &state.player) {
            if state.player.shield {
                state.player.shield = false;
                log::debug!("shield absorbed a hit");
            } else {
                game_over = true;
            }
            continue;
        }

        if h.pos.y > FIELD_HEIGHT {
            state.run.score += 1;
            if state.run.score % 10 == 0 && state.run.spawn_interval > SPAWN_INTERVAL_FLOOR {
                state.run.spawn_interval -= SPAWN_INTERVAL_STEP;
                log::debug!("spawn interval now {}", state.run.spawn_interval);
            }
            continue;
        }

        state.hazards.push(h);
    }

    if game_over {
        state.phase = GamePhase::GameOver;
        log::info!("game over at score {}", state.run.score);
    }
}
