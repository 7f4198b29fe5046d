//! Entity spawning
//!
//! Pure functions of the current run state plus an injected RNG; the only
//! side effect is advancing the RNG stream.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Hazard, PowerKind, PowerUp, RunState};
use crate::consts::*;

/// Spawn a hazard when the frame counter lands on the spawn interval.
/// Fall speed grows with score (`base + random * score / scale`) with no
/// upper bound.
pub fn maybe_spawn_hazard(run: &RunState, rng: &mut Pcg32) -> Option<Hazard> {
    if run.frame == 0 || run.frame % run.spawn_interval as u64 != 0 {
        return None;
    }
    let x = rng.random::<f32>() * SPAWN_SPAN;
    let speed = HAZARD_BASE_SPEED + rng.random::<f32>() * run.score as f32 / HAZARD_SPEED_SCALE;
    Some(Hazard {
        pos: Vec2::new(x, HAZARD_SPAWN_Y),
        radius: HAZARD_RADIUS,
        speed,
    })
}

/// Spawn a power-up on the fixed period, gated by a probability roll;
/// kind is chosen uniformly.
pub fn maybe_spawn_powerup(run: &RunState, rng: &mut Pcg32) -> Option<PowerUp> {
    if run.frame == 0 || run.frame % POWERUP_PERIOD != 0 {
        return None;
    }
    if !rng.random_bool(POWERUP_CHANCE) {
        return None;
    }
    let kind = match rng.random_range(0..3) {
        0 => PowerKind::Shield,
        1 => PowerKind::ScoreBonus,
        _ => PowerKind::SlowTime,
    };
    let x = rng.random::<f32>() * SPAWN_SPAN;
    Some(PowerUp {
        pos: Vec2::new(x, HAZARD_SPAWN_Y),
        radius: POWERUP_RADIUS,
        kind,
        speed: POWERUP_FALL_SPEED,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    fn run_at(frame: u64) -> RunState {
        RunState {
            frame,
            ..RunState::default()
        }
    }

    #[test]
    fn hazard_spawns_only_on_interval_multiples() {
        let mut r = rng();
        assert!(maybe_spawn_hazard(&run_at(0), &mut r).is_none());
        assert!(maybe_spawn_hazard(&run_at(89), &mut r).is_none());
        assert!(maybe_spawn_hazard(&run_at(90), &mut r).is_some());
        assert!(maybe_spawn_hazard(&run_at(91), &mut r).is_none());
        assert!(maybe_spawn_hazard(&run_at(180), &mut r).is_some());
    }

    #[test]
    fn hazard_spawns_inside_span_at_entry_row() {
        let mut r = rng();
        for i in 1..=20u64 {
            let h = maybe_spawn_hazard(&run_at(i * 90), &mut r).unwrap();
            assert!(h.pos.x >= 0.0 && h.pos.x < SPAWN_SPAN);
            assert_eq!(h.pos.y, HAZARD_SPAWN_Y);
            assert_eq!(h.radius, HAZARD_RADIUS);
        }
    }

    #[test]
    fn hazard_speed_is_base_at_zero_score() {
        let mut r = rng();
        let h = maybe_spawn_hazard(&run_at(90), &mut r).unwrap();
        assert_eq!(h.speed, HAZARD_BASE_SPEED);
    }

    #[test]
    fn hazard_speed_scales_with_score() {
        let mut r = rng();
        let run = RunState {
            frame: 90,
            score: 500,
            ..RunState::default()
        };
        let h = maybe_spawn_hazard(&run, &mut r).unwrap();
        assert!(h.speed >= HAZARD_BASE_SPEED);
        assert!(h.speed <= HAZARD_BASE_SPEED + 500.0 / HAZARD_SPEED_SCALE);
    }

    #[test]
    fn powerup_only_attempts_on_period() {
        let mut r = rng();
        assert!(maybe_spawn_powerup(&run_at(0), &mut r).is_none());
        assert!(maybe_spawn_powerup(&run_at(199), &mut r).is_none());
        assert!(maybe_spawn_powerup(&run_at(201), &mut r).is_none());
    }

    #[test]
    fn powerup_chance_gate_eventually_fires_each_kind() {
        // The 5% gate makes individual attempts unreliable; over many draws
        // a seeded stream must produce all three kinds.
        let mut r = rng();
        let mut seen = [false; 3];
        for i in 1..=5000u64 {
            if let Some(p) = maybe_spawn_powerup(&run_at(i * POWERUP_PERIOD), &mut r) {
                assert!(p.pos.x >= 0.0 && p.pos.x < SPAWN_SPAN);
                assert_eq!(p.speed, POWERUP_FALL_SPEED);
                match p.kind {
                    PowerKind::Shield => seen[0] = true,
                    PowerKind::ScoreBonus => seen[1] = true,
                    PowerKind::SlowTime => seen[2] = true,
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn same_seed_same_spawn_sequence() {
        let mut a = rng();
        let mut b = rng();
        for i in 1..=10u64 {
            assert_eq!(
                maybe_spawn_hazard(&run_at(i * 90), &mut a),
                maybe_spawn_hazard(&run_at(i * 90), &mut b)
            );
        }
    }
}
