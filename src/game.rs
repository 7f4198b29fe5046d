//! Owning game controller
//!
//! Wraps the simulation state together with the leaderboard and its store,
//! so the GameOver persistence side effect happens in exactly one place.
//! Store failures are logged and swallowed; the loop never halts on them.

use crate::highscores::Leaderboard;
use crate::persistence::ScoreStore;
use crate::sim::{GamePhase, GameState, TickInput, tick};

pub struct Game<S: ScoreStore> {
    state: GameState,
    leaderboard: Leaderboard,
    store: S,
}

impl<S: ScoreStore> Game<S> {
    /// Create a session: loads the persisted leaderboard at startup.
    pub fn new(seed: u64, store: S) -> Self {
        let leaderboard = store.load();
        Self {
            state: GameState::new(seed),
            leaderboard,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Advance one frame; on the Playing -> GameOver transition, merge the
    /// final score into the leaderboard and persist it.
    pub fn step(&mut self, input: &TickInput) {
        let was_playing = self.state.phase == GamePhase::Playing;
        tick(&mut self.state, input);

        if was_playing && self.state.phase == GamePhase::GameOver {
            let score = self.state.run.score;
            if let Some(rank) = self.leaderboard.record(score) {
                log::info!("score {score} placed #{rank} on the leaderboard");
            }
            if let Err(err) = self.store.save(&self.leaderboard) {
                log::error!("leaderboard save failed: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::Hazard;
    use glam::Vec2;

    /// Drive the session into game over by parking a hazard on the player
    fn force_game_over(game: &mut Game<MemoryStore>) {
        let x = game.state.player.center_x();
        game.state.hazards.push(Hazard {
            pos: Vec2::new(x, 549.0),
            radius: 10.0,
            speed: 2.0,
        });
        game.step(&TickInput::default());
        assert_eq!(game.state().phase, GamePhase::GameOver);
    }

    #[test]
    fn game_over_persists_score() {
        let mut game = Game::new(1, MemoryStore::new());
        game.state.run.score = 17;
        force_game_over(&mut game);

        assert_eq!(game.leaderboard().scores(), &[17]);
        let saved = game.store.saved().expect("save should have happened");
        assert_eq!(saved.scores(), &[17]);
    }

    #[test]
    fn leaderboard_stays_sorted_and_capped_across_runs() {
        let mut game = Game::new(1, MemoryStore::new());
        for score in [10u64, 50, 30, 20, 40, 60, 5] {
            game.state.run.score = score;
            force_game_over(&mut game);
            game.step(&TickInput {
                restart: true,
                ..Default::default()
            });
            assert_eq!(game.state().phase, GamePhase::Playing);
        }
        assert_eq!(game.leaderboard().scores(), &[60, 50, 40, 30, 20]);
    }

    #[test]
    fn restart_preserves_leaderboard() {
        let mut game = Game::new(1, MemoryStore::new());
        game.state.run.score = 33;
        force_game_over(&mut game);

        game.step(&TickInput {
            restart: true,
            ..Default::default()
        });

        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().run.score, 0);
        assert_eq!(game.leaderboard().scores(), &[33]);
    }

    #[test]
    fn existing_scores_load_at_startup() {
        let mut store = MemoryStore::new();
        store
            .save(&Leaderboard::from_scores(vec![90, 80]))
            .unwrap();

        let game = Game::new(1, store);
        assert_eq!(game.leaderboard().scores(), &[90, 80]);
    }

    #[test]
    fn save_happens_once_per_run() {
        let mut game = Game::new(1, MemoryStore::new());
        game.state.run.score = 9;
        force_game_over(&mut game);

        // Further steps in GameOver do not re-record
        game.step(&TickInput::default());
        game.step(&TickInput::default());
        assert_eq!(game.leaderboard().scores(), &[9]);
    }
}
