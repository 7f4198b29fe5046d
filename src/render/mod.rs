//! Drawing pass
//!
//! The simulation never draws. After each step the driver hands the current
//! state to [`draw_frame`], which issues primitives on a [`Surface`] in a
//! fixed order: clear, panic tint, player, power-ups, hazards, HUD text,
//! cooldown bar, then the pause/game-over overlay.

pub mod terminal;

use crate::Leaderboard;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, PowerKind};

/// Semantic palette shared by all surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Red,
    DarkRed,
    Green,
    Cyan,
    Yellow,
    Magenta,
    DarkGrey,
}

const C_PLAYER: Color = Color::White;
const C_HAZARD: Color = Color::Red;
const C_PANIC_TINT: Color = Color::DarkRed;
const C_SHIELD: Color = Color::Cyan;
const C_HUD: Color = Color::White;
const C_HUD_BEST: Color = Color::Yellow;
const C_COOLDOWN_READY: Color = Color::Green;
const C_COOLDOWN_CHARGING: Color = Color::DarkGrey;
const C_OVERLAY: Color = Color::Yellow;

fn powerup_color(kind: PowerKind) -> Color {
    match kind {
        PowerKind::Shield => Color::Cyan,
        PowerKind::ScoreBonus => Color::Yellow,
        PowerKind::SlowTime => Color::Magenta,
    }
}

/// Drawing primitives consumed by the draw pass. Coordinates are in field
/// space (400x600); surfaces map them to their own resolution.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

/// Emit one complete frame
pub fn draw_frame<S: Surface>(state: &GameState, board: &Leaderboard, out: &mut S) {
    out.clear();

    if state.run.score >= PANIC_SCORE {
        out.fill_rect(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT, C_PANIC_TINT);
    }

    let player = &state.player;
    out.fill_rect(player.x, player.y, player.width, player.height, C_PLAYER);
    if player.shield {
        // Thin strip above the paddle marks the active shield
        out.fill_rect(player.x, player.y - 6.0, player.width, 3.0, C_SHIELD);
    }

    for p in &state.powerups {
        out.fill_circle(p.pos.x, p.pos.y, p.radius, powerup_color(p.kind));
    }
    for h in &state.hazards {
        out.fill_circle(h.pos.x, h.pos.y, h.radius, C_HAZARD);
    }

    out.draw_text(&format!("Score: {}", state.run.score), 10.0, 30.0, 20.0, C_HUD);
    if let Some(best) = board.top() {
        out.draw_text(&format!("Best: {best}"), 10.0, 55.0, 20.0, C_HUD_BEST);
    }
    if state.run.slow_active() {
        out.draw_text("SLOW", FIELD_WIDTH - 70.0, 55.0, 20.0, Color::Magenta);
    }
    if state.run.score >= PANIC_SCORE {
        out.draw_text("PANIC", FIELD_WIDTH - 80.0, 30.0, 20.0, Color::Red);
    }

    draw_cooldown_bar(state, out);

    match state.phase {
        GamePhase::Paused => {
            out.draw_text("Paused", 160.0, 300.0, 32.0, C_OVERLAY);
        }
        GamePhase::GameOver => draw_game_over(state, board, out),
        GamePhase::Playing => {}
    }
}

/// Dash readiness bar along the bottom edge
fn draw_cooldown_bar<S: Surface>(state: &GameState, out: &mut S) {
    let cooldown = state.player.dash_cooldown;
    let ready = 1.0 - cooldown as f32 / DASH_COOLDOWN_TICKS as f32;
    let color = if cooldown == 0 {
        C_COOLDOWN_READY
    } else {
        C_COOLDOWN_CHARGING
    };
    out.fill_rect(10.0, FIELD_HEIGHT - 14.0, 100.0 * ready, 6.0, color);
}

fn draw_game_over<S: Surface>(state: &GameState, board: &Leaderboard, out: &mut S) {
    out.draw_text("Game Over", 140.0, 280.0, 32.0, C_OVERLAY);
    out.draw_text(
        &format!("Final score: {}", state.run.score),
        140.0,
        320.0,
        20.0,
        C_HUD,
    );
    for (i, score) in board.scores().iter().enumerate() {
        out.draw_text(
            &format!("{}. {score}", i + 1),
            160.0,
            350.0 + i as f32 * 22.0,
            20.0,
            C_HUD,
        );
    }
    out.draw_text("Press R to restart", 130.0, 480.0, 20.0, Color::DarkGrey);
}

/// A surface that records every command, for draw-order tests
#[derive(Debug, Default)]
pub struct Recording {
    pub commands: Vec<DrawCmd>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
}

impl Surface for Recording {
    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCmd::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        self.commands.push(DrawCmd::Circle { x, y, r, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }
}
