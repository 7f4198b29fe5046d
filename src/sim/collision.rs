//! Falling-entity vs player collision

use glam::Vec2;

use super::state::Player;

/// Box/point hit test shared by hazards and power-ups: the entity's bottom
/// edge must have passed the player's top, and its center must lie strictly
/// inside the player's horizontal span. Intentionally not a true
/// circle-rectangle overlap; gameplay balance depends on this exact test.
pub fn falling_hit(pos: Vec2, radius: f32, player: &Player) -> bool {
    pos.y + radius > player.y && pos.x > player.x && pos.x < player.x + player.width
}
