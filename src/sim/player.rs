//! Player lifecycle: movement, bounds, size changes, death and respawn

use glam::IVec2;

use super::state::{MoveIntent, Player};
use crate::consts::*;

/// Move one step per held direction, doubled while a speed boost runs.
/// Dead players don't move.
pub fn apply_movement(player: &mut Player, intent: MoveIntent, now: u64) {
    player.intent = intent;
    if !player.alive {
        return;
    }

    let step = if player.is_speed_boosted(now) {
        PLAYER_STEP * SPEED_BOOST_FACTOR
    } else {
        PLAYER_STEP
    };
    player.pos += intent.direction() * step;
}

/// Keep a live player fully inside the arena
pub fn clamp_to_arena(player: &mut Player) {
    if !player.alive {
        return;
    }
    player.pos = clamp_square(player.pos, player.size);
}

/// Clamp a square's top-left so the whole square lies in the arena
pub fn clamp_square(pos: IVec2, size: i32) -> IVec2 {
    let max = IVec2::new(ARENA_WIDTH - size, ARENA_HEIGHT - size).max(IVec2::ZERO);
    pos.clamp(IVec2::ZERO, max)
}

pub fn grow(player: &mut Player, delta: i32) {
    player.size = (player.size + delta).min(MAX_PLAYER_SIZE);
}

/// Shrinking never goes below `MIN_PLAYER_SIZE`
pub fn shrink(player: &mut Player, delta: i32) {
    player.size = (player.size - delta).max(MIN_PLAYER_SIZE);
}

/// Remove a player from play immediately
pub fn kill(player: &mut Player, now: u64) {
    player.alive = false;
    player.died_at = Some(now);
    player.pos = IVec2::new(OFFSCREEN_SENTINEL.0, OFFSCREEN_SENTINEL.1);
}

/// Bring a dead player back once the respawn delay has strictly passed.
/// Returns true if the player respawned.
pub fn try_respawn(player: &mut Player, now: u64) -> bool {
    if player.alive {
        return false;
    }
    let died_at = player.died_at.unwrap_or(0);
    if now.saturating_sub(died_at) <= PLAYER_RESPAWN_MS {
        return false;
    }

    player.alive = true;
    player.size = RESPAWN_SIZE;
    player.pos = clamp_square(player.spawn_point, player.size);
    player.speed_boost = None;
    player.shield = None;
    true
}
