//! Food spawning, respawn scheduling and consumption

use glam::IVec2;
use rand::Rng;

use super::collision::squares_overlap;
use super::effects::ActiveEffect;
use super::player::{clamp_to_arena, grow, shrink};
use super::state::{Food, FoodKind, Player};
use crate::consts::*;

/// Roll a food kind.
///
/// Rolls are checked in priority order and the first hit wins:
/// poison (1 in 4), then speed boost (1 in 6), then shield (1 in 8),
/// otherwise normal. Effective odds are therefore 25%, 12.5%, ~7.8% and
/// ~54.7%.
pub fn roll_kind<R: Rng + ?Sized>(rng: &mut R) -> FoodKind {
    if rng.random_ratio(1, 4) {
        FoodKind::Poison
    } else if rng.random_ratio(1, 6) {
        FoodKind::SpeedBoost
    } else if rng.random_ratio(1, 8) {
        FoodKind::Shield
    } else {
        FoodKind::Normal
    }
}

/// Random top-left inside the arena, away from the right/bottom edges
pub fn random_position<R: Rng + ?Sized>(rng: &mut R) -> IVec2 {
    IVec2::new(
        rng.random_range(0..ARENA_WIDTH - FOOD_SPAWN_MARGIN),
        rng.random_range(0..ARENA_HEIGHT - FOOD_SPAWN_MARGIN),
    )
}

/// Create `count` live food items
pub fn spawn_all<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Food> {
    (0..count)
        .map(|_| {
            let pos = random_position(rng);
            Food::new(pos, roll_kind(rng))
        })
        .collect()
}

/// Revive a dead slot once the respawn delay has elapsed.
/// Returns true if the slot came back this call.
pub fn respawn_due<R: Rng + ?Sized>(food: &mut Food, rng: &mut R, now: u64) -> bool {
    if food.alive {
        return false;
    }
    let died_at = food.died_at.unwrap_or(0);
    if now.saturating_sub(died_at) < FOOD_RESPAWN_MS {
        return false;
    }

    food.pos = random_position(rng);
    food.kind = roll_kind(rng);
    food.alive = true;
    true
}

/// Apply what a food kind does to whoever ate it
pub fn apply_food_effect(player: &mut Player, kind: FoodKind, now: u64) {
    match kind {
        FoodKind::Normal => grow(player, SIZE_STEP),
        FoodKind::Poison => shrink(player, SIZE_STEP),
        FoodKind::SpeedBoost => {
            player.speed_boost = Some(ActiveEffect::new(now, SPEED_BOOST_MS));
        }
        FoodKind::Shield => {
            player.shield = Some(ActiveEffect::new(now, SHIELD_MS));
        }
    }
}

/// Eat `food` if a live player overlaps it. Returns true on consumption.
pub fn check_consumption(player: &mut Player, food: &mut Food, now: u64) -> bool {
    if !player.alive || !food.alive {
        return false;
    }
    if !squares_overlap(player.pos, player.size, food.pos, food.size) {
        return false;
    }

    apply_food_effect(player, food.kind, now);
    // Growing at an edge would push the square past it
    clamp_to_arena(player);
    food.alive = false;
    food.died_at = Some(now);
    true
}
