//! Demo pilot
//!
//! Steers a player without a keyboard so the game can run unattended:
//! hunt a smaller opponent, run from a bigger one, otherwise graze.

use glam::IVec2;

use super::state::{FoodKind, MoveIntent, PlayerId, SimulationState};
use crate::consts::PLAYER_STEP;

/// How close a bigger opponent has to be before we run
const FLEE_DISTANCE: f32 = 400.0;

/// Pick the direction keys `id` should hold this frame
pub fn steer(state: &SimulationState, id: PlayerId, now: u64) -> MoveIntent {
    let me = state.player(id);
    if !me.alive {
        return MoveIntent::default();
    }
    let here = me.center();
    let them = state.player(id.opponent());

    if them.alive {
        let there = them.center();
        if me.size > them.size && !them.is_shielded(now) {
            return toward(here, there);
        }
        if them.size > me.size
            && !me.is_shielded(now)
            && here.as_vec2().distance(there.as_vec2()) < FLEE_DISTANCE
        {
            return toward(here, here * 2 - there);
        }
    }

    // Graze on the nearest edible food
    state
        .alive_food()
        .filter(|(_, f)| f.kind != FoodKind::Poison)
        .map(|(_, f)| f.pos + IVec2::splat(f.size / 2))
        .min_by_key(|c| (*c - here).length_squared())
        .map(|target| toward(here, target))
        .unwrap_or_default()
}

/// Direction keys from `from` to `to`, ignoring axes already within a step
fn toward(from: IVec2, to: IVec2) -> MoveIntent {
    let delta = to - from;
    MoveIntent {
        left: delta.x < -PLAYER_STEP,
        right: delta.x > PLAYER_STEP,
        up: delta.y < -PLAYER_STEP,
        down: delta.y > PLAYER_STEP,
    }
}
