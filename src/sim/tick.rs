//! Per-frame simulation tick
//!
//! Advances the whole game by one frame. The timestamp is taken once by the
//! caller and reused for every comparison so the tick is internally
//! consistent.

use serde::{Deserialize, Serialize};

use super::collision::squares_overlap;
use super::food::{check_consumption, respawn_due};
use super::player::{apply_movement, clamp_to_arena, kill, try_respawn};
use super::state::{GameEvent, MoveIntent, PlayerId, SimulationState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held direction keys, indexed by `PlayerId::index`
    pub players: [MoveIntent; 2],
    /// Fullscreen toggle pressed since the last snapshot (driver concern)
    pub toggle_fullscreen: bool,
}

impl TickInput {
    #[inline]
    pub fn intent(&self, id: PlayerId) -> MoveIntent {
        self.players[id.index()]
    }
}

/// Advance the game state by one frame at timestamp `now` (ms).
///
/// Order: movement and clamping, food respawn, food consumption, player
/// respawn, then player-vs-player elimination.
pub fn tick(state: &mut SimulationState, input: &TickInput, now: u64) {
    // A clock that steps backwards is treated as standing still
    let now = now.max(state.last_tick_ms);
    state.last_tick_ms = now;
    state.time_ticks += 1;
    state.events.clear();

    for id in PlayerId::ALL {
        let player = state.player_mut(id);
        apply_movement(player, input.intent(id), now);
        clamp_to_arena(player);
    }

    for (slot, food) in state.food.iter_mut().enumerate() {
        if respawn_due(food, &mut state.rng, now) {
            log::debug!("Food slot {} respawned as {:?}", slot, food.kind);
            state.events.push(GameEvent::FoodRespawned {
                slot,
                kind: food.kind,
            });
        }
    }

    for (slot, food) in state.food.iter_mut().enumerate() {
        for player in state.players.iter_mut() {
            let kind = food.kind;
            if check_consumption(player, food, now) {
                log::debug!("{:?} ate {:?} (slot {})", player.id, kind, slot);
                state.events.push(GameEvent::FoodEaten {
                    player: player.id,
                    slot,
                    kind,
                });
            }
        }
    }

    for player in state.players.iter_mut() {
        if try_respawn(player, now) {
            log::info!("{:?} respawned at {}", player.id, player.pos);
            state.events.push(GameEvent::PlayerRespawned { player: player.id });
        }
    }

    if let Some((victim, by)) = resolve_elimination(state, now) {
        kill(state.player_mut(victim), now);
        log::info!("{:?} was eaten by {:?}", victim, by);
        state.events.push(GameEvent::PlayerEliminated { victim, by });
    }
}

/// Decide whether one player eats the other this tick.
///
/// Both must be alive and overlapping. The strictly larger player eats the
/// smaller unless the smaller's shield is running. Returns `(victim, by)`.
pub fn resolve_elimination(state: &SimulationState, now: u64) -> Option<(PlayerId, PlayerId)> {
    let [a, b] = &state.players;
    if !a.alive || !b.alive {
        return None;
    }
    if !squares_overlap(a.pos, a.size, b.pos, b.size) {
        return None;
    }

    if a.size > b.size && !b.is_shielded(now) {
        Some((b.id, a.id))
    } else if b.size > a.size && !a.is_shielded(now) {
        Some((a.id, b.id))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::effects::ActiveEffect;
    use crate::sim::state::FoodKind;
    use glam::IVec2;

    /// State with both players overlapping and all food parked out of reach
    fn duel(size_one: i32, size_two: i32) -> SimulationState {
        let mut state = SimulationState::new(12345);
        for food in &mut state.food {
            food.pos = IVec2::new(1400, 900);
        }
        state.players[0].pos = IVec2::new(500, 400);
        state.players[0].size = size_one;
        state.players[1].pos = IVec2::new(520, 420);
        state.players[1].size = size_two;
        state
    }

    fn no_food(state: &mut SimulationState) {
        for food in &mut state.food {
            food.alive = false;
            food.died_at = Some(u64::MAX / 2);
        }
    }

    #[test]
    fn test_equal_sizes_no_death() {
        let mut state = duel(150, 150);
        tick(&mut state, &TickInput::default(), 100);
        assert!(state.players.iter().all(|p| p.alive));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_larger_eats_smaller() {
        let mut state = duel(200, 100);
        tick(&mut state, &TickInput::default(), 100);

        let loser = state.player(PlayerId::Two);
        assert!(!loser.alive);
        assert_eq!(loser.pos, IVec2::new(-1000, -1000));
        assert_eq!(loser.died_at, Some(100));
        assert!(state.player(PlayerId::One).alive);
        assert_eq!(
            state.events,
            vec![GameEvent::PlayerEliminated {
                victim: PlayerId::Two,
                by: PlayerId::One
            }]
        );
    }

    #[test]
    fn test_player_two_can_win() {
        let mut state = duel(100, 200);
        tick(&mut state, &TickInput::default(), 100);
        assert!(!state.player(PlayerId::One).alive);
        assert!(state.player(PlayerId::Two).alive);
    }

    #[test]
    fn test_shield_blocks_elimination() {
        let mut state = duel(200, 100);
        state.players[1].shield = Some(ActiveEffect::new(1000, SHIELD_MS));

        tick(&mut state, &TickInput::default(), 5999);
        assert!(state.players.iter().all(|p| p.alive));

        // Expired shield no longer protects, even though it is still set
        tick(&mut state, &TickInput::default(), 6000);
        assert!(!state.player(PlayerId::Two).alive);
    }

    #[test]
    fn test_shield_on_larger_player_irrelevant() {
        let mut state = duel(200, 100);
        state.players[0].shield = Some(ActiveEffect::new(0, SHIELD_MS));
        tick(&mut state, &TickInput::default(), 10);
        assert!(!state.player(PlayerId::Two).alive);
    }

    #[test]
    fn test_dead_player_respawns_after_delay() {
        let mut state = duel(200, 100);
        no_food(&mut state);
        tick(&mut state, &TickInput::default(), 1000);
        assert!(!state.player(PlayerId::Two).alive);

        // Winner wanders off so the spawn point is clear
        state.players[0].pos = IVec2::new(1200, 700);

        tick(&mut state, &TickInput::default(), 1000 + PLAYER_RESPAWN_MS);
        assert!(!state.player(PlayerId::Two).alive);

        tick(&mut state, &TickInput::default(), 1001 + PLAYER_RESPAWN_MS);
        let p2 = state.player(PlayerId::Two);
        assert!(p2.alive);
        assert_eq!(p2.pos, IVec2::new(400, 400));
        assert_eq!(p2.size, RESPAWN_SIZE);
        // The surviving player keeps its size
        assert_eq!(state.player(PlayerId::One).size, 200);
        assert!(state
            .events
            .contains(&GameEvent::PlayerRespawned { player: PlayerId::Two }));
    }

    #[test]
    fn test_poison_food_lifecycle() {
        let mut state = SimulationState::new(99);
        no_food(&mut state);
        let p1 = state.player(PlayerId::One).clone();
        let start_size = p1.size;

        let slot = 0;
        state.food[slot] = crate::sim::Food::new(p1.center() - IVec2::splat(20), FoodKind::Poison);

        let t = 2000;
        tick(&mut state, &TickInput::default(), t);
        assert_eq!(state.player(PlayerId::One).size, start_size - SIZE_STEP);
        assert!(!state.food[slot].alive);
        assert_eq!(state.food[slot].died_at, Some(t));
        assert!(state.events.contains(&GameEvent::FoodEaten {
            player: PlayerId::One,
            slot,
            kind: FoodKind::Poison
        }));

        // Move player one out of the way so the new item isn't eaten on sight
        state.players[0].pos = IVec2::new(1300, 0);
        state.players[0].size = 180;

        tick(&mut state, &TickInput::default(), t + FOOD_RESPAWN_MS - 1);
        assert!(!state.food[slot].alive);

        tick(&mut state, &TickInput::default(), t + FOOD_RESPAWN_MS);
        assert!(state.events.iter().any(|e| matches!(
            e,
            GameEvent::FoodRespawned { slot: 0, .. }
        )));
    }

    #[test]
    fn test_speed_boost_window() {
        let mut state = SimulationState::new(5);
        no_food(&mut state);
        state.players[0].pos = IVec2::new(600, 400);
        state.players[0].speed_boost = Some(ActiveEffect::new(1000, SPEED_BOOST_MS));
        state.players[1].pos = IVec2::new(0, 0);

        let mut input = TickInput::default();
        input.players[0].right = true;

        tick(&mut state, &input, 5999);
        assert_eq!(state.player(PlayerId::One).pos.x, 620);

        tick(&mut state, &input, 6001);
        assert_eq!(state.player(PlayerId::One).pos.x, 630);
    }

    #[test]
    fn test_clock_regression_is_clamped() {
        let mut state = SimulationState::new(5);
        tick(&mut state, &TickInput::default(), 5000);
        tick(&mut state, &TickInput::default(), 4000);
        assert_eq!(state.last_tick_ms, 5000);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_food_goes_to_first_player_only() {
        let mut state = SimulationState::new(8);
        no_food(&mut state);
        state.players[0].pos = IVec2::new(500, 400);
        state.players[0].size = 100;
        state.players[1].pos = IVec2::new(620, 400);
        state.players[1].size = 100;
        // Between the two players, touching both
        state.food[3] = crate::sim::Food::new(IVec2::new(590, 430), FoodKind::Normal);

        tick(&mut state, &TickInput::default(), 10);
        assert_eq!(state.player(PlayerId::One).size, 110);
        assert_eq!(state.player(PlayerId::Two).size, 100);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = SimulationState::new(99999);
        let mut state2 = SimulationState::new(99999);

        let mut input = TickInput::default();
        input.players[0].right = true;
        input.players[1].down = true;

        for frame in 0..2000u64 {
            tick(&mut state1, &input, frame * 16);
            tick(&mut state2, &input, frame * 16);
        }

        assert_eq!(state1.players, state2.players);
        assert_eq!(state1.food, state2.food);
    }
}
