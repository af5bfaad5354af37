//! Game state and core simulation types
//!
//! `SimulationState` is the single owner of everything that changes between
//! ticks. Nothing here is global; the frame driver holds the state and hands
//! it to `tick` by mutable reference.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{self, ActiveEffect};
use super::food;
use crate::consts::*;

/// Which of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Held direction keys for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    /// Net direction as a unit-step vector (opposite keys cancel)
    pub fn direction(&self) -> IVec2 {
        IVec2::new(
            self.right as i32 - self.left as i32,
            self.down as i32 - self.up as i32,
        )
    }
}

/// A player avatar. Always square: one `size` is both width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Top-left corner of the bounding square
    pub pos: IVec2,
    pub size: i32,
    pub alive: bool,
    /// Timestamp of the last death (None until first eaten)
    pub died_at: Option<u64>,
    /// Direction keys applied on the latest tick
    pub intent: MoveIntent,
    pub speed_boost: Option<ActiveEffect>,
    pub shield: Option<ActiveEffect>,
    /// Where this player reappears after a death
    pub spawn_point: IVec2,
}

impl Player {
    pub fn new(id: PlayerId, pos: IVec2, size: i32, spawn_point: IVec2) -> Self {
        Self {
            id,
            pos,
            size,
            alive: true,
            died_at: None,
            intent: MoveIntent::default(),
            speed_boost: None,
            shield: None,
            spawn_point,
        }
    }

    /// Starting layout for a session
    pub fn initial(id: PlayerId) -> Self {
        match id {
            PlayerId::One => Self::new(id, IVec2::new(100, 150), 180, IVec2::new(100, 100)),
            PlayerId::Two => Self::new(id, IVec2::new(300, 250), 170, IVec2::new(400, 400)),
        }
    }

    #[inline]
    pub fn is_speed_boosted(&self, now: u64) -> bool {
        effects::is_active(self.speed_boost, now)
    }

    #[inline]
    pub fn is_shielded(&self, now: u64) -> bool {
        effects::is_active(self.shield, now)
    }

    /// Center of the bounding square
    pub fn center(&self) -> IVec2 {
        self.pos + IVec2::splat(self.size / 2)
    }
}

/// Food types. Exactly one per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodKind {
    /// Grows the eater
    #[default]
    Normal,
    /// Shrinks the eater
    Poison,
    /// Doubles movement speed for a while
    SpeedBoost,
    /// Protects against being eaten for a while
    Shield,
}

/// One reusable food slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub pos: IVec2,
    pub size: i32,
    pub kind: FoodKind,
    pub alive: bool,
    /// Set when eaten; the slot respawns a fixed delay later
    pub died_at: Option<u64>,
}

impl Food {
    pub fn new(pos: IVec2, kind: FoodKind) -> Self {
        Self {
            pos,
            size: FOOD_SIZE,
            kind,
            alive: true,
            died_at: None,
        }
    }
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten {
        player: PlayerId,
        slot: usize,
        kind: FoodKind,
    },
    FoodRespawned {
        slot: usize,
        kind: FoodKind,
    },
    PlayerEliminated {
        victim: PlayerId,
        by: PlayerId,
    },
    PlayerRespawned {
        player: PlayerId,
    },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub players: [Player; 2],
    /// Fixed set of food slots
    pub food: Vec<Food>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Timestamp used by the previous tick
    pub last_tick_ms: u64,
    /// Events produced by the latest tick
    pub events: Vec<GameEvent>,
}

impl SimulationState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let food = food::spawn_all(&mut rng, FOOD_COUNT);

        Self {
            seed,
            rng,
            players: [Player::initial(PlayerId::One), Player::initial(PlayerId::Two)],
            food,
            time_ticks: 0,
            last_tick_ms: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn alive_food(&self) -> impl Iterator<Item = (usize, &Food)> {
        self.food.iter().enumerate().filter(|(_, f)| f.alive)
    }
}
