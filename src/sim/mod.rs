//! Simulation engine
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - One `tick` per frame, driven by an external timestamp
//! - Seeded RNG only
//! - Stable iteration order (player one before player two, food by slot)

pub mod collision;
pub mod effects;
pub mod food;
pub mod pilot;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Circle, circles_overlap, squares_overlap};
pub use effects::ActiveEffect;
pub use state::{Food, FoodKind, GameEvent, MoveIntent, Player, PlayerId, SimulationState};
pub use tick::{TickInput, resolve_elimination, tick};
