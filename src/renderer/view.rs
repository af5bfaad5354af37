//! Render-ready snapshot of the simulation
//!
//! Only live entities appear. Dead players sit at the off-screen sentinel and
//! eaten food waits for respawn, so neither is ever drawn.

use serde::{Deserialize, Serialize};

use crate::sim::{FoodKind, PlayerId, SimulationState};

/// Screen rectangle in arena units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn square(x: i32, y: i32, size: i32) -> Self {
        Self {
            x,
            y,
            w: size,
            h: size,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player: PlayerId,
    pub rect: Rect,
    /// Draw the shield ring
    pub shielded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodView {
    pub slot: usize,
    pub rect: Rect,
    pub kind: FoodKind,
}

/// Everything the frame driver needs to draw one frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderView {
    pub players: Vec<PlayerView>,
    pub food: Vec<FoodView>,
}

impl RenderView {
    /// Build the view at timestamp `now` (shield visibility is time-checked)
    pub fn from_state(state: &SimulationState, now: u64) -> Self {
        let players = state
            .players
            .iter()
            .filter(|p| p.alive)
            .map(|p| PlayerView {
                player: p.id,
                rect: Rect::square(p.pos.x, p.pos.y, p.size),
                shielded: p.is_shielded(now),
            })
            .collect();

        let food = state
            .alive_food()
            .map(|(slot, f)| FoodView {
                slot,
                rect: Rect::square(f.pos.x, f.pos.y, f.size),
                kind: f.kind,
            })
            .collect();

        Self { players, food }
    }
}
