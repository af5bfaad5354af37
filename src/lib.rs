//! Agari - a two-player local arena game
//!
//! Core modules:
//! - `sim`: Simulation engine (players, food, timed effects, eliminations)
//! - `renderer`: Render view and draw command list handed to the frame driver
//! - `platform`: Clock sources and keyboard-to-input mapping
//! - `settings`: Frame driver configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical units)
    pub const ARENA_WIDTH: i32 = 1500;
    pub const ARENA_HEIGHT: i32 = 1000;

    /// Where dead players are parked until they respawn
    pub const OFFSCREEN_SENTINEL: (i32, i32) = (-1000, -1000);

    /// Movement per tick per held direction
    pub const PLAYER_STEP: i32 = 10;
    /// Step multiplier while a speed boost is active
    pub const SPEED_BOOST_FACTOR: i32 = 2;

    /// Size change per normal/poison food
    pub const SIZE_STEP: i32 = 10;
    pub const MIN_PLAYER_SIZE: i32 = 10;
    /// Capped at the arena's short side so the clamp range never inverts
    pub const MAX_PLAYER_SIZE: i32 = ARENA_HEIGHT;
    /// Size a player comes back with after being eaten
    pub const RESPAWN_SIZE: i32 = 170;

    /// Dead players come back once this much time has strictly passed
    pub const PLAYER_RESPAWN_MS: u64 = 3000;

    pub const SPEED_BOOST_MS: u64 = 5000;
    pub const SHIELD_MS: u64 = 5000;
    /// Extra radius of the shield ring around a player
    pub const SHIELD_RING_PADDING: i32 = 10;

    /// Food slots (reused, never reallocated)
    pub const FOOD_COUNT: usize = 20;
    pub const FOOD_SIZE: i32 = 40;
    pub const FOOD_RESPAWN_MS: u64 = 10_000;
    /// Food never spawns within this margin of the right/bottom edges
    pub const FOOD_SPAWN_MARGIN: i32 = 100;

    /// Frame delay the driver sleeps between ticks (~60 Hz)
    pub const DEFAULT_FRAME_DELAY_MS: u64 = 16;
}
