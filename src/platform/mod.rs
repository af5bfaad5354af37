//! Platform abstraction layer
//!
//! Handles what the frame driver owns:
//! - Time (millisecond clocks)
//! - Input events (keyboard to per-tick snapshots)

pub mod clock;
pub mod input;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{InputEvent, Key, KeyboardState};
