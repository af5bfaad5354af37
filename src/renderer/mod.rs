//! Rendering interface
//!
//! The simulation never touches pixels. It produces a `RenderView`, which is
//! turned into a list of `DrawCommand`s and handed to a `FrameSink` owned by
//! the frame driver.

pub mod commands;
pub mod view;

pub use commands::{DrawCommand, FrameSink, RecordingSink, Sprite, build_draw_list, colors};
pub use view::{FoodView, PlayerView, Rect, RenderView};
