//! Draw command list
//!
//! Turns a `RenderView` into sprite and ring commands in back-to-front
//! order. How a sprite or a ring gets onto the screen is up to the sink.

use super::view::{Rect, RenderView};
use crate::consts::SHIELD_RING_PADDING;
use crate::sim::{FoodKind, PlayerId};

/// Colors for game elements (RGBA)
pub mod colors {
    /// Player one's shield ring
    pub const SHIELD_ONE: [f32; 4] = [1.0, 0.647, 0.0, 1.0];
    /// Player two's shield ring
    pub const SHIELD_TWO: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
}

/// Images the frame driver is expected to have loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    PlayerOne,
    PlayerTwo,
    FoodNormal,
    FoodPoison,
    FoodSpeed,
    FoodShield,
}

impl Sprite {
    pub fn for_player(id: PlayerId) -> Self {
        match id {
            PlayerId::One => Sprite::PlayerOne,
            PlayerId::Two => Sprite::PlayerTwo,
        }
    }

    pub fn for_food(kind: FoodKind) -> Self {
        match kind {
            FoodKind::Normal => Sprite::FoodNormal,
            FoodKind::Poison => Sprite::FoodPoison,
            FoodKind::SpeedBoost => Sprite::FoodSpeed,
            FoodKind::Shield => Sprite::FoodShield,
        }
    }

    /// Conventional asset file name
    pub fn file_name(&self) -> &'static str {
        match self {
            Sprite::Background => "background.png",
            Sprite::PlayerOne => "player1.png",
            Sprite::PlayerTwo => "player2.png",
            Sprite::FoodNormal => "normal_food.png",
            Sprite::FoodPoison => "poison_food.png",
            Sprite::FoodSpeed => "speed_food.png",
            Sprite::FoodShield => "shield_food.png",
        }
    }
}

/// One drawing operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Stretch the background over the whole window
    Background,
    Sprite { sprite: Sprite, rect: Rect },
    /// Circle outline
    Ring {
        center: (i32, i32),
        radius: i32,
        color: [f32; 4],
    },
}

/// Receives a finished frame
pub trait FrameSink {
    fn present(&mut self, commands: &[DrawCommand]);
}

/// Keeps the most recent frame; used headless and in tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub last_frame: Vec<DrawCommand>,
    pub frames_presented: u64,
}

impl FrameSink for RecordingSink {
    fn present(&mut self, commands: &[DrawCommand]) {
        self.last_frame.clear();
        self.last_frame.extend_from_slice(commands);
        self.frames_presented += 1;
    }
}

fn shield_color(id: PlayerId) -> [f32; 4] {
    match id {
        PlayerId::One => colors::SHIELD_ONE,
        PlayerId::Two => colors::SHIELD_TWO,
    }
}

/// Background, then food, then shield rings, then players on top
pub fn build_draw_list(view: &RenderView) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(1 + view.food.len() + view.players.len() * 2);
    commands.push(DrawCommand::Background);

    commands.extend(view.food.iter().map(|f| DrawCommand::Sprite {
        sprite: Sprite::for_food(f.kind),
        rect: f.rect,
    }));

    commands.extend(
        view.players
            .iter()
            .filter(|p| p.shielded)
            .map(|p| DrawCommand::Ring {
                center: p.rect.center(),
                radius: p.rect.w / 2 + SHIELD_RING_PADDING,
                color: shield_color(p.player),
            }),
    );

    commands.extend(view.players.iter().map(|p| DrawCommand::Sprite {
        sprite: Sprite::for_player(p.player),
        rect: p.rect,
    }));

    commands
}
