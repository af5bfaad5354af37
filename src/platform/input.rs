//! Keyboard to tick input
//!
//! WASD steers player one, the arrow keys steer player two and F toggles
//! fullscreen. Direction keys are level-triggered (held state); F is an edge
//! that shows up in exactly one snapshot.

use crate::sim::{MoveIntent, PlayerId, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    S,
    Left,
    Right,
    Up,
    Down,
    F,
}

/// Raw events polled from the window system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// Held keys plus pending one-shot events
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: [MoveIntent; 2],
    fullscreen_pressed: bool,
    quit_requested: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::F) => self.fullscreen_pressed = true,
            InputEvent::KeyDown(key) => self.set_direction(key, true),
            InputEvent::KeyUp(key) => self.set_direction(key, false),
            InputEvent::Quit => self.quit_requested = true,
        }
    }

    pub fn handle_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    fn set_direction(&mut self, key: Key, down: bool) {
        let (id, flag) = match key {
            Key::A => (PlayerId::One, &mut self.held[0].left),
            Key::D => (PlayerId::One, &mut self.held[0].right),
            Key::W => (PlayerId::One, &mut self.held[0].up),
            Key::S => (PlayerId::One, &mut self.held[0].down),
            Key::Left => (PlayerId::Two, &mut self.held[1].left),
            Key::Right => (PlayerId::Two, &mut self.held[1].right),
            Key::Up => (PlayerId::Two, &mut self.held[1].up),
            Key::Down => (PlayerId::Two, &mut self.held[1].down),
            Key::F => return,
        };
        *flag = down;
        log::trace!("{:?} {:?} -> {}", id, key, down);
    }

    /// Snapshot for the next tick. Clears the fullscreen edge.
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            players: self.held,
            toggle_fullscreen: self.fullscreen_pressed,
        };
        self.fullscreen_pressed = false;
        input
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_map_to_players() {
        let mut kb = KeyboardState::new();
        kb.handle_all([
            InputEvent::KeyDown(Key::A),
            InputEvent::KeyDown(Key::S),
            InputEvent::KeyDown(Key::Right),
            InputEvent::KeyDown(Key::Up),
        ]);
        let input = kb.snapshot();
        assert!(input.players[0].left && input.players[0].down);
        assert!(!input.players[0].right && !input.players[0].up);
        assert!(input.players[1].right && input.players[1].up);
        assert!(!input.players[1].left && !input.players[1].down);
    }

    #[test]
    fn test_keys_stay_held_until_released() {
        let mut kb = KeyboardState::new();
        kb.handle(InputEvent::KeyDown(Key::D));
        assert!(kb.snapshot().players[0].right);
        assert!(kb.snapshot().players[0].right);
        kb.handle(InputEvent::KeyUp(Key::D));
        assert!(!kb.snapshot().players[0].right);
    }

    #[test]
    fn test_fullscreen_is_one_shot() {
        let mut kb = KeyboardState::new();
        kb.handle(InputEvent::KeyDown(Key::F));
        assert!(kb.snapshot().toggle_fullscreen);
        assert!(!kb.snapshot().toggle_fullscreen);
        // Releasing F does nothing
        kb.handle(InputEvent::KeyUp(Key::F));
        assert!(!kb.snapshot().toggle_fullscreen);
    }

    #[test]
    fn test_quit() {
        let mut kb = KeyboardState::new();
        assert!(!kb.quit_requested());
        kb.handle(InputEvent::Quit);
        assert!(kb.quit_requested());
    }
}
