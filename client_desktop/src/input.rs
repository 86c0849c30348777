//! Keyboard input handling

use std::collections::HashSet;

use game_core::{FrameInput, Side};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Up/down keys for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleKeys {
    pub up: KeyCode,
    pub down: KeyCode,
}

/// Key bindings for both paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub paddles: [PaddleKeys; 2],
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            paddles: [
                PaddleKeys {
                    up: KeyCode::KeyW,
                    down: KeyCode::KeyS,
                },
                PaddleKeys {
                    up: KeyCode::ArrowUp,
                    down: KeyCode::ArrowDown,
                },
            ],
        }
    }
}

/// Held keys, queryable like a full keyboard state
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a key press or release from a window event
    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState) {
        let PhysicalKey::Code(code) = key else {
            return;
        };
        match state {
            ElementState::Pressed => {
                self.held.insert(code);
            }
            ElementState::Released => {
                self.held.remove(&code);
            }
        }
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Forget every held key (window lost focus, releases will not arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

/// Keyboard part of this frame's input; controller axes are filled in separately
pub fn keyboard_input(keyboard: &KeyboardState, keymap: &Keymap) -> FrameInput {
    let mut input = FrameInput::new();
    for side in Side::BOTH {
        let keys = keymap.paddles[side.index()];
        let paddle = input.paddle_mut(side);
        paddle.up = keyboard.is_held(keys.up);
        paddle.down = keyboard.is_held(keys.down);
    }
    input
}

/// Convert a stick reading (-1.0..=1.0, up positive) to the signed
/// integer axis the game expects (down positive)
pub fn axis_to_i16(value: f32) -> i16 {
    let scaled = (-value.clamp(-1.0, 1.0) * i16::MAX as f32).round();
    scaled as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(keyboard: &mut KeyboardState, code: KeyCode) {
        keyboard.handle_key(PhysicalKey::Code(code), ElementState::Pressed);
    }

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.paddles[0].up, KeyCode::KeyW);
        assert_eq!(keymap.paddles[0].down, KeyCode::KeyS);
        assert_eq!(keymap.paddles[1].up, KeyCode::ArrowUp);
        assert_eq!(keymap.paddles[1].down, KeyCode::ArrowDown);
    }

    #[test]
    fn test_press_and_release() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyW);
        assert!(keyboard.is_held(KeyCode::KeyW));
        keyboard.handle_key(PhysicalKey::Code(KeyCode::KeyW), ElementState::Released);
        assert!(!keyboard.is_held(KeyCode::KeyW));
    }

    #[test]
    fn test_release_all() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::ArrowUp);
        press(&mut keyboard, KeyCode::KeyS);
        keyboard.release_all();
        assert!(!keyboard.is_held(KeyCode::ArrowUp));
        assert!(!keyboard.is_held(KeyCode::KeyS));
    }

    #[test]
    fn test_keyboard_input_per_paddle() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyW);
        press(&mut keyboard, KeyCode::ArrowDown);
        press(&mut keyboard, KeyCode::Space);

        let input = keyboard_input(&keyboard, &Keymap::default());

        assert!(input.paddle(Side::Left).up);
        assert!(!input.paddle(Side::Left).down);
        assert!(!input.paddle(Side::Right).up);
        assert!(input.paddle(Side::Right).down);
        assert_eq!(input.paddle(Side::Left).axis, 0);
    }

    #[test]
    fn test_axis_to_i16() {
        assert_eq!(axis_to_i16(0.0), 0);
        assert_eq!(axis_to_i16(1.0), -i16::MAX, "Stick up moves the paddle up");
        assert_eq!(axis_to_i16(-1.0), i16::MAX);
        assert_eq!(axis_to_i16(3.0), -i16::MAX, "Out-of-range readings are clamped");
        assert!(axis_to_i16(-0.5) > 5000);
        assert!(axis_to_i16(0.1).abs() < 5000);
    }
}
