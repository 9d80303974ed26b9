//! Keyboard state tracking for the window event loop
//!
//! Distinguishes held keys (continuous controls like thrust and turning)
//! from key-down edges (one-shot actions like firing). OS auto-repeat is
//! filtered out so holding the fire key does not machine-gun.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::FrameInput;

#[derive(Debug, Default)]
pub struct InputState {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw keyboard event. `repeat` is the OS auto-repeat flag
    /// and never counts as a new press.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                if !repeat && !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// True only on the frame the key went down
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Reduce the current keyboard state to simulation commands
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            thrust: self.is_key_held(KeyCode::ArrowUp),
            turn_left: self.is_key_held(KeyCode::ArrowLeft),
            turn_right: self.is_key_held(KeyCode::ArrowRight),
            fire: self.is_key_pressed(KeyCode::Space),
        }
    }

    /// Clear per-frame edges. Call once after each simulation step.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
    }
}
