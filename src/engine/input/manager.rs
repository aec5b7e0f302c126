// Input manager: turns keyboard events into player input

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::{PlayerInput, TickInput};
use log::trace;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the key bindings and the player's input state
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply one key change. Key repeats are dropped.
    pub fn process_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(InputSource::key(code)) else {
            return;
        };

        match state {
            ElementState::Pressed if !repeat => {
                trace!("{:?} pressed", action);
                self.player.press(action);
            }
            ElementState::Pressed => {}
            ElementState::Released => self.player.release(action),
        }
    }

    /// Sample input for the next tick
    pub fn snapshot(&self) -> TickInput {
        self.player.snapshot()
    }

    /// Call after a tick has consumed a snapshot
    pub fn end_tick(&mut self) {
        self.player.end_tick();
    }

    pub fn quit_requested(&self) -> bool {
        self.player.just_pressed(Action::Quit)
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}
