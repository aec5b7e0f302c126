// Player input state and the per-tick snapshot handed to the game

use super::action::Action;
use std::collections::HashSet;

/// What the simulation reads each tick.
///
/// Movement is level-triggered; the other flags are edges that fire once per press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub attack: bool,
    pub interact: bool,
    pub advance_dialogue: bool,
}

/// Keyboard state between two ticks
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Actions pressed since the last tick
    just_pressed: HashSet<Action>,

    /// Actions released since the last tick
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Sample the state for one tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            move_left: self.is_pressed(Action::MoveLeft),
            move_right: self.is_pressed(Action::MoveRight),
            attack: self.just_pressed(Action::Attack),
            interact: self.just_pressed(Action::Interact),
            advance_dialogue: self.just_pressed(Action::AdvanceDialogue),
        }
    }

    /// Forget edges once a tick has consumed them
    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.end_tick();
    }
}
