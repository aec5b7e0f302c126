// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Everything the player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,

    /// Sword swing, also continues the combo
    Attack,
    /// Enter or leave the dialogue zone
    Interact,
    /// Show the next line of the open conversation
    AdvanceDialogue,

    Quit,
}

/// A physical input. Only the keyboard is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Stock keyboard layout
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyU), Action::Attack),
        (InputSource::key(KeyCode::KeyQ), Action::Interact),
        (InputSource::key(KeyCode::Space), Action::AdvanceDialogue),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}
