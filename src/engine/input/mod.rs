// Input handling system
//
// Keyboard events arrive from winit between ticks. The simulation never sees
// them directly: once per tick it takes a `TickInput` snapshot, then the edge
// state is cleared.
//
// - `action`: game actions and the default key layout
// - `config`: rebindable key map
// - `player`: held and just-pressed state, plus the snapshot
// - `manager`: routes winit events through the key map

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::{PlayerInput, TickInput};
