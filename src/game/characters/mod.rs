// Character system
//
// This module contains everything related to on-screen actors:
// - Tick-driven animation cycles and their per-state descriptors
// - The state machine shared by the player, the enemy and the NPCs
// - Per-facing frame tables
// - Actor stats and entities

pub mod animation;
pub mod catalog;
pub mod character;
pub mod pulse;
pub mod state;
pub mod stats;
pub mod table;

// Re-export commonly used types
pub use animation::{
    AnimationCycle, AnimationDescriptor, AnimationError, CycleEvent, DescriptorSet, EndAction,
};
pub use catalog::{ActorCatalog, NpcKind};
pub use character::{Actor, Enemy, Npc};
pub use pulse::RotatePulse;
pub use state::{ActorState, ActorStateMachine, EnemyState, NpcState, PlayerState};
pub use stats::ActorStats;
pub use table::{Facing, OrientedAnimationTable, OrientedFrames};
