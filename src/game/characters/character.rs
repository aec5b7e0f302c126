// Actor entities: the player, the enemy and the NPCs

use std::sync::Arc;

use glam::Vec2;

use super::animation::{CycleEvent, DescriptorSet};
use super::catalog::NpcKind;
use super::pulse::RotatePulse;
use super::state::{ActorState, ActorStateMachine, EnemyState, NpcState};
use super::stats::ActorStats;
use super::table::Facing;
use crate::core::math::Rect;
use crate::game::world::RegionId;

/// Anything on screen with a state machine, a position and health
#[derive(Debug)]
pub struct Actor<S: ActorState> {
    /// Display name for logs
    pub name: String,
    /// Fixed properties
    pub stats: ActorStats,
    /// Direction the actor is facing
    pub facing: Facing,
    /// Recoil pulse, also used as the contact-damage cooldown
    pub pulse: RotatePulse,
    position: Vec2,
    health: i32,
    state_machine: ActorStateMachine<S>,
}

impl<S: ActorState> Actor<S> {
    pub fn new(
        name: &str,
        stats: ActorStats,
        descriptors: Arc<DescriptorSet<S>>,
        position: Vec2,
        facing: Facing,
    ) -> Self {
        Self {
            name: name.to_string(),
            facing,
            pulse: RotatePulse::default(),
            position,
            health: stats.max_health,
            stats,
            state_machine: ActorStateMachine::new(descriptors),
        }
    }

    /// Top-left corner
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    /// Move by `dx` pixels
    pub fn shift_x(&mut self, dx: f32) {
        self.position.x += dx;
    }

    /// Collision box, sized from this actor's own stats
    pub fn hitbox(&self) -> Rect {
        Rect::at(self.position, self.stats.size)
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Subtract `amount` and return what is left
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health -= amount;
        self.health
    }

    /// Health is gone
    pub fn is_depleted(&self) -> bool {
        self.health <= 0
    }

    /// Check if the actor has not entered its terminal state
    pub fn is_alive(&self) -> bool {
        !self.state().is_terminal()
    }

    pub fn state(&self) -> S {
        self.state_machine.state()
    }

    pub fn state_machine(&self) -> &ActorStateMachine<S> {
        &self.state_machine
    }

    /// Current animation frame index
    pub fn step(&self) -> usize {
        self.state_machine.cycle().step()
    }

    pub fn request_transition(&mut self, target: S) -> bool {
        self.state_machine.request_transition(target)
    }

    pub fn force_transition(&mut self, target: S) {
        self.state_machine.force_transition(target);
    }

    /// Advance animation and recoil by one tick
    pub fn tick(&mut self) -> CycleEvent<S> {
        self.pulse.tick();
        self.state_machine.tick()
    }
}

/// The melee enemy guarding the temple
#[derive(Debug)]
pub struct Enemy {
    pub actor: Actor<EnemyState>,
    /// Region the enemy lives in
    pub home: RegionId,
    /// Set once the quest sends the player after it
    pub activated: bool,
    /// Set for good once health runs out
    pub defeated: bool,
}

impl Enemy {
    pub fn new(actor: Actor<EnemyState>, home: RegionId) -> Self {
        Self {
            actor,
            home,
            activated: false,
            defeated: false,
        }
    }

    /// Check if the enemy takes part in the current region
    pub fn is_present(&self, region: RegionId) -> bool {
        self.activated && self.home == region
    }
}

/// A stationary character that starts a conversation on contact
#[derive(Debug)]
pub struct Npc {
    pub actor: Actor<NpcState>,
    pub kind: NpcKind,
    /// Region the NPC stands in
    pub region: RegionId,
}

impl Npc {
    pub fn new(actor: Actor<NpcState>, kind: NpcKind, region: RegionId) -> Self {
        Self {
            actor,
            kind,
            region,
        }
    }
}
