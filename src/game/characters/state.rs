// Actor state machine

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use super::animation::{AnimationCycle, CycleEvent, DescriptorSet};

/// A closed set of behaviour states for one kind of actor
pub trait ActorState: Copy + Eq + Hash + Debug + 'static {
    /// Every state of this kind, ordered by `index()`
    const ALL: &'static [Self];

    /// State an actor enters when spawned
    const INITIAL: Self;

    /// Dense index into per-state tables
    fn index(self) -> usize;

    /// Terminal states are never left again
    fn is_terminal(self) -> bool;

    /// Name used for asset lookups and logs
    fn animation_name(self) -> &'static str;
}

/// Represents the current state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    /// Standing still
    #[default]
    Idle,
    /// Moving horizontally
    Walk,
    /// First swing of the combo
    Attack1,
    /// Second swing, only reachable from Attack1
    Attack2,
    /// Finishing swing, only reachable from Attack2
    Attack3,
    /// Out of health
    Dead,
}

impl PlayerState {
    /// Combo stage entered by an attack press from this state
    pub fn next_attack(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Attack1),
            Self::Attack1 => Some(Self::Attack2),
            Self::Attack2 => Some(Self::Attack3),
            Self::Walk | Self::Attack3 | Self::Dead => None,
        }
    }

    /// Check if a swing is in progress
    pub fn is_attacking(self) -> bool {
        matches!(self, Self::Attack1 | Self::Attack2 | Self::Attack3)
    }
}

impl ActorState for PlayerState {
    const ALL: &'static [Self] = &[
        Self::Idle,
        Self::Walk,
        Self::Attack1,
        Self::Attack2,
        Self::Attack3,
        Self::Dead,
    ];
    const INITIAL: Self = Self::Idle;

    fn index(self) -> usize {
        self as usize
    }

    fn is_terminal(self) -> bool {
        self == Self::Dead
    }

    fn animation_name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Attack1 => "attack1",
            Self::Attack2 => "attack2",
            Self::Attack3 => "attack3",
            Self::Dead => "dead",
        }
    }
}

/// Represents the current state of the melee enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnemyState {
    #[default]
    Idle,
    Walk,
    Attack,
    Dead,
}

impl ActorState for EnemyState {
    const ALL: &'static [Self] = &[Self::Idle, Self::Walk, Self::Attack, Self::Dead];
    const INITIAL: Self = Self::Idle;

    fn index(self) -> usize {
        self as usize
    }

    fn is_terminal(self) -> bool {
        self == Self::Dead
    }

    fn animation_name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Attack => "attack",
            Self::Dead => "dead",
        }
    }
}

/// Non-player characters only ever idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NpcState {
    #[default]
    Idle,
}

impl ActorState for NpcState {
    const ALL: &'static [Self] = &[Self::Idle];
    const INITIAL: Self = Self::Idle;

    fn index(self) -> usize {
        self as usize
    }

    fn is_terminal(self) -> bool {
        false
    }

    fn animation_name(self) -> &'static str {
        "idle"
    }
}

/// State machine that owns an actor's state and its live animation cycle
#[derive(Debug)]
pub struct ActorStateMachine<S: ActorState> {
    descriptors: Arc<DescriptorSet<S>>,
    current_state: S,
    previous_state: S,
    cycle: AnimationCycle<S>,
    ticks_in_state: u64,
}

impl<S: ActorState> ActorStateMachine<S> {
    pub fn new(descriptors: Arc<DescriptorSet<S>>) -> Self {
        let cycle = AnimationCycle::new(descriptors.get(S::INITIAL));
        Self {
            descriptors,
            current_state: S::INITIAL,
            previous_state: S::INITIAL,
            cycle,
            ticks_in_state: 0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> S {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> S {
        self.previous_state
    }

    /// Get the live animation cycle
    pub fn cycle(&self) -> &AnimationCycle<S> {
        &self.cycle
    }

    /// Ticks spent in the current state
    pub fn ticks_in_state(&self) -> u64 {
        self.ticks_in_state
    }

    /// Unconditional transition used by system-driven changes.
    ///
    /// Entering a different state always starts a fresh cycle from that
    /// state's descriptor; re-entering the current state is a no-op.
    pub fn force_transition(&mut self, target: S) {
        if self.current_state != target {
            self.previous_state = self.current_state;
            self.current_state = target;
            self.cycle = AnimationCycle::new(self.descriptors.get(target));
            self.ticks_in_state = 0;
        }
    }

    /// Transition requested by input or AI.
    ///
    /// Returns false without touching anything when the current cycle does
    /// not allow `target` to interrupt it.
    pub fn request_transition(&mut self, target: S) -> bool {
        if self.current_state.is_terminal() || !self.cycle.allows_interrupt_by(target) {
            log::debug!(
                "Transition {:?} -> {:?} denied",
                self.current_state,
                target
            );
            return false;
        }

        self.force_transition(target);
        true
    }

    /// Advance the animation by one tick and apply its end action
    pub fn tick(&mut self) -> CycleEvent<S> {
        self.ticks_in_state += 1;

        let event = self.cycle.tick();
        if let CycleEvent::ForceState(target) = event {
            self.force_transition(target);
        }
        event
    }
}
