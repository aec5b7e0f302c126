// Tick-driven animation cycles

use std::sync::Arc;

use super::state::ActorState;

/// Errors raised while assembling animation data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation for {0} advances after zero ticks")]
    ZeroFrameTicks(String),

    #[error("Animation for {0} has no frames")]
    EmptyCycle(String),

    #[error("Animation for {state} expects {expected} frames, got {actual}")]
    FrameCountMismatch {
        state: String,
        expected: usize,
        actual: usize,
    },

    #[error("No animation registered for {0}")]
    MissingState(String),
}

/// What happens when a cycle runs past its last step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndAction<S> {
    /// Start over from the first step
    Wrap,
    /// Hand control to another state
    ForceState(S),
}

/// Side effect of a single `AnimationCycle::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent<S> {
    NoAction,
    Wrapped,
    ForceState(S),
}

/// Immutable timing rules shared by every cycle of one state
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDescriptor<S> {
    max_frame_ticks: u32,
    max_steps: usize,
    reset_whitelist: Option<Vec<S>>,
    freeze_on_last_step: bool,
    end_action: EndAction<S>,
}

impl<S: ActorState> AnimationDescriptor<S> {
    /// A cycle that wraps forever and may be interrupted by anything
    pub fn looping(max_frame_ticks: u32, max_steps: usize) -> Self {
        Self {
            max_frame_ticks,
            max_steps,
            reset_whitelist: None,
            freeze_on_last_step: false,
            end_action: EndAction::Wrap,
        }
    }

    /// A cycle that plays once, then forces `then`
    pub fn one_shot(max_frame_ticks: u32, max_steps: usize, then: S) -> Self {
        Self {
            end_action: EndAction::ForceState(then),
            ..Self::looping(max_frame_ticks, max_steps)
        }
    }

    /// A cycle that plays once and holds its last frame
    pub fn frozen(max_frame_ticks: u32, max_steps: usize) -> Self {
        Self {
            freeze_on_last_step: true,
            ..Self::looping(max_frame_ticks, max_steps)
        }
    }

    /// Restrict which states may interrupt this cycle
    pub fn interruptible_by(mut self, states: &[S]) -> Self {
        self.reset_whitelist = Some(states.to_vec());
        self
    }

    pub fn max_frame_ticks(&self) -> u32 {
        self.max_frame_ticks
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn freeze_on_last_step(&self) -> bool {
        self.freeze_on_last_step
    }

    pub fn end_action(&self) -> EndAction<S> {
        self.end_action
    }

    pub fn reset_whitelist(&self) -> Option<&[S]> {
        self.reset_whitelist.as_deref()
    }

    /// Check if `candidate` may cut this cycle short
    pub fn allows_interrupt_by(&self, candidate: S) -> bool {
        match &self.reset_whitelist {
            None => true,
            Some(states) => states.contains(&candidate),
        }
    }

    fn validate(&self, state: S) -> Result<(), AnimationError> {
        if self.max_frame_ticks == 0 {
            return Err(AnimationError::ZeroFrameTicks(format!("{:?}", state)));
        }
        if self.max_steps == 0 {
            return Err(AnimationError::EmptyCycle(format!("{:?}", state)));
        }
        Ok(())
    }
}

/// One descriptor per state of an actor kind, shared by all its machines
#[derive(Debug)]
pub struct DescriptorSet<S> {
    entries: Vec<Arc<AnimationDescriptor<S>>>,
}

impl<S: ActorState> DescriptorSet<S> {
    /// Build a set covering every state in `S::ALL`.
    ///
    /// Later entries for the same state replace earlier ones.
    pub fn new(
        entries: impl IntoIterator<Item = (S, AnimationDescriptor<S>)>,
    ) -> Result<Self, AnimationError> {
        let mut slots: Vec<Option<Arc<AnimationDescriptor<S>>>> = vec![None; S::ALL.len()];

        for (state, descriptor) in entries {
            descriptor.validate(state)?;
            slots[state.index()] = Some(Arc::new(descriptor));
        }

        let entries = S::ALL
            .iter()
            .zip(slots)
            .map(|(state, slot)| {
                slot.ok_or_else(|| AnimationError::MissingState(format!("{:?}", state)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Descriptor for `state`
    pub fn get(&self, state: S) -> Arc<AnimationDescriptor<S>> {
        Arc::clone(&self.entries[state.index()])
    }

    /// Number of steps in the cycle for `state`
    pub fn max_steps(&self, state: S) -> usize {
        self.entries[state.index()].max_steps
    }
}

/// Live counters for the animation of one actor
#[derive(Debug, Clone)]
pub struct AnimationCycle<S> {
    descriptor: Arc<AnimationDescriptor<S>>,
    frame_ticks: u32,
    step: usize,
}

impl<S: ActorState> AnimationCycle<S> {
    /// Start a fresh cycle at step 0
    pub fn new(descriptor: Arc<AnimationDescriptor<S>>) -> Self {
        Self {
            descriptor,
            frame_ticks: 0,
            step: 0,
        }
    }

    /// Current frame index
    pub fn step(&self) -> usize {
        self.step
    }

    /// Ticks spent on the current frame
    pub fn frame_ticks(&self) -> u32 {
        self.frame_ticks
    }

    pub fn descriptor(&self) -> &AnimationDescriptor<S> {
        &self.descriptor
    }

    pub fn allows_interrupt_by(&self, candidate: S) -> bool {
        self.descriptor.allows_interrupt_by(candidate)
    }

    /// Check if a frozen cycle reached its last frame
    pub fn is_holding_last_step(&self) -> bool {
        self.descriptor.freeze_on_last_step && self.step == self.descriptor.max_steps - 1
    }

    /// Advance one tick (called every frame)
    pub fn tick(&mut self) -> CycleEvent<S> {
        self.frame_ticks += 1;
        if self.frame_ticks < self.descriptor.max_frame_ticks {
            return CycleEvent::NoAction;
        }
        self.frame_ticks = 0;

        if !self.is_holding_last_step() {
            self.step += 1;
        }

        if self.step < self.descriptor.max_steps {
            return CycleEvent::NoAction;
        }

        // The owner discards this cycle on ForceState; resetting keeps the
        // step in range if it doesn't.
        self.step = 0;
        match self.descriptor.end_action {
            EndAction::Wrap => CycleEvent::Wrapped,
            EndAction::ForceState(target) => CycleEvent::ForceState(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::state::{EnemyState, NpcState, PlayerState};

    fn cycle(descriptor: AnimationDescriptor<PlayerState>) -> AnimationCycle<PlayerState> {
        AnimationCycle::new(Arc::new(descriptor))
    }

    #[test]
    fn test_step_advances_after_max_frame_ticks() {
        let mut c = cycle(AnimationDescriptor::looping(4, 3));
        for _ in 0..3 {
            assert_eq!(c.tick(), CycleEvent::NoAction);
        }
        assert_eq!(c.step(), 0);
        assert_eq!(c.frame_ticks(), 3);

        c.tick();
        assert_eq!(c.step(), 1);
        assert_eq!(c.frame_ticks(), 0);
    }

    #[test]
    fn test_wrap_at_end() {
        let mut c = cycle(AnimationDescriptor::looping(2, 3));
        let events: Vec<_> = (0..6).map(|_| c.tick()).collect();
        assert_eq!(events[5], CycleEvent::Wrapped);
        assert_eq!(c.step(), 0);
    }

    #[test]
    fn test_counters_stay_in_range() {
        let descriptors = [
            AnimationDescriptor::looping(3, 4),
            AnimationDescriptor::one_shot(2, 5, PlayerState::Idle),
            AnimationDescriptor::frozen(6, 7),
            AnimationDescriptor::looping(1, 1),
        ];

        for descriptor in descriptors {
            let max_ticks = descriptor.max_frame_ticks();
            let max_steps = descriptor.max_steps();
            let mut c = cycle(descriptor);
            for _ in 0..500 {
                c.tick();
                assert!(c.step() < max_steps);
                assert!(c.frame_ticks() < max_ticks);
            }
        }
    }

    #[test]
    fn test_one_shot_forces_target() {
        let mut c = cycle(AnimationDescriptor::one_shot(5, 7, PlayerState::Idle));
        for _ in 0..34 {
            assert_eq!(c.tick(), CycleEvent::NoAction);
        }
        assert_eq!(c.tick(), CycleEvent::ForceState(PlayerState::Idle));
    }

    #[test]
    fn test_freeze_on_last_step() {
        let mut c = cycle(AnimationDescriptor::frozen(6, 7));
        while c.step() < 6 {
            assert_eq!(c.tick(), CycleEvent::NoAction);
        }
        assert!(c.is_holding_last_step());

        for _ in 0..100 {
            assert_eq!(c.tick(), CycleEvent::NoAction);
            assert_eq!(c.step(), 6);
        }
    }

    #[test]
    fn test_whitelist_gate() {
        let restricted = AnimationDescriptor::one_shot(5, 7, PlayerState::Idle)
            .interruptible_by(&[PlayerState::Attack2]);
        assert!(!restricted.allows_interrupt_by(PlayerState::Idle));
        assert!(restricted.allows_interrupt_by(PlayerState::Attack2));

        let open = AnimationDescriptor::<PlayerState>::looping(4, 15);
        for state in PlayerState::ALL {
            assert!(open.allows_interrupt_by(*state));
        }

        let sealed = AnimationDescriptor::<PlayerState>::frozen(5, 14).interruptible_by(&[]);
        for state in PlayerState::ALL {
            assert!(!sealed.allows_interrupt_by(*state));
        }
    }

    #[test]
    fn test_descriptor_set_requires_every_state() {
        let result = DescriptorSet::new([
            (EnemyState::Idle, AnimationDescriptor::looping(9, 6)),
            (EnemyState::Walk, AnimationDescriptor::looping(12, 6)),
        ]);
        assert_eq!(
            result.unwrap_err(),
            AnimationError::MissingState("Attack".to_string())
        );
    }

    #[test]
    fn test_descriptor_set_rejects_degenerate_cycles() {
        let zero_ticks = DescriptorSet::new([(
            NpcState::Idle,
            AnimationDescriptor::looping(0, 5),
        )]);
        assert!(matches!(zero_ticks, Err(AnimationError::ZeroFrameTicks(_))));

        let empty = DescriptorSet::new([(
            NpcState::Idle,
            AnimationDescriptor::looping(5, 0),
        )]);
        assert!(matches!(empty, Err(AnimationError::EmptyCycle(_))));
    }

    #[test]
    fn test_descriptor_set_shares_descriptors() {
        let set = DescriptorSet::new([(
            NpcState::Idle,
            AnimationDescriptor::looping(10, 5),
        )])
        .unwrap();

        let a = set.get(NpcState::Idle);
        let b = set.get(NpcState::Idle);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(set.max_steps(NpcState::Idle), 5);
    }

    #[test]
    fn test_error_display() {
        let err = AnimationError::FrameCountMismatch {
            state: "Walk".to_string(),
            expected: 8,
            actual: 7,
        };
        assert_eq!(err.to_string(), "Animation for Walk expects 8 frames, got 7");
    }
}
