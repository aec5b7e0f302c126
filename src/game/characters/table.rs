// Per-state, per-facing frame lookup

use super::animation::{AnimationError, DescriptorSet};
use super::state::ActorState;

/// Direction an actor is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing that points from `from_x` toward `to_x`, if they differ
    pub fn toward(from_x: f32, to_x: f32) -> Option<Self> {
        if to_x < from_x {
            Some(Self::Left)
        } else if to_x > from_x {
            Some(Self::Right)
        } else {
            None
        }
    }
}

/// The same animation drawn facing left and facing right
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedFrames<F> {
    left: Vec<F>,
    right: Vec<F>,
}

impl<F> OrientedFrames<F> {
    /// Pair up two sequences of equal length
    pub fn new(left: Vec<F>, right: Vec<F>) -> Option<Self> {
        (left.len() == right.len()).then_some(Self { left, right })
    }

    /// Derive the left-facing sequence by mirroring right-facing frames
    pub fn mirrored(right: Vec<F>, mut mirror: impl FnMut(&F) -> F) -> Self {
        let left = right.iter().map(&mut mirror).collect();
        Self { left, right }
    }

    /// Frames for one facing
    pub fn get(&self, facing: Facing) -> &[F] {
        match facing {
            Facing::Left => &self.left,
            Facing::Right => &self.right,
        }
    }

    pub fn len(&self) -> usize {
        self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.right.is_empty()
    }
}

/// Immutable frame table for one actor kind
#[derive(Debug, Clone)]
pub struct OrientedAnimationTable<S, F> {
    entries: Vec<OrientedFrames<F>>,
    _state: std::marker::PhantomData<S>,
}

impl<S: ActorState, F> OrientedAnimationTable<S, F> {
    /// Bind frame sequences to `descriptors`.
    ///
    /// Every state needs a sequence whose length equals its descriptor's
    /// step count, so a step index can never fall outside the table.
    pub fn new(
        descriptors: &DescriptorSet<S>,
        frames: impl IntoIterator<Item = (S, OrientedFrames<F>)>,
    ) -> Result<Self, AnimationError> {
        let mut slots: Vec<Option<OrientedFrames<F>>> =
            std::iter::repeat_with(|| None).take(S::ALL.len()).collect();

        for (state, sequence) in frames {
            let expected = descriptors.max_steps(state);
            if sequence.len() != expected {
                return Err(AnimationError::FrameCountMismatch {
                    state: format!("{:?}", state),
                    expected,
                    actual: sequence.len(),
                });
            }
            slots[state.index()] = Some(sequence);
        }

        let entries = S::ALL
            .iter()
            .zip(slots)
            .map(|(state, slot)| {
                slot.ok_or_else(|| AnimationError::MissingState(format!("{:?}", state)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            entries,
            _state: std::marker::PhantomData,
        })
    }

    /// Frame to draw for `state` at animation `step`
    pub fn frame(&self, state: S, facing: Facing, step: usize) -> Option<&F> {
        self.entries[state.index()].get(facing).get(step)
    }

    /// All frames for `state`
    pub fn frames(&self, state: S) -> &OrientedFrames<F> {
        &self.entries[state.index()]
    }
}
