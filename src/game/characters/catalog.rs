// Animation timing and frame sources for every actor kind

use std::sync::Arc;

use super::animation::{AnimationDescriptor, AnimationError, DescriptorSet};
use super::state::{EnemyState, NpcState, PlayerState};
use super::stats::{ActorStats, BARKEEP_STATS, KING_STATS};
use crate::engine::assets::FrameSequence;
use crate::game::world::{dialogue, Conversation, ConversationId};

/// The stationary characters the player can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NpcKind {
    King,
    Barkeep,
}

impl NpcKind {
    pub const ALL: [NpcKind; 2] = [NpcKind::King, NpcKind::Barkeep];

    pub fn name(&self) -> &'static str {
        match self {
            Self::King => "king",
            Self::Barkeep => "keir",
        }
    }

    pub fn stats(&self) -> ActorStats {
        match self {
            Self::King => KING_STATS,
            Self::Barkeep => BARKEEP_STATS,
        }
    }

    /// Position of this NPC's script in the director's list
    pub fn conversation_id(&self) -> ConversationId {
        match self {
            Self::King => 0,
            Self::Barkeep => 1,
        }
    }

    pub fn conversation(&self) -> Conversation {
        match self {
            Self::King => dialogue::king_conversation(),
            Self::Barkeep => dialogue::barkeep_conversation(),
        }
    }

    pub fn frames(&self) -> Vec<(NpcState, FrameSequence)> {
        match self {
            Self::King => king_frames(),
            Self::Barkeep => barkeep_frames(),
        }
    }
}

/// Every descriptor set, validated once and shared by all actors of a kind
#[derive(Debug, Clone)]
pub struct ActorCatalog {
    pub player: Arc<DescriptorSet<PlayerState>>,
    pub enemy: Arc<DescriptorSet<EnemyState>>,
    pub king: Arc<DescriptorSet<NpcState>>,
    pub barkeep: Arc<DescriptorSet<NpcState>>,
}

impl ActorCatalog {
    /// Build and validate the stock timings
    pub fn standard() -> Result<Self, AnimationError> {
        Ok(Self {
            player: Arc::new(player_descriptors()?),
            enemy: Arc::new(enemy_descriptors()?),
            king: Arc::new(king_descriptors()?),
            barkeep: Arc::new(barkeep_descriptors()?),
        })
    }

    pub fn npc(&self, kind: NpcKind) -> &Arc<DescriptorSet<NpcState>> {
        match kind {
            NpcKind::King => &self.king,
            NpcKind::Barkeep => &self.barkeep,
        }
    }
}

/// Player timings. Each swing can only be cut short by the next one.
pub fn player_descriptors() -> Result<DescriptorSet<PlayerState>, AnimationError> {
    use PlayerState::*;

    DescriptorSet::new([
        (Idle, AnimationDescriptor::looping(4, 15)),
        (Walk, AnimationDescriptor::looping(5, 8)),
        (
            Attack1,
            AnimationDescriptor::one_shot(5, 7, Idle).interruptible_by(&[Attack2]),
        ),
        (
            Attack2,
            AnimationDescriptor::one_shot(5, 7, Idle).interruptible_by(&[Attack3]),
        ),
        (
            Attack3,
            AnimationDescriptor::one_shot(5, 7, Idle).interruptible_by(&[]),
        ),
        (Dead, AnimationDescriptor::frozen(5, 14).interruptible_by(&[])),
    ])
}

pub fn player_frames() -> Vec<(PlayerState, FrameSequence)> {
    vec![
        (PlayerState::Idle, FrameSequence::new("character", "idle_{}.png", 0, 15)),
        (PlayerState::Walk, FrameSequence::new("character", "run_{}.png", 0, 8)),
        (
            PlayerState::Attack1,
            FrameSequence::new("character", "attack_{}.png", 0, 7).zero_pad(2),
        ),
        (
            PlayerState::Attack2,
            FrameSequence::new("character", "attack_{}.png", 8, 7).zero_pad(2),
        ),
        (
            PlayerState::Attack3,
            FrameSequence::new("character", "attack_{}.png", 14, 7),
        ),
        (PlayerState::Dead, FrameSequence::new("character", "death_{}.png", 0, 14)),
    ]
}

/// Enemy timings. An attack can only restart itself.
pub fn enemy_descriptors() -> Result<DescriptorSet<EnemyState>, AnimationError> {
    use EnemyState::*;

    DescriptorSet::new([
        (Idle, AnimationDescriptor::looping(9, 6)),
        (Walk, AnimationDescriptor::looping(12, 6)),
        (
            Attack,
            AnimationDescriptor::one_shot(5, 6, Idle).interruptible_by(&[Attack]),
        ),
        (Dead, AnimationDescriptor::frozen(6, 7).interruptible_by(&[])),
    ])
}

pub fn enemy_frames() -> Vec<(EnemyState, FrameSequence)> {
    vec![
        (EnemyState::Idle, FrameSequence::new("enemy", "idle_{}.png", 0, 6)),
        (EnemyState::Walk, FrameSequence::new("enemy", "walk_{}.png", 0, 6)),
        (EnemyState::Attack, FrameSequence::new("enemy", "attack_{}.png", 0, 6)),
        (EnemyState::Dead, FrameSequence::new("enemy", "dead_{}.png", 0, 7)),
    ]
}

pub fn king_descriptors() -> Result<DescriptorSet<NpcState>, AnimationError> {
    DescriptorSet::new([(NpcState::Idle, AnimationDescriptor::looping(5, 17))])
}

pub fn king_frames() -> Vec<(NpcState, FrameSequence)> {
    vec![(
        NpcState::Idle,
        FrameSequence::new("king", "king_{}.png", 0, 17).zero_pad(2),
    )]
}

pub fn barkeep_descriptors() -> Result<DescriptorSet<NpcState>, AnimationError> {
    DescriptorSet::new([(NpcState::Idle, AnimationDescriptor::looping(10, 5))])
}

pub fn barkeep_frames() -> Vec<(NpcState, FrameSequence)> {
    vec![(
        NpcState::Idle,
        FrameSequence::new("keir", "barkeep_{}.png", 0, 5).zero_pad(2),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::state::ActorState;

    #[test]
    fn test_catalogs_are_complete() {
        assert!(player_descriptors().is_ok());
        assert!(enemy_descriptors().is_ok());
        assert!(king_descriptors().is_ok());
        assert!(barkeep_descriptors().is_ok());
    }

    #[test]
    fn test_npc_frame_counts_match_descriptors() {
        let catalog = ActorCatalog::standard().unwrap();
        for kind in NpcKind::ALL {
            let frames = kind.frames();
            assert_eq!(frames.len(), 1);
            assert_eq!(
                frames[0].1.count as usize,
                catalog.npc(kind).max_steps(NpcState::Idle)
            );
        }
    }

    #[test]
    fn test_npc_conversation_ids_are_distinct() {
        assert_eq!(NpcKind::King.conversation_id(), 0);
        assert_eq!(NpcKind::Barkeep.conversation_id(), 1);
        assert_eq!(NpcKind::Barkeep.conversation().len(), 4);
    }

    #[test]
    fn test_player_frame_counts_match_descriptors() {
        let descriptors = player_descriptors().unwrap();
        let frames = player_frames();
        assert_eq!(frames.len(), PlayerState::ALL.len());
        for (state, sequence) in frames {
            assert_eq!(
                sequence.count as usize,
                descriptors.max_steps(state),
                "{:?}",
                state
            );
        }
    }

    #[test]
    fn test_enemy_frame_counts_match_descriptors() {
        let descriptors = enemy_descriptors().unwrap();
        for (state, sequence) in enemy_frames() {
            assert_eq!(sequence.count as usize, descriptors.max_steps(state));
        }
    }

    #[test]
    fn test_combo_whitelists() {
        let descriptors = player_descriptors().unwrap();
        assert_eq!(
            descriptors.get(PlayerState::Attack1).reset_whitelist(),
            Some(&[PlayerState::Attack2][..])
        );
        assert_eq!(
            descriptors.get(PlayerState::Attack2).reset_whitelist(),
            Some(&[PlayerState::Attack3][..])
        );
        assert_eq!(
            descriptors.get(PlayerState::Attack3).reset_whitelist(),
            Some(&[][..])
        );
        assert_eq!(descriptors.get(PlayerState::Idle).reset_whitelist(), None);
    }
}
