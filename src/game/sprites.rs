// Frame tables for every actor kind

use anyhow::{Context, Result};
use log::info;

use super::characters::catalog::{enemy_frames, player_frames};
use super::characters::stats::{ENEMY_STATS, PLAYER_STATS};
use super::characters::{
    ActorCatalog, ActorState, DescriptorSet, EnemyState, NpcKind, NpcState,
    OrientedAnimationTable, PlayerState,
};
use crate::engine::assets::{AssetManager, FrameHandle, FrameSequence};

/// Frame handles per state and facing
pub type FrameTable<S> = OrientedAnimationTable<S, FrameHandle>;

/// Every frame table the draw list needs
#[derive(Debug, Clone)]
pub struct ActorSprites {
    pub player: FrameTable<PlayerState>,
    pub enemy: FrameTable<EnemyState>,
    pub king: FrameTable<NpcState>,
    pub barkeep: FrameTable<NpcState>,
}

impl ActorSprites {
    /// Decode all frames. Any missing file aborts startup.
    pub fn load(assets: &mut AssetManager, catalog: &ActorCatalog) -> Result<Self> {
        let sprites = Self {
            player: load_table(
                assets,
                &catalog.player,
                player_frames(),
                PLAYER_STATS.frame_size(),
            )
            .context("loading player frames")?,
            enemy: load_table(
                assets,
                &catalog.enemy,
                enemy_frames(),
                ENEMY_STATS.frame_size(),
            )
            .context("loading enemy frames")?,
            king: load_npc(assets, catalog, NpcKind::King)?,
            barkeep: load_npc(assets, catalog, NpcKind::Barkeep)?,
        };

        info!("Loaded {} frames", assets.stats().frame_count);
        Ok(sprites)
    }

    pub fn npc(&self, kind: NpcKind) -> &FrameTable<NpcState> {
        match kind {
            NpcKind::King => &self.king,
            NpcKind::Barkeep => &self.barkeep,
        }
    }
}

fn load_npc(
    assets: &mut AssetManager,
    catalog: &ActorCatalog,
    kind: NpcKind,
) -> Result<FrameTable<NpcState>> {
    load_table(
        assets,
        catalog.npc(kind),
        kind.frames(),
        kind.stats().frame_size(),
    )
    .with_context(|| format!("loading {} frames", kind.name()))
}

fn load_table<S: ActorState>(
    assets: &mut AssetManager,
    descriptors: &DescriptorSet<S>,
    sequences: Vec<(S, FrameSequence)>,
    size: (u32, u32),
) -> Result<FrameTable<S>> {
    let mut frames = Vec::with_capacity(sequences.len());
    for (state, sequence) in sequences {
        let oriented = assets
            .load_oriented(&sequence, size)
            .with_context(|| format!("{} animation", state.animation_name()))?;
        frames.push((state, oriented));
    }

    Ok(OrientedAnimationTable::new(descriptors, frames)?)
}
